// crates/sr_algo/src/lib.rs
#![forbid(unsafe_code)]

use sr_core::determinism::OrderedTally;

// Core IDs re-exported for callers that only depend on the algorithm layer.
pub use sr_core::ids::{SellerId, Sku};

// ----------------------------- Per-seller accumulator --------------------------------

/// Running totals for one seller. Created zeroed by the index stage, mutated by
/// aggregation, then finalized (bonus, top products) by ranking.
#[derive(Clone, Debug)]
pub struct SellerStats {
    pub id: SellerId,
    /// Display name, "first last".
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    /// sku → cumulative quantity, in first-sale order.
    pub products_sold: OrderedTally<Sku>,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

impl SellerStats {
    pub fn new(id: SellerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: OrderedTally::new(),
            bonus: 0.0,
            top_products: Vec::new(),
        }
    }
}

/// One entry of a seller's top-product list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}

// ----------------------------- Strategies (public surface) ---------------------------

pub mod strategy {
    pub mod bonus;
    pub mod revenue;

    pub use bonus::{BonusByProfit, BonusStrategy, BonusTier};
    pub use revenue::{RevenueStrategy, SimpleRevenue};
}

pub use strategy::{BonusByProfit, BonusStrategy, BonusTier, RevenueStrategy, SimpleRevenue};

// ----------------------------- Top products -----------------------------------------

pub mod top_products;

pub use top_products::select_top_products;
