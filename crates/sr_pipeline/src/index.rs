//! INDEX stage: one zeroed accumulator per listed seller, plus O(1) lookups
//! seller-id → accumulator slot and sku → catalogue product.
//!
//! Accumulators stay in seller input order so the later stable sort keeps that
//! order among equal profits. A repeated id keeps its earlier accumulator in the
//! list, but lookups resolve to the last one (last write wins).

use std::collections::HashMap;

use sr_algo::SellerStats;
use sr_core::entities::{Product, Seller};
use sr_core::ids::{SellerId, Sku};

#[derive(Debug)]
pub struct SalesIndex<'a> {
    /// One accumulator per `sellers[]` entry, input order.
    pub stats: Vec<SellerStats>,
    seller_slots: HashMap<&'a SellerId, usize>,
    products: HashMap<&'a Sku, &'a Product>,
}

impl<'a> SalesIndex<'a> {
    pub fn build(sellers: &'a [Seller], products: &'a [Product]) -> Self {
        tracing::debug!(sellers = sellers.len(), products = products.len(), "building indices");

        let mut stats = Vec::with_capacity(sellers.len());
        let mut seller_slots = HashMap::with_capacity(sellers.len());
        for (slot, seller) in sellers.iter().enumerate() {
            stats.push(SellerStats::new(seller.id.clone(), seller.display_name()));
            if seller_slots.insert(&seller.id, slot).is_some() {
                tracing::warn!(seller_id = %seller.id, "duplicate seller id; later entry wins lookups");
            }
        }

        let mut by_sku = HashMap::with_capacity(products.len());
        for product in products {
            if by_sku.insert(&product.sku, product).is_some() {
                tracing::warn!(sku = %product.sku, "duplicate product sku; later entry wins");
            }
        }

        Self { stats, seller_slots, products: by_sku }
    }

    /// Slot in `stats` for a seller id.
    pub fn seller_slot(&self, id: &SellerId) -> Option<usize> {
        self.seller_slots.get(id).copied()
    }

    pub fn product(&self, sku: &Sku) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    /// Hand the accumulators over to aggregation/ranking.
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}
