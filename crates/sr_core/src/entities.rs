//! Sales entities: the four input collections and their records.
//!
//! Field names follow the wire shape of the sales dataset (snake_case).
//! Optional descriptive fields are carried through but never read by the
//! report computation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::{CustomerId, SellerId, Sku};

/// A seller as listed in `sellers[]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub start_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub position: Option<String>,
}

impl Seller {
    pub fn new(id: SellerId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            start_date: None,
            position: None,
        }
    }

    /// "first last", joined by a single space.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A customer record. Only its presence in the dataset matters to the report.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Customer {
    pub id: CustomerId,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub first_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub last_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub phone: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub email: Option<String>,
}

impl Customer {
    pub fn new(id: CustomerId) -> Self {
        Self { id, first_name: None, last_name: None, phone: None, email: None }
    }
}

/// A catalogue product keyed by `sku`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    pub sku: Sku,
    pub purchase_price: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub category: Option<String>,
    /// Catalogue list price; line items carry their own `sale_price`.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub sale_price: Option<f64>,
}

impl Product {
    pub fn new(sku: Sku, purchase_price: f64) -> Self {
        Self { sku, purchase_price, name: None, category: None, sale_price: None }
    }
}

/// One line of a receipt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PurchaseItem {
    pub sku: Sku,
    pub quantity: u32,
    pub sale_price: f64,
    /// Percentage discount, 0..=100.
    pub discount: f64,
}

impl PurchaseItem {
    pub fn new(sku: Sku, quantity: u32, sale_price: f64, discount: f64) -> Self {
        Self { sku, quantity, sale_price, discount }
    }
}

/// A receipt attributed to one seller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PurchaseRecord {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub receipt_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub date: Option<String>,
    pub seller_id: SellerId,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub customer_id: Option<CustomerId>,
    pub items: Vec<PurchaseItem>,
    pub total_amount: f64,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub total_discount: Option<f64>,
}

impl PurchaseRecord {
    pub fn new(seller_id: SellerId, total_amount: f64, items: Vec<PurchaseItem>) -> Self {
        Self {
            receipt_id: None,
            date: None,
            seller_id,
            customer_id: None,
            items,
            total_amount,
            total_discount: None,
        }
    }
}

/// The complete input of one report computation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl Dataset {
    /// Collection names in validation order.
    pub const COLLECTIONS: [&'static str; 4] =
        ["sellers", "customers", "products", "purchase_records"];

    /// Length of a named collection; `None` for unknown names.
    pub fn collection_len(&self, name: &str) -> Option<usize> {
        match name {
            "sellers" => Some(self.sellers.len()),
            "customers" => Some(self.customers.len()),
            "products" => Some(self.products.len()),
            "purchase_records" => Some(self.purchase_records.len()),
            _ => None,
        }
    }
}
