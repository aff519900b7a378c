//! Net revenue of one purchased line.
//!
//! The engine calls a `RevenueStrategy` once per receipt line; the result
//! minus the line's purchase cost feeds the seller's profit.

use sr_core::entities::{Product, PurchaseItem};

/// Pluggable revenue policy. Closures `Fn(&PurchaseItem, &Product) -> f64`
/// implement it directly.
pub trait RevenueStrategy: Send + Sync {
    fn calculate_revenue(&self, item: &PurchaseItem, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseItem, &Product) -> f64 + Send + Sync,
{
    #[inline]
    fn calculate_revenue(&self, item: &PurchaseItem, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Reference policy: `sale_price * quantity * (1 - discount / 100)`.
///
/// The catalogue product is not consulted.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn calculate_revenue(&self, item: &PurchaseItem, _product: &Product) -> f64 {
        let full_price = item.sale_price * f64::from(item.quantity);
        full_price * (1.0 - item.discount / 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, sale_price: f64, discount: f64) -> PurchaseItem {
        PurchaseItem::new("SKU_001".parse().unwrap(), quantity, sale_price, discount)
    }

    fn product() -> Product {
        Product::new("SKU_001".parse().unwrap(), 50.0)
    }

    #[test]
    fn discounted_line_total() {
        let r = SimpleRevenue.calculate_revenue(&item(2, 100.0, 10.0), &product());
        assert!((r - 180.0).abs() < 1e-9);
    }

    #[test]
    fn no_discount_and_full_discount() {
        assert_eq!(SimpleRevenue.calculate_revenue(&item(3, 7.5, 0.0), &product()), 22.5);
        assert_eq!(SimpleRevenue.calculate_revenue(&item(3, 7.5, 100.0), &product()), 0.0);
    }

    #[test]
    fn closures_are_strategies() {
        let at_list_price = |i: &PurchaseItem, _p: &Product| i.sale_price * f64::from(i.quantity);
        let s: &dyn RevenueStrategy = &at_list_price;
        assert_eq!(s.calculate_revenue(&item(2, 100.0, 10.0), &product()), 200.0);
    }
}
