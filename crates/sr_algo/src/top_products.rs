//! Bounded top-product list from a seller's `products_sold` tally.
//!
//! Orders:
//! - `FirstSold`: entries keep first-sale order. This is what the historical
//!   report produced; its descending sort compared whole entries instead of
//!   their quantities, which left the order untouched.
//! - `QuantityDesc`: quantity descending; equal quantities keep first-sale order.
//!
//! The result never exceeds `limit` entries.

use sr_core::determinism::OrderedTally;
use sr_core::ids::Sku;
use sr_core::variables::TopProductsOrder;

use crate::TopProduct;

/// Project `sold` into `{sku, quantity}` pairs, order them, and keep the first `limit`.
pub fn select_top_products(
    sold: &OrderedTally<Sku>,
    order: TopProductsOrder,
    limit: usize,
) -> Vec<TopProduct> {
    let mut entries: Vec<TopProduct> = sold
        .iter()
        .map(|(sku, quantity)| TopProduct { sku: sku.clone(), quantity })
        .collect();

    if let TopProductsOrder::QuantityDesc = order {
        // sort_by is stable: ties stay in first-sale order.
        entries.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    }

    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sku(s: &str) -> Sku {
        s.parse().unwrap()
    }

    fn tally(pairs: &[(&str, u64)]) -> OrderedTally<Sku> {
        let mut t = OrderedTally::new();
        for (k, q) in pairs {
            t.add(&sku(k), *q);
        }
        t
    }

    fn skus(v: &[TopProduct]) -> Vec<&str> {
        v.iter().map(|p| p.sku.as_str()).collect()
    }

    #[test]
    fn first_sold_keeps_insertion_order() {
        let t = tally(&[("B", 1), ("A", 9), ("C", 4), ("B", 1)]);
        let top = select_top_products(&t, TopProductsOrder::FirstSold, 10);
        assert_eq!(skus(&top), vec!["B", "A", "C"]);
        assert_eq!(top[0].quantity, 2);
    }

    #[test]
    fn quantity_desc_with_stable_ties() {
        let t = tally(&[("B", 4), ("A", 9), ("C", 4), ("D", 1)]);
        let top = select_top_products(&t, TopProductsOrder::QuantityDesc, 10);
        assert_eq!(skus(&top), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn truncates_to_limit() {
        let pairs: Vec<(String, u64)> = (0..25).map(|i| (format!("SKU_{i:03}"), i)).collect();
        let mut t = OrderedTally::new();
        for (k, q) in &pairs {
            t.add(&sku(k), *q);
        }
        let first = select_top_products(&t, TopProductsOrder::FirstSold, 10);
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].sku.as_str(), "SKU_000");
        let best = select_top_products(&t, TopProductsOrder::QuantityDesc, 3);
        assert_eq!(skus(&best), vec!["SKU_024", "SKU_023", "SKU_022"]);
    }

    #[test]
    fn empty_tally_yields_empty_list() {
        let t = OrderedTally::new();
        assert!(select_top_products(&t, TopProductsOrder::QuantityDesc, 10).is_empty());
    }

    proptest! {
        #[test]
        fn never_exceeds_limit(qs in proptest::collection::vec(1u64..50, 0..40), limit in 1usize..=10) {
            let mut t = OrderedTally::new();
            for (i, q) in qs.iter().enumerate() {
                t.add(&sku(&format!("P{}", i % 17)), *q);
            }
            for order in [TopProductsOrder::FirstSold, TopProductsOrder::QuantityDesc] {
                let top = select_top_products(&t, order, limit);
                prop_assert!(top.len() <= limit);
                prop_assert_eq!(top.len(), t.len().min(limit));
            }
        }

        #[test]
        fn quantity_desc_is_sorted(qs in proptest::collection::vec(1u64..50, 1..30)) {
            let mut t = OrderedTally::new();
            for (i, q) in qs.iter().enumerate() {
                t.add(&sku(&format!("P{i}")), *q);
            }
            let top = select_top_products(&t, TopProductsOrder::QuantityDesc, 10);
            prop_assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
        }
    }
}
