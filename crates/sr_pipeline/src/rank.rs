//! RANK stage: order sellers by profit and finalize bonus and top products.
//!
//! The sort is stable and descending. A NaN profit ranks after every number.
//! Bonuses are assigned after sorting, in rank order, with `total` = number of
//! ranked sellers.

use sr_algo::{select_top_products, BonusStrategy, SellerStats};
use sr_core::determinism::sort_desc_stable_by;
use sr_core::variables::ReportParams;

/// Sort `stats` in place and fill `bonus` and `top_products` on every seller.
pub fn rank_and_assign(stats: &mut [SellerStats], bonus: &dyn BonusStrategy, params: &ReportParams) {
    tracing::debug!(sellers = stats.len(), "ranking sellers by profit");

    sort_desc_stable_by(stats, |s| s.profit);

    let total = stats.len();
    for (index, seller) in stats.iter_mut().enumerate() {
        seller.bonus = bonus.calculate_bonus(index, total, seller);
        seller.top_products = select_top_products(
            &seller.products_sold,
            params.top_products_order,
            params.top_products_limit,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_algo::BonusByProfit;
    use sr_core::variables::TopProductsOrder;

    fn stats(id: &str, profit: f64) -> SellerStats {
        let mut s = SellerStats::new(id.parse().unwrap(), id);
        s.profit = profit;
        s
    }

    fn ids(v: &[SellerStats]) -> Vec<&str> {
        v.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn profit_descending_stable_for_ties() {
        let mut v = vec![stats("a", 10.0), stats("b", 30.0), stats("c", 10.0), stats("d", 30.0)];
        rank_and_assign(&mut v, &BonusByProfit, &ReportParams::default());
        assert_eq!(ids(&v), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn bonus_sees_rank_and_total() {
        let mut v = vec![stats("a", 1.0), stats("b", 2.0), stats("c", 3.0)];
        let by_rank = |index: usize, total: usize, _s: &SellerStats| (index * 100 + total) as f64;
        rank_and_assign(&mut v, &by_rank, &ReportParams::default());
        let got: Vec<f64> = v.iter().map(|s| s.bonus).collect();
        assert_eq!(got, vec![3.0, 103.0, 203.0]);
    }

    #[test]
    fn reference_bonus_tiers_after_sort() {
        let mut v: Vec<SellerStats> = [200.0, 1000.0, 400.0, 800.0, 600.0]
            .iter()
            .enumerate()
            .map(|(i, &p)| stats(&format!("s{i}"), p))
            .collect();
        rank_and_assign(&mut v, &BonusByProfit, &ReportParams::default());
        let bonuses: Vec<f64> = v.iter().map(|s| s.bonus).collect();
        let want = [150.0, 80.0, 60.0, 20.0, 0.0];
        for (g, w) in bonuses.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "{bonuses:?}");
        }
    }

    #[test]
    fn top_products_follow_params() {
        let mut s = stats("a", 1.0);
        for (sku, q) in [("x", 1), ("y", 5), ("z", 3)] {
            s.products_sold.add(&sku.parse().unwrap(), q);
        }
        let mut v = vec![s];

        rank_and_assign(&mut v, &BonusByProfit, &ReportParams::default());
        let first: Vec<&str> = v[0].top_products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(first, vec!["x", "y", "z"]);

        let params = ReportParams {
            top_products_limit: 2,
            top_products_order: TopProductsOrder::QuantityDesc,
            ..ReportParams::default()
        };
        rank_and_assign(&mut v, &BonusByProfit, &params);
        let best: Vec<&str> = v[0].top_products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(best, vec!["y", "z"]);
    }

    #[test]
    fn nan_profit_ranks_last() {
        let mut v = vec![stats("a", 1.0), stats("b", f64::NAN), stats("c", 5.0), stats("d", 3.0)];
        rank_and_assign(&mut v, &BonusByProfit, &ReportParams::default());
        assert_eq!(ids(&v), vec!["c", "d", "a", "b"]);
        // Last place pays exactly zero, NaN or not.
        assert_eq!(v[3].bonus, 0.0);
    }
}
