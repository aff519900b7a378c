//! Rank-based bonus.
//!
//! Contract:
//! - Called once per seller after sellers are sorted by profit, descending.
//! - `index` is the zero-based rank, `total` the number of ranked sellers.
//!
//! Reference tiers are chosen by rank alone, tested in this order:
//! rank 0 → 15%, rank 1 or 2 → 10%, last place → 0, anyone else → 5%.
//! Because the top-three tests come first, a sole seller (rank 0 and last)
//! still receives 15%.

use crate::SellerStats;

/// Pluggable bonus policy. Closures `Fn(usize, usize, &SellerStats) -> f64`
/// implement it directly.
pub trait BonusStrategy: Send + Sync {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> f64 + Send + Sync,
{
    #[inline]
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        self(index, total, seller)
    }
}

/// Tier a rank falls into under the reference policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BonusTier {
    First,
    RunnerUp,
    Last,
    Standard,
}

impl BonusTier {
    pub fn for_rank(index: usize, total: usize) -> Self {
        if index == 0 {
            BonusTier::First
        } else if index == 1 || index == 2 {
            BonusTier::RunnerUp
        } else if index + 1 == total {
            BonusTier::Last
        } else {
            BonusTier::Standard
        }
    }

    /// Share of profit paid for this tier.
    pub fn rate(self) -> f64 {
        match self {
            BonusTier::First => 0.15,
            BonusTier::RunnerUp => 0.10,
            BonusTier::Last => 0.0,
            BonusTier::Standard => 0.05,
        }
    }
}

/// Reference policy: profit times the rate of the seller's rank tier.
#[derive(Clone, Copy, Debug, Default)]
pub struct BonusByProfit;

impl BonusStrategy for BonusByProfit {
    fn calculate_bonus(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        match BonusTier::for_rank(index, total) {
            // Exact zero for last place, even with negative or NaN profit.
            BonusTier::Last => 0.0,
            tier => seller.profit * tier.rate(),
        }
    }
}
