//! BUILD_REPORT stage: project ranked accumulators into `SellerReport`s.
//!
//! Revenue, profit and bonus are rounded half away from zero to
//! `params.money_decimals` places. Everything else passes through, and the
//! ranked order is kept.

use sr_algo::SellerStats;
use sr_core::rounding::round_to_places;
use sr_core::variables::ReportParams;

use crate::SellerReport;

/// Consume the ranked accumulators and return the report rows in the same order.
pub fn build_report(ranked: Vec<SellerStats>, params: &ReportParams) -> Vec<SellerReport> {
    let places = params.money_decimals;
    ranked
        .into_iter()
        .map(|s| SellerReport {
            seller_id: s.id,
            name: s.name,
            revenue: round_to_places(s.revenue, places),
            profit: round_to_places(s.profit, places),
            sales_count: s.sales_count,
            top_products: s.top_products,
            bonus: round_to_places(s.bonus, places),
        })
        .collect()
}
