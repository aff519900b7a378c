//! AGGREGATE stage: fold purchase records into seller accumulators.
//!
//! One in-order pass. Per record: `sales_count += 1`, `revenue += total_amount`.
//! Per item: `profit += revenue_strategy(item, product) - purchase_price * quantity`
//! and `products_sold[sku] += quantity`.
//!
//! `revenue` comes from receipt totals while `profit` is recomputed from the lines,
//! so the two are not required to agree.
//!
//! A record naming an unknown seller, or an item naming an unknown sku, aborts the
//! fold with a typed error; no partial totals escape.

use sr_algo::RevenueStrategy;
use sr_core::entities::PurchaseRecord;

use crate::index::SalesIndex;
use crate::AnalysisError;

/// Fold every record into `index.stats`.
pub fn aggregate(
    index: &mut SalesIndex<'_>,
    records: &[PurchaseRecord],
    revenue: &dyn RevenueStrategy,
) -> Result<(), AnalysisError> {
    tracing::debug!(records = records.len(), "aggregating purchase records");

    for (record_index, record) in records.iter().enumerate() {
        let slot = index.seller_slot(&record.seller_id).ok_or_else(|| {
            tracing::warn!(record_index, seller_id = %record.seller_id, "record references unknown seller");
            AnalysisError::UnknownSeller { record_index, seller_id: record.seller_id.clone() }
        })?;

        // Resolve every line before touching the accumulator.
        let mut products = Vec::with_capacity(record.items.len());
        for (item_index, item) in record.items.iter().enumerate() {
            let product = index.product(&item.sku).ok_or_else(|| {
                tracing::warn!(record_index, item_index, sku = %item.sku, "item references unknown product");
                AnalysisError::UnknownProduct { record_index, item_index, sku: item.sku.clone() }
            })?;
            products.push(product);
        }

        let seller = &mut index.stats[slot];
        seller.sales_count += 1;
        seller.revenue += record.total_amount;
        for (item, product) in record.items.iter().zip(products) {
            let cost = product.purchase_price * f64::from(item.quantity);
            seller.profit += revenue.calculate_revenue(item, product) - cost;
            seller.products_sold.add(&item.sku, u64::from(item.quantity));
        }
    }

    Ok(())
}
