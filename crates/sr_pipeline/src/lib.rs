//! sr_pipeline: deterministic seller report (validate → index → aggregate → rank → build report).
//!
//! The crate is I/O-free: callers hand in a loaded `Dataset` (or an in-memory JSON
//! value) plus strategy options and get the ranked report back. Each call owns its
//! accumulators; nothing is shared between calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sr_algo::TopProduct;
use sr_core::{
    entities::Dataset,
    ids::{SellerId, Sku},
    variables::{ReportParams, VarsError},
};

pub mod aggregate;
pub mod build_report;
pub mod index;
pub mod load;
pub mod options;
pub mod rank;
pub mod validate;

pub use options::{AnalysisOptions, OptionMember, CALCULATE_BONUS, CALCULATE_REVENUE};

// ---------------------------------------- Errors ----------------------------------------

/// What is wrong with a dataset that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetDefect {
    #[error("dataset is missing")]
    Missing,
    #[error("dataset is not an object")]
    NotAnObject,
    #[error("`{0}` is not a sequence")]
    NotASequence(&'static str),
    #[error("`{0}` is empty")]
    Empty(&'static str),
    #[error("decode: {0}")]
    Decode(String),
}

/// Input or options rejected before any computation. Checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("malformed dataset: {0}")]
    MalformedDataset(DatasetDefect),
    #[error("options were not provided")]
    MissingOptions,
    #[error("options must be a record of strategies")]
    InvalidOptionsType,
    #[error("required strategy `{0}` is missing")]
    MissingStrategy(&'static str),
    #[error("`{0}` is not a strategy of the expected kind")]
    WrongStrategyType(&'static str),
}

/// Single error surface of one analysis call. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("report params: {0}")]
    Params(#[from] VarsError),
    #[error("purchase record {record_index} references unknown seller `{seller_id}`")]
    UnknownSeller { record_index: usize, seller_id: SellerId },
    #[error("purchase record {record_index}, item {item_index} references unknown sku `{sku}`")]
    UnknownProduct { record_index: usize, item_index: usize, sku: Sku },
}

// ---------------------------------------- Report ----------------------------------------

/// One row of the report, in profit-descending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerReport {
    pub seller_id: SellerId,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

// -------------------------------------- Public API --------------------------------------

/// Run the full report with default [`ReportParams`].
pub fn analyze_sales_data(
    dataset: Option<&Dataset>,
    options: Option<&AnalysisOptions>,
) -> Result<Vec<SellerReport>, AnalysisError> {
    analyze_sales_data_with(dataset, options, &ReportParams::default())
}

/// Run the full report with explicit params.
pub fn analyze_sales_data_with(
    dataset: Option<&Dataset>,
    options: Option<&AnalysisOptions>,
    params: &ReportParams,
) -> Result<Vec<SellerReport>, AnalysisError> {
    let strategies = validate::validate(dataset, options)?;
    params.validate_domains()?;
    // validate() already rejected an absent dataset.
    let dataset = dataset.ok_or(ValidationError::MalformedDataset(DatasetDefect::Missing))?;

    let mut index = index::SalesIndex::build(&dataset.sellers, &dataset.products);
    aggregate::aggregate(&mut index, &dataset.purchase_records, strategies.revenue)?;

    let mut stats = index.into_stats();
    rank::rank_and_assign(&mut stats, strategies.bonus, params);

    let report = build_report::build_report(stats, params);
    tracing::debug!(rows = report.len(), "seller report built");
    Ok(report)
}

/// Decode `dataset` from in-memory JSON, then run the report.
///
/// A JSON `null` dataset is reported as missing, and collections that are not
/// arrays as malformed, before options are looked at.
pub fn analyze_sales_value(
    dataset: &Value,
    options: Option<&AnalysisOptions>,
    params: &ReportParams,
) -> Result<Vec<SellerReport>, AnalysisError> {
    let dataset = load::dataset_from_value(dataset)?;
    analyze_sales_data_with(Some(&dataset), options, params)
}
