//! LOAD stage for untyped input: in-memory JSON → typed `Dataset`.
//!
//! Shape checks run before decoding so that a collection that is absent or not an
//! array surfaces as a malformed dataset naming that collection. Every collection
//! is checked for array-ness before anything else; emptiness is left to `validate`.
//! Unknown fields are ignored.

use serde::Deserialize;
use serde_json::Value;

use sr_core::entities::Dataset;

use crate::options::is_truthy;
use crate::{DatasetDefect, ValidationError};

/// Decode a dataset from a JSON value already held in memory.
pub fn dataset_from_value(value: &Value) -> Result<Dataset, ValidationError> {
    let obj = match value {
        Value::Object(obj) => obj,
        v if !is_truthy(v) => return Err(ValidationError::MalformedDataset(DatasetDefect::Missing)),
        _ => return Err(ValidationError::MalformedDataset(DatasetDefect::NotAnObject)),
    };

    for name in Dataset::COLLECTIONS {
        if !obj.get(name).is_some_and(Value::is_array) {
            return Err(ValidationError::MalformedDataset(DatasetDefect::NotASequence(name)));
        }
    }

    let dataset = Dataset::deserialize(value)
        .map_err(|e| ValidationError::MalformedDataset(DatasetDefect::Decode(e.to_string())))?;

    tracing::debug!(
        sellers = dataset.sellers.len(),
        customers = dataset.customers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "decoded dataset"
    );
    Ok(dataset)
}

/// Same as [`dataset_from_value`], starting from JSON text.
pub fn dataset_from_json_str(s: &str) -> Result<Dataset, ValidationError> {
    let value: Value = serde_json::from_str(s)
        .map_err(|e| ValidationError::MalformedDataset(DatasetDefect::Decode(e.to_string())))?;
    dataset_from_value(&value)
}
