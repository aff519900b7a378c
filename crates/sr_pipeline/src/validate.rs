//! crates/sr_pipeline/src/validate.rs
//! Structural validation before any computation.
//!
//! Checks run in a fixed order and the first failure is returned:
//!   dataset shape → options presence → options type → strategy presence → strategy type.
//! Array-ness of the collections is enforced when a dataset is decoded (see `load`);
//! on a typed `Dataset` only presence and non-emptiness remain.

use serde_json::Value;

use sr_algo::{BonusStrategy, RevenueStrategy};
use sr_core::entities::Dataset;

use crate::options::{is_truthy, AnalysisOptions, OptionMember, CALCULATE_BONUS, CALCULATE_REVENUE};
use crate::{DatasetDefect, ValidationError};

/// Strategies resolved from validated options, borrowed for the rest of the call.
#[derive(Clone, Copy)]
pub struct Strategies<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Run every check and hand back the resolved strategies.
pub fn validate<'a>(
    dataset: Option<&Dataset>,
    options: Option<&'a AnalysisOptions>,
) -> Result<Strategies<'a>, ValidationError> {
    check_dataset(dataset)?;
    check_options(options)
}

/// Dataset present and all four collections non-empty.
pub fn check_dataset(dataset: Option<&Dataset>) -> Result<(), ValidationError> {
    let ds = dataset.ok_or(ValidationError::MalformedDataset(DatasetDefect::Missing))?;
    for name in Dataset::COLLECTIONS {
        if ds.collection_len(name) == Some(0) {
            return Err(ValidationError::MalformedDataset(DatasetDefect::Empty(name)));
        }
    }
    Ok(())
}

/// Options presence, shape, then both members (presence before kind).
pub fn check_options(
    options: Option<&AnalysisOptions>,
) -> Result<Strategies<'_>, ValidationError> {
    let members = match options {
        None => return Err(ValidationError::MissingOptions),
        Some(AnalysisOptions::Scalar(v)) if !is_truthy(v) => {
            return Err(ValidationError::MissingOptions)
        }
        Some(AnalysisOptions::Scalar(v)) => return check_plain_members(v),
        Some(AnalysisOptions::Record(m)) => m,
    };

    let revenue = members.get(CALCULATE_REVENUE);
    let bonus = members.get(CALCULATE_BONUS);

    for (name, member) in [(CALCULATE_REVENUE, revenue), (CALCULATE_BONUS, bonus)] {
        if !member.is_some_and(OptionMember::is_truthy) {
            return Err(ValidationError::MissingStrategy(name));
        }
    }

    let revenue = match revenue {
        Some(OptionMember::Revenue(r)) => r.as_ref(),
        _ => return Err(ValidationError::WrongStrategyType(CALCULATE_REVENUE)),
    };
    let bonus = match bonus {
        Some(OptionMember::Bonus(b)) => b.as_ref(),
        _ => return Err(ValidationError::WrongStrategyType(CALCULATE_BONUS)),
    };

    Ok(Strategies { revenue, bonus })
}

/// Object- or array-shaped data passed as options: members can only be plain
/// values, so this never succeeds. Other scalars have the wrong shape.
fn check_plain_members(v: &Value) -> Result<Strategies<'_>, ValidationError> {
    let members = match v {
        Value::Object(m) => Some(m),
        Value::Array(_) => None,
        _ => return Err(ValidationError::InvalidOptionsType),
    };
    for name in [CALCULATE_REVENUE, CALCULATE_BONUS] {
        let present = members.and_then(|m| m.get(name)).is_some_and(is_truthy);
        if !present {
            return Err(ValidationError::MissingStrategy(name));
        }
    }
    Err(ValidationError::WrongStrategyType(CALCULATE_REVENUE))
}
