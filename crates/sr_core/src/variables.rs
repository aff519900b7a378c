//! variables.rs: Report parameters with safe defaults and domain validation.
//!
//! Defaults reproduce the reference report exactly: ten top products kept in
//! first-sale order and money rounded to two decimals.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hard upper bound on the length of a seller's top-product list.
pub const MAX_TOP_PRODUCTS: usize = 10;

/// ------------ Macros ------------

/// Define an enum with explicit wire tokens.
macro_rules! wire_enum {
    ($(#[$m:meta])* $name:ident => { $($variant:ident = $token:expr),+ $(,)? }) => {
        $(#[$m])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }
    };
}

wire_enum!(
    /// Ordering applied before truncating `products_sold` to the top list.
    ///
    /// `FirstSold` matches the historical report: its "by quantity" sort never
    /// looked at quantities, so entries stayed in first-sale order.
    /// `QuantityDesc` is the corrected ordering.
    TopProductsOrder => {
        FirstSold    = "first_sold",
        QuantityDesc = "quantity_desc",
    }
);

/// ------------ Params ------------

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ReportParams {
    /// Maximum entries in `top_products` (1..=10).
    pub top_products_limit: usize,
    pub top_products_order: TopProductsOrder,
    /// Decimal places for revenue, profit and bonus (0..=6).
    pub money_decimals: u32,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_products_limit: MAX_TOP_PRODUCTS,
            top_products_order: TopProductsOrder::FirstSold,
            money_decimals: 2,
        }
    }
}

/// -------- Validation --------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VarsError {
    #[error("domain: {0}")]
    Domain(String),
    #[error("parse: {0}")]
    Parse(String),
}

pub type VarsResult<T> = Result<T, VarsError>;

impl ReportParams {
    /// Validate numeric domains.
    pub fn validate_domains(&self) -> VarsResult<()> {
        if !(1..=MAX_TOP_PRODUCTS).contains(&self.top_products_limit) {
            return Err(VarsError::Domain(format!(
                "top_products_limit must be in 1..={MAX_TOP_PRODUCTS}, got {}",
                self.top_products_limit
            )));
        }
        if self.money_decimals > crate::rounding::MAX_PLACES {
            return Err(VarsError::Domain(format!(
                "money_decimals must be in 0..={}, got {}",
                crate::rounding::MAX_PLACES,
                self.money_decimals
            )));
        }
        Ok(())
    }

    /// Parse from an in-memory JSON object; missing keys take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json_str(s: &str) -> VarsResult<Self> {
        let params: ReportParams =
            serde_json::from_str(s).map_err(|e| VarsError::Parse(e.to_string()))?;
        params.validate_domains()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let p = ReportParams::default();
        assert!(p.validate_domains().is_ok());
        assert_eq!(p.top_products_limit, 10);
        assert_eq!(p.top_products_order, TopProductsOrder::FirstSold);
        assert_eq!(p.money_decimals, 2);
    }

    #[test]
    fn limit_out_of_range() {
        let mut p = ReportParams::default();
        p.top_products_limit = 0;
        assert!(matches!(p.validate_domains(), Err(VarsError::Domain(_))));
        p.top_products_limit = 11;
        assert!(matches!(p.validate_domains(), Err(VarsError::Domain(_))));
    }

    #[test]
    fn decimals_out_of_range() {
        let p = ReportParams { money_decimals: 7, ..ReportParams::default() };
        assert!(matches!(p.validate_domains(), Err(VarsError::Domain(_))));
    }

    #[test]
    fn wire_tokens() {
        assert_eq!(TopProductsOrder::FirstSold.as_str(), "first_sold");
        assert_eq!(TopProductsOrder::QuantityDesc.as_str(), "quantity_desc");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_partial_json() {
        let p = ReportParams::from_json_str(r#"{"top_products_order": "quantity_desc"}"#).unwrap();
        assert_eq!(p.top_products_order, TopProductsOrder::QuantityDesc);
        assert_eq!(p.top_products_limit, 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rejects_unknown_keys_and_bad_domains() {
        assert!(matches!(
            ReportParams::from_json_str(r#"{"top_n": 3}"#),
            Err(VarsError::Parse(_))
        ));
        assert!(matches!(
            ReportParams::from_json_str(r#"{"top_products_limit": 50}"#),
            Err(VarsError::Domain(_))
        ));
    }
}
