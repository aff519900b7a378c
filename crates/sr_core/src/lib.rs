//! sr_core: Core types, rounding, ordering helpers and report parameters.
//!
//! This crate is **I/O-free**. It defines stable types/APIs used across the
//! engine (`sr_algo`, `sr_pipeline`).
//!
//! - Identifier newtypes: `SellerId`, `CustomerId`, `Sku`
//! - Sales entities and the four-collection `Dataset`
//! - Fixed-point money rounding (half away from zero)
//! - Stable ordering helpers used by ranking
//! - `ReportParams` with safe defaults and domain validation
//!
//! Serialization derives are gated behind the `serde` feature (on by default).

#![forbid(unsafe_code)]

pub mod determinism;
pub mod entities;
pub mod ids;
pub mod variables;

pub mod rounding {
    //! Fixed-point rounding of money values.

    /// Largest number of decimal places `round_to_places` accepts.
    pub const MAX_PLACES: u32 = 6;

    /// Round `value` to `places` decimals, half away from zero.
    ///
    /// Non-finite inputs are returned unchanged. `places` above [`MAX_PLACES`]
    /// is clamped. A result of zero is always `+0.0`.
    pub fn round_to_places(value: f64, places: u32) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let factor = 10f64.powi(places.min(MAX_PLACES) as i32);
        let scaled = value * factor;
        // Scaling can overflow for huge magnitudes; those have no fractional part anyway.
        if !scaled.is_finite() {
            return value;
        }
        let rounded = scaled.round() / factor;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Two-decimal money rounding used by the report projection.
    #[inline]
    pub fn round_money(value: f64) -> f64 {
        round_to_places(value, 2)
    }

}

pub use entities::{Customer, Dataset, Product, PurchaseItem, PurchaseRecord, Seller};
pub use ids::{CustomerId, IdError, SellerId, Sku};
pub use variables::{ReportParams, TopProductsOrder, VarsError};
