//! crates/sr_core/src/ids.rs
//! Opaque identifier newtypes for sellers, customers and products.
//! Non-empty, bounded length, no control characters; no I/O.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors returned when validating or parsing IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier longer than 256 bytes")]
    TooLong,
    #[error("identifier contains control characters")]
    ControlChar,
}

const MAX_ID_LEN: usize = 256;

#[inline]
fn check_opaque(s: &str) -> Result<(), IdError> {
    if s.is_empty() {
        return Err(IdError::Empty);
    }
    if s.len() > MAX_ID_LEN {
        return Err(IdError::TooLong);
    }
    if s.chars().any(char::is_control) {
        return Err(IdError::ControlChar);
    }
    Ok(())
}

macro_rules! opaque_string_newtype {
    ($(#[$m:meta])* $name:ident) => {
        $(#[$m])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
        pub struct $name(String);

        impl $name {
            #[inline] pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl FromStr for $name {
            type Err = IdError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                check_opaque(s)?;
                Ok($name(s.to_owned()))
            }
        }

        impl TryFrom<&str> for $name {
            type Error = IdError;
            #[inline]
            fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;
            fn try_from(value: String) -> Result<Self, Self::Error> {
                check_opaque(&value)?;
                Ok($name(value))
            }
        }

        impl From<$name> for String {
            #[inline]
            fn from(id: $name) -> String { id.0 }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str { &self.0 }
        }
    }
}

opaque_string_newtype!(
    /// Seller identifier as it appears in `sellers[].id` and `purchase_records[].seller_id`.
    SellerId
);
opaque_string_newtype!(
    /// Customer identifier.
    CustomerId
);
opaque_string_newtype!(
    /// Product key (stock keeping unit).
    Sku
);
