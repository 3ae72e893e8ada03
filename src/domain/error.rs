//! Validation errors for inbound order requests.
//!
//! These errors are returned while parsing and converting an order request and
//! always map to a client error at the HTTP boundary.
//!
//! # Examples
//!
//! ```
//! use trigger_scheduler::domain::error::ValidationError;
//! use trigger_scheduler::domain::Side;
//!
//! let result: Result<Side, ValidationError> = "hold".parse();
//!
//! assert!(matches!(result, Err(ValidationError::InvalidSide { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when an order request violates its input contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body is not valid JSON.
    #[error("malformed JSON body: {reason}")]
    MalformedJson {
        /// Parser error message.
        reason: String,
    },

    /// The request body is not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A required field is absent.
    #[error("missing field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A field is present but cannot be parsed.
    #[error("invalid value for '{field}': {reason}")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// `side` is neither buy nor sell.
    #[error("'side' must be 'buy' or 'sell', got '{side}'")]
    InvalidSide {
        /// The value that was provided.
        side: String,
    },

    /// Amounts and prices must be strictly positive.
    #[error("'{field}' must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The invalid value that was provided.
        value: Decimal,
    },

    /// The converted amount does not fit in the token's integer units.
    #[error("{field} overflows token units")]
    Overflow {
        /// Which side of the order overflowed.
        field: &'static str,
    },

    /// The converted amount truncates to zero smallest units.
    #[error("{field} is below one smallest token unit")]
    ZeroUnits {
        /// Which side of the order vanished.
        field: &'static str,
    },
}
