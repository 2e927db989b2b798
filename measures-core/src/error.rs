//! Error type for fallible measure and unit operations.

use alloc::string::String;
use thiserror::Error;

/// Result type for measure and unit operations.
pub type Result<T> = core::result::Result<T, MeasureError>;

/// Errors produced when building units or measures.
///
/// Mixing quantity kinds is not an error case: it is rejected at compile time by the `Measure<U>` type parameter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    /// A measured value would be negative (or NaN).
    #[error("invalid {kind} value {value}: a measure cannot be negative")]
    InvalidValue {
        /// Quantity kind of the rejected measure.
        kind: &'static str,
        /// The rejected scalar.
        value: f64,
    },

    /// A unit coefficient is zero, negative or not finite.
    #[error("invalid coefficient {coefficient} for unit `{symbol}`: must be positive and finite")]
    InvalidCoefficient {
        /// Symbol of the rejected unit.
        symbol: String,
        /// The rejected coefficient.
        coefficient: f64,
    },

    /// A unit constant is not finite.
    #[error("invalid constant {constant} for unit `{symbol}`: must be finite")]
    InvalidConstant {
        /// Symbol of the rejected unit.
        symbol: String,
        /// The rejected constant.
        constant: f64,
    },

    /// A magnitude name is not part of the prefix table.
    #[error("unknown magnitude `{0}`")]
    UnknownMagnitude(String),

    /// A serialized record could not be read.
    #[error("decode error: {0}")]
    Decode(String),

    /// A measure could not be written as a serialized record.
    #[error("encode error: {0}")]
    Encode(String),
}

impl MeasureError {
    /// Returns `true` for failures of the non-negativity invariant.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, MeasureError::InvalidValue { .. })
    }
}
