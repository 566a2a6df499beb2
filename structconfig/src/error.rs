//! Error types for value coercion

use std::num::{ParseFloatError, ParseIntError};

/// Reasons a single value could not be coerced into a field.
///
/// These never escape [`crate::from_environ`]; they are recorded in a
/// [`crate::de::DecodeReport`] and the field keeps its prior value.
/// Messages deliberately omit the rejected input so secret values
/// cannot leak through logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Text could not be parsed as a base-10 integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    /// Text could not be parsed as a decimal floating point number.
    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    /// Text is not one of the accepted boolean spellings.
    #[error("invalid boolean: expected one of 1, t, true, 0, f, false")]
    InvalidBool,
}

/// A [`crate::Value`] did not hold the requested native type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected} value, found {found}")]
pub struct ValueTypeError {
    /// Name of the requested type
    pub expected: &'static str,
    /// Name of the type actually held
    pub found: &'static str,
}
