//! Error types for structured error handling.
//!
//! Parsing and clamping of numeric values never fails: unparsable text falls
//! back to zero and out-of-range values are clamped. The only fallible
//! operations are lookups of parameter and field identities by name.

use thiserror::Error;

/// Errors from resolving parameter or input-field names.
///
/// # Examples
/// ```
/// use frontier_core::types::ParamError;
///
/// let err = ParamError::UnknownParameter("beta".to_string());
/// assert_eq!(format!("{}", err), "Unknown parameter: beta");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// Name does not match any portfolio parameter.
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Name does not match any editable input field.
    #[error("Unknown input field: {0}")]
    UnknownField(String),
}
