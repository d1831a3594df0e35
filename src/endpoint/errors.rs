//! Error types for endpoint façades.

use crate::clients::RestError;
use thiserror::Error;

/// Error type for endpoint operations.
///
/// # Example
///
/// ```rust
/// use billbee_api::endpoint::EndPointError;
///
/// let error = EndPointError::InvalidValue {
///     field: "customer.id",
///     reason: "must be set to update a customer".to_string(),
/// };
/// assert!(error.to_string().contains("customer.id"));
/// ```
#[derive(Debug, Error)]
pub enum EndPointError {
    /// An argument failed local validation; no request was sent.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        /// The offending argument or field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The REST client failed. Passed through as returned.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl EndPointError {
    pub(crate) fn missing_id(field: &'static str, action: &str) -> Self {
        Self::InvalidValue {
            field,
            reason: format!("must be set to {action}"),
        }
    }
}
