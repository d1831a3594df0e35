//! REST-specific error types for the Billbee API client.
//!
//! - [`RestError::InvalidPath`]: When a REST API path fails validation
//! - [`RestError::Serialize`]: When a request body cannot be encoded as JSON
//! - [`RestError::Deserialize`]: When a response body does not match the expected envelope
//! - [`RestError::Http`]: Wraps underlying HTTP errors
//!
//! # Example
//!
//! ```rust,ignore
//! use billbee_api::clients::rest::{BillbeeRestClient, RestError};
//!
//! match client.get::<ApiResult<Customer>>("customers/1", None).await {
//!     Ok(result) => println!("Customer: {:?}", result.data),
//!     Err(RestError::Http(e)) => println!("HTTP error: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use billbee_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "".to_string() };
/// assert!(error.to_string().contains("Invalid"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// The REST API path is invalid.
    ///
    /// Returned when a path is empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body did not match the expected type.
    #[error("Failed to deserialize response from {path}: {source}")]
    Deserialize {
        /// The request path that produced the response.
        path: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    #[error(transparent)]
    Http(#[from] HttpError),
}
