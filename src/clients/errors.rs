//! HTTP-specific error types for the Billbee API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors and request validation failures.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use billbee_api::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {}", e);
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message carries the error fields of the response body
/// (`ErrorMessage`, `ErrorCode`, `ErrorDescription`, or `Message` for
/// framework-level errors) serialized as JSON.
///
/// # Example
///
/// ```rust
/// use billbee_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"Message":"Authorization has been denied for this request."}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("Authorization"));
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent if it fails validation
/// checks, such as a missing body for POST/PUT/PATCH requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request that requires data was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"ErrorMessage":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"ErrorMessage":"Not Found"}"#);
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "patch".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cannot use patch without specifying data."
        );
    }

    #[test]
    fn test_status_is_only_reported_for_responses() {
        let response = HttpError::Response(HttpResponseError {
            code: 429,
            message: "{}".to_string(),
            error_reference: None,
        });
        assert_eq!(response.status(), Some(429));

        let invalid = HttpError::InvalidRequest(InvalidHttpRequestError::MissingBody {
            method: "post".to_string(),
        });
        assert_eq!(invalid.status(), None);
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let http_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            message: "test".to_string(),
            error_reference: None,
        };
        let _ = http_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::MissingBody {
            method: "put".to_string(),
        };
        let _ = invalid_error;
    }
}
