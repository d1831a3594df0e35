//! Result envelopes returned by every Billbee endpoint.
//!
//! Single-item responses are wrapped in [`ApiResult<T>`]; list responses are
//! wrapped in [`ApiPagedResult<T>`], which adds [`PagingInformation`].
//!
//! ```json
//! {
//!   "Paging": {"Page": 1, "TotalPages": 3, "TotalRows": 120, "PageSize": 50},
//!   "ErrorMessage": null,
//!   "ErrorCode": 0,
//!   "ErrorDescription": null,
//!   "Data": [{"Id": 4711, "Name": "Jane Doe"}]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// `ErrorCode` value reported for successful calls.
pub const NO_ERROR: i32 = 0;

/// A single-item response envelope.
///
/// # Example
///
/// ```rust
/// use billbee_api::model::{ApiResult, Customer};
///
/// let result: ApiResult<Customer> =
///     serde_json::from_str(r#"{"ErrorCode":0,"Data":{"Id":4711}}"#).unwrap();
///
/// assert!(result.is_success());
/// assert_eq!(result.data.unwrap().id, Some(4711));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResult<T> {
    /// Human-readable error message, if the call failed.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Numeric error code; [`NO_ERROR`] on success.
    #[serde(default)]
    pub error_code: i32,
    /// Textual name of the error code.
    #[serde(default)]
    pub error_description: Option<String>,
    /// The payload.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResult<T> {
    /// Wraps `data` in a successful envelope.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            error_message: None,
            error_code: NO_ERROR,
            error_description: None,
            data: Some(data),
        }
    }

    /// Returns `true` if the API reported no error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code == NO_ERROR && self.error_message.is_none()
    }

    /// Returns a reference to the payload, if present.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for ApiResult<T> {
    fn default() -> Self {
        Self {
            error_message: None,
            error_code: NO_ERROR,
            error_description: None,
            data: None,
        }
    }
}

/// Paging metadata of a list response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", default)]
pub struct PagingInformation {
    /// The current page, 1-based.
    pub page: u32,
    /// Number of pages available.
    pub total_pages: u32,
    /// Number of rows across all pages.
    pub total_rows: u64,
    /// Rows per page.
    pub page_size: u32,
}

impl PagingInformation {
    /// Returns `true` if a page after the current one exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns `true` if a page before the current one exists.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.page > 1
    }
}

/// A list response envelope with paging metadata.
///
/// # Example
///
/// ```rust
/// use billbee_api::model::{ApiPagedResult, CustomerAddress};
///
/// let json = r#"{
///     "Paging": {"Page": 1, "TotalPages": 2, "TotalRows": 3, "PageSize": 2},
///     "ErrorCode": 0,
///     "Data": [{"Id": 1}, {"Id": 2}]
/// }"#;
/// let result: ApiPagedResult<Vec<CustomerAddress>> = serde_json::from_str(json).unwrap();
///
/// assert_eq!(result.data.as_ref().map(Vec::len), Some(2));
/// assert!(result.has_next_page());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ApiPagedResult<T> {
    /// Paging metadata.
    #[serde(default)]
    pub paging: Option<PagingInformation>,
    /// Human-readable error message, if the call failed.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Numeric error code; [`NO_ERROR`] on success.
    #[serde(default)]
    pub error_code: i32,
    /// Textual name of the error code.
    #[serde(default)]
    pub error_description: Option<String>,
    /// The payload, usually a `Vec` of entities.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiPagedResult<T> {
    /// Wraps `data` in a successful envelope with the given paging metadata.
    #[must_use]
    pub const fn new(data: T, paging: PagingInformation) -> Self {
        Self {
            paging: Some(paging),
            error_message: None,
            error_code: NO_ERROR,
            error_description: None,
            data: Some(data),
        }
    }

    /// Returns `true` if the API reported no error.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code == NO_ERROR && self.error_message.is_none()
    }

    /// Returns `true` if the paging metadata announces another page.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.paging.is_some_and(|p| p.has_next_page())
    }

    /// Returns a reference to the payload, if present.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> Default for ApiPagedResult<T> {
    fn default() -> Self {
        Self {
            paging: None,
            error_message: None,
            error_code: NO_ERROR,
            error_description: None,
            data: None,
        }
    }
}
