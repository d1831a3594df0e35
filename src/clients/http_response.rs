//! HTTP response types for the Billbee API client.

use std::collections::HashMap;

/// An HTTP response from the Billbee API.
///
/// Contains the response status code, headers and the parsed JSON body.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of the header `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Seconds to wait before issuing another request, from `Retry-After`.
    ///
    /// Billbee sends this with `429 Too Many Requests`. The client never
    /// retries on its own; the value is surfaced for callers that do.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
    }
}
