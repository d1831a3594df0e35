//! HTTP client for Billbee API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Billbee API.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::BillbeeConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the application API key.
pub const API_KEY_HEADER: &str = "X-Billbee-Api-Key";

/// Body fields copied into [`HttpResponseError::message`].
const ERROR_FIELDS: &[&str] = &["ErrorMessage", "ErrorCode", "ErrorDescription", "Message"];

/// HTTP client for making requests to the Billbee API.
///
/// The client handles:
/// - Base URL construction from configuration
/// - Default headers including User-Agent, API key and Basic authorization
/// - Response parsing and status-code based error mapping
///
/// Each request is sent exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use billbee_api::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "customers/4711")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://app.billbee.io/api/v1`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &BillbeeConfig) -> Self {
        let base_uri = config.base_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Billbee API Rust Client v{SDK_VERSION} | Rust {rust_version}");

        let credentials = format!(
            "{}:{}",
            config.username().as_ref(),
            config.api_password().as_ref()
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );
        default_headers.insert(
            "Authorization".to_string(),
            format!("Basic {}", BASE64.encode(credentials)),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Billbee API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}/{}", self.base_uri, request.path);


        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query.as_pairs());
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "Sending Billbee API request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, body_text);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            path = %request.path,
            request_id = response.request_id().unwrap_or("-"),
            retry_after = ?response.retry_after(),
            "Billbee API request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses a response body.
    ///
    /// An empty body becomes `{}`. A body that is not JSON is kept as a JSON
    /// string on success, so it cannot decode into an envelope, and as
    /// `{"raw_body": ...}` on error statuses for the error message.
    fn parse_body(code: u16, text: String) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if (200..300).contains(&code) => serde_json::Value::String(text),
            Err(_) => serde_json::json!({ "raw_body": text }),
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error fields of a response body to JSON.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ERROR_FIELDS {
            if let Some(value) = response.body.get(*field).filter(|v| !v.is_null()) {
                error_body.insert((*field).to_string(), value.clone());
            }
        }

        if let Some(raw) = response.body.get("raw_body") {
            error_body.insert("raw_body".to_string(), raw.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiPassword, BaseUrl, Username};
    use serde_json::json;

    fn create_test_config() -> BillbeeConfig {
        BillbeeConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .username(Username::new("user").unwrap())
            .api_password(ApiPassword::new("pass").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_uses_default_base_url() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(client.base_uri(), "https://app.billbee.io/api/v1");
    }

    #[test]
    fn test_client_construction_with_custom_base_url() {
        let config = BillbeeConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .username(Username::new("u").unwrap())
            .api_password(ApiPassword::new("p").unwrap())
            .base_url(BaseUrl::new("http://localhost:1234/api/v1/").unwrap())
            .build()
            .unwrap();

        let client = HttpClient::new(&config);
        assert_eq!(client.base_uri(), "http://localhost:1234/api/v1");
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get(API_KEY_HEADER),
            Some(&"test-api-key".to_string())
        );
    }

    #[test]
    fn test_basic_authorization_header() {
        let client = HttpClient::new(&create_test_config());
        // base64("user:pass")
        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Basic dXNlcjpwYXNz".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Billbee API Rust Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BillbeeConfig::builder()
            .api_key(ApiKey::new("k").unwrap())
            .username(Username::new("u").unwrap())
            .api_password(ApiPassword::new("p").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&create_test_config());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_serialize_error_keeps_known_fields_only() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
        let response = HttpResponse::new(
            400,
            headers,
            json!({
                "ErrorMessage": "Invalid customer",
                "ErrorCode": 3,
                "ErrorDescription": null,
                "Data": {"Id": 1}
            }),
        );

        let message = HttpClient::serialize_error(&response);
        let parsed: serde_json::Value = serde_json::from_str(&message).unwrap();

        assert_eq!(parsed["ErrorMessage"], "Invalid customer");
        assert_eq!(parsed["ErrorCode"], 3);
        assert!(parsed.get("ErrorDescription").is_none());
        assert!(parsed.get("Data").is_none());
        assert!(parsed["error_reference"].as_str().unwrap().contains("req-1"));
    }

    #[test]
    fn test_parse_body_empty_becomes_empty_object() {
        assert_eq!(HttpClient::parse_body(200, String::new()), json!({}));
        assert_eq!(HttpClient::parse_body(204, "  \n".to_string()), json!({}));
    }

    #[test]
    fn test_parse_body_keeps_non_json_success_body_as_string() {
        let body = HttpClient::parse_body(200, "<html>maintenance</html>".to_string());
        assert_eq!(body, json!("<html>maintenance</html>"));
    }

    #[test]
    fn test_parse_body_wraps_non_json_error_body() {
        let body = HttpClient::parse_body(404, "Not Found".to_string());
        assert_eq!(body, json!({"raw_body": "Not Found"}));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
