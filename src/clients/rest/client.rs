//! REST client implementation for the Billbee API.
//!
//! This module provides the [`RestClient`] type, the production
//! implementation of [`BillbeeRestClient`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::{BillbeeRestClient, RestError};
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse, QueryParams};
use crate::config::BillbeeConfig;

/// REST API client for the Billbee API.
///
/// Serializes request bodies, normalizes paths and deserializes response
/// bodies into the caller's envelope type. Each call is a single HTTP
/// request; nothing is retried.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use billbee_api::clients::rest::{BillbeeRestClient, RestClient};
/// use billbee_api::model::{ApiResult, Customer};
///
/// let client = RestClient::new(&config);
/// let result: ApiResult<Customer> = client.get("/customers/4711", None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given configuration.
    #[must_use]
    pub fn new(config: &BillbeeConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query_params.clone());
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<T, RestError> {
        let response = self.send(method, path, body, query).await?;
        serde_json::from_value(response.body).map_err(|source| RestError::Deserialize {
            path: path.to_string(),
            source,
        })
    }
}

impl BillbeeRestClient for RestClient {
    async fn get<T>(&self, path: &str, query: Option<&QueryParams>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        self.send_and_decode(HttpMethod::Get, path, None, query)
            .await
    }

    async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        query: Option<&QueryParams>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let body = encode_body(body)?;
        self.send_and_decode(HttpMethod::Post, path, Some(body), query)
            .await
    }

    async fn put<T, B>(
        &self,
        path: &str,
        body: &B,
        query: Option<&QueryParams>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let body = encode_body(body)?;
        self.send_and_decode(HttpMethod::Put, path, Some(body), query)
            .await
    }

    async fn patch<T, B>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
        body: &B,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let body = encode_body(body)?;
        self.send_and_decode(HttpMethod::Patch, path, Some(body), query)
            .await
    }

    async fn delete<T>(&self, path: &str, query: Option<&QueryParams>) -> Result<T, RestError>
    where
        T: DeserializeOwned,
    {
        self.send_and_decode(HttpMethod::Delete, path, None, query)
            .await
    }
}

fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, RestError> {
    serde_json::to_value(body).map_err(RestError::Serialize)
}

/// Normalizes a REST API path.
///
/// Leading `/` characters are stripped so the path can be appended to the
/// base URL. Empty paths are rejected.
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/customers/4711")?, "customers/4711");
/// assert_eq!(normalize_path("customers")?, "customers");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    Ok(path.to_string())
}
