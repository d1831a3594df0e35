//! The REST transport abstraction consumed by endpoint façades.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::rest::RestError;
use crate::clients::QueryParams;

/// A typed REST client for the Billbee API.
///
/// Endpoint façades such as [`CustomerEndPoint`](crate::endpoint::CustomerEndPoint)
/// talk to the API exclusively through this trait, which allows:
/// - the production [`RestClient`](super::RestClient) over HTTPS
/// - recording mocks in tests
/// - decorators (rate limiting, logging, ...)
///
/// Paths are relative to the configured base URL (`/customers/4711`).
/// Each method performs one call and deserializes the response body into `T`.
/// Transport and HTTP errors are returned as [`RestError`] unchanged.
#[allow(async_fn_in_trait)]
pub trait BillbeeRestClient: Send + Sync {
    /// Sends a GET request.
    async fn get<T>(&self, path: &str, query: Option<&QueryParams>) -> Result<T, RestError>
    where
        T: DeserializeOwned;

    /// Sends a POST request with a JSON body.
    async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        query: Option<&QueryParams>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync;

    /// Sends a PUT request with a JSON body.
    async fn put<T, B>(
        &self,
        path: &str,
        body: &B,
        query: Option<&QueryParams>,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync;

    /// Sends a PATCH request with a JSON body.
    ///
    /// Billbee's PATCH endpoints take a map of field names to new values.
    async fn patch<T, B>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
        body: &B,
    ) -> Result<T, RestError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync;

    /// Sends a DELETE request.
    async fn delete<T>(&self, path: &str, query: Option<&QueryParams>) -> Result<T, RestError>
    where
        T: DeserializeOwned;
}
