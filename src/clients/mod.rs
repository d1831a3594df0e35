//! HTTP client types for Billbee API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Billbee API. It handles request/response processing
//! and header-based authentication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`QueryParams`]: Ordered query parameter multimap
//! - [`rest::BillbeeRestClient`]: Typed REST abstraction used by endpoint façades
//! - [`rest::RestClient`]: Production implementation of that abstraction
//!
//! # Authentication
//!
//! Every request carries the `X-Billbee-Api-Key` header and an HTTP Basic
//! `Authorization` header built from the account username and API password.
//!
//! # Retry Behavior
//!
//! Requests are sent exactly once. A `429 Too Many Requests` surfaces as
//! [`HttpError::Response`] with code 429; backing off is left to the caller.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use query::QueryParams;

pub use rest::{BillbeeRestClient, RestClient, RestError};
