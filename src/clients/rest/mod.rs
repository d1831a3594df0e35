//! REST API client for the Billbee API.
//!
//! This module provides the typed REST layer built on top of the
//! [`HttpClient`](crate::clients::HttpClient).
//!
//! # Overview
//!
//! - [`BillbeeRestClient`]: The transport abstraction consumed by endpoint façades
//! - [`RestClient`]: The production implementation over HTTPS
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use billbee_api::clients::rest::{BillbeeRestClient, RestClient};
//! use billbee_api::clients::QueryParams;
//! use billbee_api::model::{ApiPagedResult, Customer};
//!
//! let client = RestClient::new(&config);
//!
//! let customers: ApiPagedResult<Vec<Customer>> = client
//!     .get("/customers", Some(&QueryParams::paging(1, 50)))
//!     .await?;
//! ```
//!
//! # Path Normalization
//!
//! Leading slashes are stripped (`/customers` -> `customers`) and the path is
//! appended to the configured base URL. Empty paths are rejected with
//! [`RestError::InvalidPath`].

mod client;
mod errors;
mod traits;

pub use client::RestClient;
pub use errors::RestError;
pub use traits::BillbeeRestClient;
