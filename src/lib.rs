//! # Billbee API Rust Client
//!
//! A typed async client for the Billbee e-commerce REST API, covering
//! customers, customer addresses and customer orders.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BillbeeConfig`] and [`BillbeeConfigBuilder`]
//! - Validated newtypes for API credentials and the base URL
//! - An async HTTP client that attaches the API key and Basic auth headers
//! - The [`BillbeeRestClient`] abstraction and its production [`RestClient`]
//! - The customer data model and the Billbee response envelopes
//! - The [`CustomerEndPoint`] façade
//!
//! ## Quick Start
//!
//! ```rust
//! use billbee_api::{ApiKey, ApiPassword, BillbeeConfig, Username};
//!
//! let config = BillbeeConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .username(Username::new("you@example.com").unwrap())
//!     .api_password(ApiPassword::new("your-api-password").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://app.billbee.io/api/v1");
//! ```
//!
//! ## Calling the API
//!
//! ```rust,ignore
//! use billbee_api::{CustomerEndPoint, RestClient};
//!
//! let client = RestClient::new(&config);
//! let customers = CustomerEndPoint::new(&client);
//!
//! let customer = customers.get_customer(4711).await?;
//! if customer.is_success() {
//!     println!("{:?}", customer.data);
//! }
//! ```
//!
//! ## Errors
//!
//! Each layer has its own `thiserror` enum wrapping the layer below:
//! [`ConfigError`], [`HttpError`], [`RestError`] and [`EndPointError`].
//! Envelope-level errors (`ErrorCode != 0`) are returned inside the
//! envelope and left to the caller.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` per request, `warn` on error
//! statuses) and never installs a subscriber.

pub mod clients;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod model;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, ApiPassword, BaseUrl, BillbeeConfig, BillbeeConfigBuilder, Username};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    BillbeeRestClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, QueryParams, RestClient, RestError,
};

pub use endpoint::{CustomerEndPoint, EndPointError};
