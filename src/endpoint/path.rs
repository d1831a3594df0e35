//! Path templates of the customer resource family.
//!
//! Templates are relative to the configured base URL and use `{name}`
//! placeholders, filled in by [`build_path`].
//!
//! # Example
//!
//! ```rust
//! use billbee_api::endpoint::{build_path, CUSTOMER_ADDRESSES};
//! use std::collections::HashMap;
//!
//! let mut ids = HashMap::new();
//! ids.insert("customer_id", 4711_u64);
//! assert_eq!(build_path(CUSTOMER_ADDRESSES, &ids), "/customers/4711/addresses");
//! ```

use std::collections::HashMap;
use std::fmt::Display;

/// `GET` (paged list) and `POST` (create) customers.
pub const CUSTOMERS: &str = "/customers";

/// `GET` and `PUT` a single customer.
pub const CUSTOMER: &str = "/customers/{id}";

/// `GET` the orders of a customer.
pub const CUSTOMER_ORDERS: &str = "/customers/{customer_id}/orders";

/// `GET` the addresses of a customer, `POST` a new one.
pub const CUSTOMER_ADDRESSES: &str = "/customers/{customer_id}/addresses";

/// `GET`, `PUT` and `PATCH` a single address.
pub const CUSTOMER_ADDRESS: &str = "/customers/addresses/{address_id}";

/// Builds a path by interpolating IDs into a template.
///
/// Placeholders without a matching entry in `ids` are left untouched.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

/// Fills a template with a single ID.
pub(crate) fn with_id(template: &str, name: &str, id: u64) -> String {
    let ids = HashMap::from([(name, id)]);
    build_path(template, &ids)
}
