//! Endpoint façades over the Billbee REST API.
//!
//! A façade groups the operations of one resource family and maps each typed
//! method onto a verb, a path and a payload. Façades borrow any
//! [`BillbeeRestClient`](crate::clients::BillbeeRestClient), so tests can
//! substitute a recording mock for the production
//! [`RestClient`](crate::clients::RestClient).
//!
//! - [`CustomerEndPoint`]: customers, customer addresses and customer orders

mod customer;
mod errors;
mod path;

pub use customer::CustomerEndPoint;
pub use errors::EndPointError;
pub use path::{
    build_path, CUSTOMER, CUSTOMERS, CUSTOMER_ADDRESS, CUSTOMER_ADDRESSES, CUSTOMER_ORDERS,
};
