//! Data model of the Billbee API.
//!
//! Entities are plain serde records using Billbee's PascalCase field names
//! on the wire. Optional fields that are unset are omitted when serializing
//! and unknown fields are ignored when deserializing.
//!
//! - [`Customer`], [`CustomerForCreation`], [`CustomerMetaData`]
//! - [`CustomerAddress`]
//! - [`Order`], [`OrderItem`], [`SoldProduct`]
//! - [`ApiResult`] and [`ApiPagedResult`]: the response envelopes

mod customer;
mod customer_address;
mod datetime;
mod envelope;
mod order;

pub use customer::{Customer, CustomerForCreation, CustomerMetaData, CustomerType};
pub use customer_address::{AddressType, CustomerAddress};
pub use envelope::{ApiPagedResult, ApiResult, PagingInformation, NO_ERROR};
pub use order::{Order, OrderItem, OrderState, SoldProduct};
