//! Order records, as listed under a customer.
//!
//! Billbee orders are large documents; only the commonly used fields are
//! modelled here. Unknown fields are ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime;
use super::Customer;

/// The processing state of an order.
///
/// Serialized as Billbee's numeric code; unknown codes are preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i32", into = "i32")]
pub enum OrderState {
    Ordered,
    Confirmed,
    PaymentReceived,
    Shipped,
    Complaint,
    Deleted,
    Closed,
    Cancelled,
    Archived,
    Other(i32),
}

impl From<i32> for OrderState {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Ordered,
            2 => Self::Confirmed,
            3 => Self::PaymentReceived,
            4 => Self::Shipped,
            5 => Self::Complaint,
            6 => Self::Deleted,
            7 => Self::Closed,
            8 => Self::Cancelled,
            9 => Self::Archived,
            other => Self::Other(other),
        }
    }
}

impl From<OrderState> for i32 {
    fn from(value: OrderState) -> Self {
        match value {
            OrderState::Ordered => 1,
            OrderState::Confirmed => 2,
            OrderState::PaymentReceived => 3,
            OrderState::Shipped => 4,
            OrderState::Complaint => 5,
            OrderState::Deleted => 6,
            OrderState::Closed => 7,
            OrderState::Cancelled => 8,
            OrderState::Archived => 9,
            OrderState::Other(code) => code,
        }
    }
}

/// The product snapshot stored on an order line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct SoldProduct {
    /// Id of the product in the originating shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billbee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "SKU", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "EAN", skip_serializing_if = "Option::is_none")]
    pub ean: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A single order line.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billbee_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<SoldProduct>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

/// A Billbee order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    /// Billbee's internal order id.
    #[serde(rename = "BillBeeOrderId", skip_serializing_if = "Option::is_none")]
    pub billbee_order_id: Option<u64>,
    /// Id of the order in the originating shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<OrderState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_items: Option<Vec<OrderItem>>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmed_at: Option<DateTime<Utc>>,
    /// Payment date; the field name is spelled `PayedAt` on the wire.
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payed_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub invoice_date: Option<DateTime<Utc>>,
}
