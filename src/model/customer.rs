//! Customer records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime;
use super::CustomerAddress;

/// Whether a customer is a consumer or a business.
///
/// Serialized as Billbee's numeric code; unknown codes are preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "i32", into = "i32")]
pub enum CustomerType {
    /// End consumer (code 0).
    #[default]
    Consumer,
    /// Business customer (code 1).
    Business,
    /// A code this crate does not know about.
    Other(i32),
}

impl From<i32> for CustomerType {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Consumer,
            1 => Self::Business,
            other => Self::Other(other),
        }
    }
}

impl From<CustomerType> for i32 {
    fn from(value: CustomerType) -> Self {
        match value {
            CustomerType::Consumer => 0,
            CustomerType::Business => 1,
            CustomerType::Other(code) => code,
        }
    }
}

/// A typed contact entry (mail address, phone, fax, ...) attached to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerMetaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// A Billbee customer.
///
/// `id` is `None` until the customer has been created remotely. Updates
/// require it to be set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel2: Option<String>,
    /// The customer number shown in the Billbee UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<CustomerType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Vec<CustomerMetaData>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mail_address: Option<CustomerMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_commercial_mail_address: Option<CustomerMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_status_updates_mail_address: Option<CustomerMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_phone: Option<CustomerMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_phone2: Option<CustomerMetaData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_fax: Option<CustomerMetaData>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "datetime::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub restored_at: Option<DateTime<Utc>>,
}

/// Payload for creating a customer, optionally together with its first address.
///
/// The customer fields are serialized at the top level next to `Address`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerForCreation {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<CustomerAddress>,
}

impl From<Customer> for CustomerForCreation {
    fn from(customer: Customer) -> Self {
        Self {
            customer,
            address: None,
        }
    }
}
