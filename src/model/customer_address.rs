//! Customer address records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::datetime;

/// The role of a customer address.
///
/// Serialized as Billbee's numeric code; unknown codes are preserved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i32", into = "i32")]
pub enum AddressType {
    /// Billing address (code 1).
    Invoice,
    /// Shipping address (code 2).
    Delivery,
    /// A code this crate does not know about.
    Other(i32),
}

impl From<i32> for AddressType {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Invoice,
            2 => Self::Delivery,
            other => Self::Other(other),
        }
    }
}

impl From<AddressType> for i32 {
    fn from(value: AddressType) -> Self {
        match value {
            AddressType::Invoice => 1,
            AddressType::Delivery => 2,
            AddressType::Other(code) => code,
        }
    }
}

/// An address stored on a customer.
///
/// `id` is `None` until the address has been created; `customer_id` links it
/// to its [`Customer`](super::Customer).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tel2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_addition: Option<String>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_customer_address_deserialization() {
        let address: CustomerAddress = serde_json::from_value(json!({
            "Id": 4712,
            "AddressType": 2,
            "CustomerId": 4711,
            "FirstName": "Jane",
            "LastName": "Doe",
            "Street": "Hauptstr.",
            "Housenumber": "12a",
            "Zip": "10115",
            "City": "Berlin",
            "CountryCode": "DE",
            "ArchivedAt": "2024-02-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(address.id, Some(4712));
        assert_eq!(address.customer_id, Some(4711));
        assert_eq!(address.address_type, Some(AddressType::Delivery));
        assert_eq!(address.housenumber.as_deref(), Some("12a"));
        assert!(address.archived_at.is_some());
    }

    #[test]
    fn test_customer_address_serialization_skips_unset_fields() {
        let address = CustomerAddress {
            customer_id: Some(4711),
            address_type: Some(AddressType::Invoice),
            first_name: Some("Foo".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&address).unwrap();

        assert_eq!(
            value,
            json!({"AddressType": 1, "CustomerId": 4711, "FirstName": "Foo"})
        );
    }

    #[test]
    fn test_address_type_preserves_unknown_codes() {
        let parsed: AddressType = serde_json::from_value(json!(9)).unwrap();
        assert_eq!(parsed, AddressType::Other(9));
        assert_eq!(i32::from(parsed), 9);
    }
}
