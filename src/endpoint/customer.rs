//! The customer endpoint façade.

use std::collections::HashMap;

use crate::clients::{BillbeeRestClient, QueryParams};
use crate::endpoint::path::{
    with_id, CUSTOMER, CUSTOMERS, CUSTOMER_ADDRESS, CUSTOMER_ADDRESSES, CUSTOMER_ORDERS,
};
use crate::endpoint::EndPointError;
use crate::model::{
    ApiPagedResult, ApiResult, Customer, CustomerAddress, CustomerForCreation, Order,
};

/// Operations on customers, their addresses and their orders.
///
/// Every method performs exactly one call through the borrowed
/// [`BillbeeRestClient`] and returns the decoded envelope as received.
/// Missing identifiers are rejected locally before anything is sent.
///
/// # Example
///
/// ```rust,ignore
/// use billbee_api::clients::RestClient;
/// use billbee_api::endpoint::CustomerEndPoint;
///
/// let client = RestClient::new(&config);
/// let customers = CustomerEndPoint::new(&client);
///
/// let page = customers.get_customer_list(1, 50).await?;
/// for customer in page.data.unwrap_or_default() {
///     println!("{:?}", customer.name);
/// }
/// ```
#[derive(Debug)]
pub struct CustomerEndPoint<'a, C> {
    client: &'a C,
}

impl<C> Clone for CustomerEndPoint<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for CustomerEndPoint<'_, C> {}

// Verify CustomerEndPoint is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CustomerEndPoint<'static, crate::clients::RestClient>>();
};

impl<'a, C: BillbeeRestClient> CustomerEndPoint<'a, C> {
    /// Creates a façade over the given REST client.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Returns a page of customers.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn get_customer_list(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<ApiPagedResult<Vec<Customer>>, EndPointError> {
        tracing::debug!(page, page_size, "Listing customers");
        let query = QueryParams::paging(page, page_size);
        Ok(self.client.get(CUSTOMERS, Some(&query)).await?)
    }

    /// Creates a customer, optionally together with its first address.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn add_customer(
        &self,
        customer: &CustomerForCreation,
    ) -> Result<ApiResult<Customer>, EndPointError> {
        tracing::debug!("Creating customer");
        Ok(self.client.post(CUSTOMERS, customer, None).await?)
    }

    /// Fetches a single customer.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn get_customer(&self, id: u64) -> Result<ApiResult<Customer>, EndPointError> {
        tracing::debug!(id, "Fetching customer");
        let path = with_id(CUSTOMER, "id", id);
        Ok(self.client.get(&path, None).await?)
    }

    /// Replaces a customer with the given entity.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::InvalidValue`] if `customer.id` is unset,
    /// without sending a request.
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn update_customer(
        &self,
        customer: &Customer,
    ) -> Result<ApiResult<Customer>, EndPointError> {
        let id = customer
            .id
            .ok_or_else(|| EndPointError::missing_id("customer.id", "update a customer"))?;
        tracing::debug!(id, "Updating customer");
        let path = with_id(CUSTOMER, "id", id);
        Ok(self.client.put(&path, customer, None).await?)
    }

    /// Returns a page of the orders placed by a customer.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn get_orders_for_customer(
        &self,
        customer_id: u64,
        page: u32,
        page_size: u32,
    ) -> Result<ApiPagedResult<Vec<Order>>, EndPointError> {
        tracing::debug!(customer_id, page, page_size, "Listing customer orders");
        let path = with_id(CUSTOMER_ORDERS, "customer_id", customer_id);
        let query = QueryParams::paging(page, page_size);
        Ok(self.client.get(&path, Some(&query)).await?)
    }

    /// Returns a page of the addresses stored on a customer.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn get_addresses_for_customer(
        &self,
        customer_id: u64,
        page: u32,
        page_size: u32,
    ) -> Result<ApiPagedResult<Vec<CustomerAddress>>, EndPointError> {
        tracing::debug!(customer_id, page, page_size, "Listing customer addresses");
        let path = with_id(CUSTOMER_ADDRESSES, "customer_id", customer_id);
        let query = QueryParams::paging(page, page_size);
        Ok(self.client.get(&path, Some(&query)).await?)
    }

    /// Adds an address to the customer referenced by `address.customer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::InvalidValue`] if `address.customer_id` is
    /// unset, without sending a request.
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn add_address_to_customer(
        &self,
        address: &CustomerAddress,
    ) -> Result<ApiResult<CustomerAddress>, EndPointError> {
        let customer_id = address.customer_id.ok_or_else(|| {
            EndPointError::missing_id("address.customer_id", "add an address to a customer")
        })?;
        tracing::debug!(customer_id, "Adding customer address");
        let path = with_id(CUSTOMER_ADDRESSES, "customer_id", customer_id);
        Ok(self.client.post(&path, address, None).await?)
    }

    /// Fetches a single address.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn get_customer_address(
        &self,
        address_id: u64,
    ) -> Result<ApiResult<CustomerAddress>, EndPointError> {
        tracing::debug!(address_id, "Fetching customer address");
        let path = with_id(CUSTOMER_ADDRESS, "address_id", address_id);
        Ok(self.client.get(&path, None).await?)
    }

    /// Replaces an address with the given entity.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::InvalidValue`] if `address.id` is unset,
    /// without sending a request.
    /// Returns [`EndPointError::Rest`] if the request fails.
    pub async fn update_customer_address(
        &self,
        address: &CustomerAddress,
    ) -> Result<ApiResult<CustomerAddress>, EndPointError> {
        let address_id = address
            .id
            .ok_or_else(|| EndPointError::missing_id("address.id", "update an address"))?;
        tracing::debug!(address_id, "Updating customer address");
        let path = with_id(CUSTOMER_ADDRESS, "address_id", address_id);
        Ok(self.client.put(&path, address, None).await?)
    }

    /// Changes selected fields of an address.
    ///
    /// `fields` maps wire field names (`"City"`, `"Zip"`, ...) to their new
    /// values and is sent as the request body.
    ///
    /// # Errors
    ///
    /// Returns [`EndPointError::Rest`] if the request fails.
    #[allow(clippy::implicit_hasher)]
    pub async fn patch_customer_address(
        &self,
        address_id: u64,
        fields: &HashMap<String, serde_json::Value>,
    ) -> Result<ApiResult<CustomerAddress>, EndPointError> {
        tracing::debug!(address_id, fields = fields.len(), "Patching customer address");
        let path = with_id(CUSTOMER_ADDRESS, "address_id", address_id);
        Ok(self.client.patch(&path, None, fields).await?)
    }
}
