//! Integration tests for the REST client against a mock Billbee server.
//!
//! These tests verify authentication headers, query encoding, request
//! bodies, error surfacing and envelope decoding over real HTTP.

use std::collections::HashMap;

use billbee_api::clients::{BillbeeRestClient, HttpError, RestClient, RestError};
use billbee_api::endpoint::{CustomerEndPoint, EndPointError};
use billbee_api::model::{ApiPagedResult, ApiResult, Customer, CustomerAddress};
use billbee_api::{ApiKey, ApiPassword, BaseUrl, BillbeeConfig, Username};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a config pointing at the mock server.
fn create_test_config(server: &MockServer) -> BillbeeConfig {
    BillbeeConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .username(Username::new("user").unwrap())
        .api_password(ApiPassword::new("pass").unwrap())
        .base_url(BaseUrl::new(format!("{}/api/v1", server.uri())).unwrap())
        .build()
        .unwrap()
}

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_requests_carry_api_key_and_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/4711"))
        .and(header("X-Billbee-Api-Key", "test-api-key"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 0,
            "Data": {"Id": 4711, "Name": "Jane Doe"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));

    let result: ApiResult<Customer> = client.get("/customers/4711", None).await.unwrap();

    assert!(result.is_success());
    assert_eq!(result.data.unwrap().name.as_deref(), Some("Jane Doe"));
}

#[tokio::test]
async fn test_paging_query_is_sent_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/4711/addresses"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Paging": {"Page": 2, "TotalPages": 2, "TotalRows": 26, "PageSize": 25},
            "ErrorCode": 0,
            "Data": [{"Id": 7, "CustomerId": 4711}]
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let result: ApiPagedResult<Vec<CustomerAddress>> = endpoint
        .get_addresses_for_customer(4711, 2, 25)
        .await
        .unwrap();

    assert!(!result.has_next_page());
    assert_eq!(result.data.unwrap()[0].id, Some(7));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("page=2&pageSize=25"));
}

#[tokio::test]
async fn test_update_customer_puts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/customers/4711"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"Id": 4711, "Name": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 0,
            "Data": {"Id": 4711, "Name": "Renamed"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let customer = Customer {
        id: Some(4711),
        name: Some("Renamed".into()),
        ..Default::default()
    };
    let result = endpoint.update_customer(&customer).await.unwrap();

    assert_eq!(result.data.unwrap().id, Some(4711));
}

#[tokio::test]
async fn test_patch_customer_address_sends_field_map() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/customers/addresses/21"))
        .and(body_json(json!({"City": "Leipzig"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": 0,
            "Data": {"Id": 21, "City": "Leipzig"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let fields = HashMap::from([("City".to_string(), json!("Leipzig"))]);
    let result = endpoint.patch_customer_address(21, &fields).await.unwrap();

    assert_eq!(result.data.unwrap().city.as_deref(), Some("Leipzig"));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_error_status_surfaces_as_http_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/1"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("X-Request-Id", "req-123")
                .set_body_json(json!({"ErrorMessage": "Customer not found", "ErrorCode": 2})),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let result = endpoint.get_customer(1).await;

    match result {
        Err(EndPointError::Rest(RestError::Http(HttpError::Response(e)))) => {
            assert_eq!(e.code, 404);
            assert!(e.message.contains("Customer not found"));
            assert!(e.message.contains("req-123"));
            assert_eq!(e.error_reference.as_deref(), Some("req-123"));
        }
        other => panic!("expected an HTTP response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let error = endpoint.get_customer_list(1, 50).await.unwrap_err();

    match error {
        EndPointError::Rest(RestError::Http(e)) => assert_eq!(e.status(), Some(429)),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ErrorCode": "not a number",
            "Data": {"Id": 5}
        })))
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));

    let result: Result<ApiResult<Customer>, RestError> = client.get("customers/5", None).await;

    match result {
        Err(RestError::Deserialize { path, .. }) => assert_eq!(path, "customers/5"),
        other => panic!("expected a deserialize error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_a_deserialize_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/4711"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html")
                .set_body_string("<html>maintenance</html>"),
        )
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));
    let endpoint = CustomerEndPoint::new(&client);

    let result = endpoint.get_customer(4711).await;

    assert!(
        matches!(
            result,
            Err(EndPointError::Rest(RestError::Deserialize { ref path, .. })) if path == "/customers/4711"
        ),
        "expected a deserialize error, got {result:?}"
    );
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_empty_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/customers/4711"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = RestClient::new(&create_test_config(&server));

    let result: ApiResult<Customer> = client.get("/customers/4711", None).await.unwrap();

    assert!(result.data.is_none());
}

#[tokio::test]
async fn test_empty_path_is_rejected_without_request() {
    let server = MockServer::start().await;
    let client = RestClient::new(&create_test_config(&server));

    let result: Result<ApiResult<Customer>, RestError> = client.get("/", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}
