//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the happy paths (empty, full batch,
//! store-scoped), every total-failure class the fetcher can hit, the
//! empty-absorbing page path, and the retry choreography.

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use momollie_catalog::{CatalogClient, CatalogConfig, CatalogError};

/// Builds a `CatalogClient` suitable for tests: 5-second timeout,
/// descriptive UA, no retries.
fn test_client() -> CatalogClient {
    CatalogClient::new(5, "momollie-test/0.1", 0, 0, CatalogConfig::default())
        .expect("failed to build test CatalogClient")
}

/// Builds a `CatalogClient` with retries enabled for retry-specific tests.
fn test_client_with_retries(max_retries: u32) -> CatalogClient {
    CatalogClient::new(5, "momollie-test/0.1", max_retries, 0, CatalogConfig::default())
        .expect("failed to build test CatalogClient")
}

/// A valid envelope carrying one well-formed listing with the given id.
fn one_listing_envelope(id: i64) -> serde_json::Value {
    json!({
        "success": true,
        "listings": [{
            "listing_id": id,
            "title": "Large Bread Bag",
            "price": { "amount": 2499, "divisor": 100 },
            "quantity": 5,
            "state": "active",
            "materials": ["Organic cotton"],
            "tags": ["reusable"]
        }],
        "lastSync": "2024-11-02T08:00:00Z"
    })
}

// ---------------------------------------------------------------------------
// happy paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_catalog_returns_empty_products_for_empty_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"success": true, "listings": []})),
        )
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await
        .expect("expected Ok for empty listings");

    assert!(catalog.products.is_empty());
    assert!(catalog.last_sync.is_none());
}

#[tokio::test]
async fn fetch_catalog_normalizes_listings_and_passes_last_sync_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_listing_envelope(123)))
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await
        .expect("expected Ok");

    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.products[0].id, 123);
    assert_eq!(catalog.products[0].name, "Large Bread Bag");
    assert!((catalog.products[0].price - 24.99).abs() < f64::EPSILON);
    assert!(catalog.products[0].in_stock);
    assert_eq!(catalog.last_sync.as_deref(), Some("2024-11-02T08:00:00Z"));
}

#[tokio::test]
async fn fetch_catalog_drops_malformed_listings_but_keeps_siblings() {
    let server = MockServer::start().await;

    let envelope = json!({
        "success": true,
        "listings": [
            { "listing_id": 1, "title": "First" },
            { "title": "Missing id" },
            { "listing_id": 3, "title": "Third" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await
        .expect("expected Ok");

    assert_eq!(
        catalog.products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 3],
        "one malformed listing shrinks the batch by exactly one"
    );
}

#[tokio::test]
async fn fetch_catalog_forwards_shop_id_as_query_parameter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(query_param("shop_id", "dearmomollie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_listing_envelope(7)))
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), Some("dearmomollie"))
        .await
        .expect("expected Ok with shop scoping");

    assert_eq!(catalog.products.len(), 1);
}

#[tokio::test]
async fn fetch_catalog_omits_shop_id_when_unscoped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .and(query_param_is_missing("shop_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_listing_envelope(7)))
        .mount(&server)
        .await;

    let client = test_client();
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

// ---------------------------------------------------------------------------
// total-failure classes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_catalog_propagates_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    match result.unwrap_err() {
        CatalogError::UnexpectedStatus { status, .. } => assert_eq!(status, 503),
        other => panic!("expected CatalogError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_catalog_propagates_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let client = test_client();
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(
        matches!(result.unwrap_err(), CatalogError::Deserialize { .. }),
        "expected CatalogError::Deserialize"
    );
}

#[tokio::test]
async fn fetch_catalog_rejects_false_success_flag() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"success": false, "listings": []})),
        )
        .mount(&server)
        .await;

    let client = test_client();
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(
        matches!(result.unwrap_err(), CatalogError::Envelope { .. }),
        "a false success flag is a total failure even with listings present"
    );
}

#[tokio::test]
async fn fetch_catalog_rejects_missing_listings_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"success": true})))
        .mount(&server)
        .await;

    let client = test_client();
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(
        matches!(result.unwrap_err(), CatalogError::Envelope { .. }),
        "expected CatalogError::Envelope for missing listings"
    );
}

// ---------------------------------------------------------------------------
// empty-absorbing page path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_catalog_or_empty_absorbs_upstream_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog_or_empty(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(catalog.products.is_empty());
    assert!(catalog.last_sync.is_none());
}

#[tokio::test]
async fn fetch_catalog_or_empty_passes_successful_catalog_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_listing_envelope(11)))
        .mount(&server)
        .await;

    let client = test_client();
    let catalog = client
        .fetch_catalog_or_empty(&format!("{}/catalog", server.uri()), None)
        .await;

    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.products[0].id, 11);
}

// ---------------------------------------------------------------------------
// retry choreography
// ---------------------------------------------------------------------------

/// A 503 served once, then a 200: a client with one retry should succeed.
/// Backoff base is zero so the test does not sleep.
#[tokio::test]
async fn fetch_catalog_retries_transient_failure_and_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_listing_envelope(42)))
        .mount(&server)
        .await;

    let client = test_client_with_retries(1);
    let catalog = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await
        .expect("expected Ok after one retry");

    assert_eq!(catalog.products.len(), 1);
    assert_eq!(catalog.products[0].id, 42);
}

/// A server that always fails exhausts the retry budget and surfaces the
/// final error. The `expect(2)` assertion proves exactly one retry happened.
#[tokio::test]
async fn fetch_catalog_surfaces_error_after_exhausting_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client_with_retries(1);
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(
        matches!(
            result.unwrap_err(),
            CatalogError::UnexpectedStatus { status: 500, .. }
        ),
        "expected the final UnexpectedStatus after retries"
    );
}

/// Client errors are not transient: a 404 must not consume the retry budget.
#[tokio::test]
async fn fetch_catalog_does_not_retry_client_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retries(3);
    let result = client
        .fetch_catalog(&format!("{}/catalog", server.uri()), None)
        .await;

    assert!(matches!(
        result.unwrap_err(),
        CatalogError::UnexpectedStatus { status: 404, .. }
    ));
}
