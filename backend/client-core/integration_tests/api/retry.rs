// Retry behavior observed from outside, against a mock backend and an
// unreachable port.

use client_core::api::ApiClient;
use client_core::error::api::ApiError;

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Counts attempts for a persistently failing server.
///
/// **WHY THIS MATTERS**: The mock's expectation is the ground truth for
/// the attempt budget: exactly 3 requests, no more, no fewer.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one in the attempt
/// counter, or retries silently disabled for server errors.
#[tokio::test]
async fn given_persistent_500_when_listing_then_exactly_three_attempts_made() {
    // GIVEN: A backend that always fails
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .expect(3)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Listing
    let started = Instant::now();
    let error = client.list_documents().await.expect_err("must fail");

    // THEN: A server error surfaces after 3 attempts with 1 s pauses
    assert!(matches!(error, ApiError::Server { .. }));
    assert!(
        started.elapsed() >= Duration::from_secs(2),
        "two 1-second delays must have elapsed, got {:?}",
        started.elapsed()
    );

    server.verify().await;
}

/// **VALUE**: Proves a transient failure heals within the budget.
///
/// **BUG THIS CATCHES**: Would catch the executor returning the first
/// failure without consuming the retry budget, or re-classifying the
/// healed response as an error.
#[tokio::test]
async fn given_transient_500_when_listing_then_second_attempt_succeeds() {
    // GIVEN: A backend that fails once, then recovers
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "warming up"})))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/documents/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Listing
    let documents = client.list_documents().await.expect("second attempt");

    // THEN: The recovered response is the caller's result
    assert!(documents.is_empty());

    server.verify().await;
}

#[tokio::test]
async fn given_unreachable_backend_when_listing_then_network_unavailable_after_retries() {
    // GIVEN: A port with no listener
    let client = ApiClient::new("http://127.0.0.1:65534").expect("client");

    // WHEN: Listing
    let started = Instant::now();
    let error = client.list_documents().await.expect_err("must fail");

    // THEN: Classified as network-unavailable, after the full retry budget
    assert!(
        matches!(error, ApiError::NetworkUnavailable { .. }),
        "got {error:?}"
    );
    assert!(
        started.elapsed() >= Duration::from_secs(2),
        "two 1-second delays must have elapsed, got {:?}",
        started.elapsed()
    );
}
