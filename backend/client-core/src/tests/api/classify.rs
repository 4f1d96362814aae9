// Unit tests for classified-error helpers. The classification of live
// transport failures is exercised end-to-end in integration_tests/.

use crate::error::api::ApiError;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_each_error_kind_when_retryability_checked_then_matches_taxonomy() {
    // GIVEN: One error of each kind
    let timeout = ApiError::Timeout {
        message: "elapsed".into(),
        location: here(),
    };
    let network = ApiError::NetworkUnavailable {
        message: "refused".into(),
        location: here(),
    };
    let server = ApiError::Server {
        status: HttpStatusCode::from(500),
        message: "boom".into(),
        location: here(),
    };
    let validation = ApiError::validation("bad input");
    let unknown = ApiError::Unknown {
        message: "?".into(),
        location: here(),
    };

    // THEN: Only network, server, and unknown failures are retryable
    assert!(!timeout.is_retryable());
    assert!(network.is_retryable());
    assert!(server.is_retryable());
    assert!(!validation.is_retryable());
    assert!(unknown.is_retryable());
}

#[test]
fn given_server_error_when_status_queried_then_carries_code() {
    // GIVEN: A classified server error
    let error = ApiError::Server {
        status: HttpStatusCode::from(404),
        message: "Document not found".into(),
        location: here(),
    };

    // THEN: The status code is carried through, and only here
    assert_eq!(error.status(), Some(HttpStatusCode(404)));
    assert!(error.status().is_some_and(|s| s.is_not_found()));
}

#[test]
fn given_non_server_errors_when_status_queried_then_none() {
    let timeout = ApiError::Timeout {
        message: "elapsed".into(),
        location: here(),
    };
    let validation = ApiError::validation("empty question");

    assert_eq!(timeout.status(), None);
    assert_eq!(validation.status(), None);
}

#[test]
fn given_validation_error_when_displayed_then_includes_message_and_location() {
    // GIVEN: A validation error raised here
    let error = ApiError::validation("Question must not be empty");

    // WHEN: Rendering it
    let rendered = format!("{error}");

    // THEN: Message and capture site are both present
    assert!(rendered.contains("Question must not be empty"));
    assert!(rendered.contains("classify.rs"));
}
