// Public API tests for the question operation against a mock backend.

use client_core::api::ApiClient;
use client_core::error::api::ApiError;
use client_core::questions::QuestionResponse;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies the answer structure passes through unmodified.
///
/// **WHY THIS MATTERS**: The shell renders exactly what the backend
/// returns; any field remapping or lossy decode here would silently
/// corrupt answers.
///
/// **BUG THIS CATCHES**: Would catch the request body drifting from the
/// backend's `{document_id, question}` schema, or response fields being
/// renamed in transit.
#[tokio::test]
async fn given_answering_backend_when_question_asked_then_exact_structure_returned() {
    // GIVEN: A backend answering one specific question about document 42
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/questions/"))
        .and(body_json(json!({
            "document_id": 42,
            "question": "What is the conclusion?"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "The conclusion is X.",
            "document_id": 42,
            "question": "What is the conclusion?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Asking
    let response = client
        .ask_question(42, "What is the conclusion?")
        .await
        .expect("ask");

    // THEN: The caller receives the exact structure
    assert_eq!(
        response,
        QuestionResponse {
            answer: "The conclusion is X.".into(),
            document_id: 42,
            question: "What is the conclusion?".into(),
        }
    );

    server.verify().await;
}

#[tokio::test]
async fn given_padded_question_when_asked_then_trimmed_text_sent() {
    // GIVEN: A backend matching on the trimmed body only
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/questions/"))
        .and(body_json(json!({"document_id": 1, "question": "Why?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "Because.",
            "document_id": 1,
            "question": "Why?"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Asking with surrounding whitespace
    let response = client.ask_question(1, "  Why?  ").await.expect("ask");

    // THEN: The trimmed question travelled, and came back as sent
    assert_eq!(response.question, "Why?");

    server.verify().await;
}

#[tokio::test]
async fn given_whitespace_question_when_asked_then_no_network_call_observed() {
    // GIVEN: A backend that must receive nothing
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/questions/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Asking a whitespace-only question
    let error = client.ask_question(42, "   ").await.expect_err("must fail");

    // THEN: Rejected locally; the mock saw zero requests
    assert!(matches!(error, ApiError::Validation { .. }));
    server.verify().await;
}

/// **VALUE**: Verifies a failing inference backend surfaces its detail
/// string after the retry budget.
///
/// **BUG THIS CATCHES**: Would catch question failures being retried
/// forever, or surfacing as an unclassified decode error instead of a
/// server error.
#[tokio::test]
async fn given_failing_backend_when_question_asked_then_server_error_after_three_attempts() {
    // GIVEN: A backend whose inference pipeline keeps failing
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/questions/"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"detail": "Failed to answer question"})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).expect("client");

    // WHEN: Asking
    let error = client
        .ask_question(42, "What is the conclusion?")
        .await
        .expect_err("must fail");

    // THEN: The server's detail survives classification and retries
    match &error {
        ApiError::Server { status, message, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Failed to answer question");
        }
        other => panic!("expected Server error, got {other:?}"),
    }

    server.verify().await;
}
