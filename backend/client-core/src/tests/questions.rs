// Unit tests for question construction and payload shape.

use crate::error::api::ApiError;
use crate::questions::{QuestionRequest, QuestionResponse};

#[test]
fn given_whitespace_only_question_when_constructed_then_rejected_locally() {
    // GIVEN: Questions that are empty after trimming
    for question in ["", "   ", "\n\t  "] {
        // WHEN: Constructing the request
        let result = QuestionRequest::new(42, question);

        // THEN: Rejected with a validation error, before any network call
        assert!(
            matches!(result, Err(ApiError::Validation { .. })),
            "{question:?} should be rejected"
        );
    }
}

#[test]
fn given_padded_question_when_constructed_then_trimmed() {
    // GIVEN: A question with surrounding whitespace
    let request = QuestionRequest::new(42, "  What is the conclusion?  ")
        .expect("non-empty question should be accepted");

    // THEN: The stored text is trimmed; the id is carried unchanged
    assert_eq!(request.question, "What is the conclusion?");
    assert_eq!(request.document_id, 42);
}

#[test]
fn given_request_when_serialized_then_uses_backend_field_names() {
    // GIVEN: A valid request
    let request = QuestionRequest::new(7, "Why?").expect("valid question");

    // WHEN: Serializing for the wire
    let json = serde_json::to_value(&request).expect("serialize");

    // THEN: Field names match the backend's schema exactly
    assert_eq!(
        json,
        serde_json::json!({"document_id": 7, "question": "Why?"})
    );
}

#[test]
fn given_backend_answer_when_deserialized_then_structure_preserved() {
    // GIVEN: A backend response body
    let body = r#"{"answer":"The conclusion is X.","document_id":42,"question":"What is the conclusion?"}"#;

    // WHEN: Deserializing
    let response: QuestionResponse = serde_json::from_str(body).expect("deserialize");

    // THEN: Every field arrives unmodified
    assert_eq!(
        response,
        QuestionResponse {
            answer: "The conclusion is X.".into(),
            document_id: 42,
            question: "What is the conclusion?".into(),
        }
    );
}
