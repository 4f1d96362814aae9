//! Question payloads.

use crate::error::api::ApiError;

use serde::{Deserialize, Serialize};

/// A question about one document, as sent to the backend.
///
/// Constructed per submission and not persisted. Construction trims the
/// question and rejects an empty result, so a request that exists is
/// always sendable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRequest {
    pub document_id: i64,
    pub question: String,
}

impl QuestionRequest {
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when the question is empty or
    /// whitespace-only.
    pub fn new(document_id: i64, question: &str) -> Result<Self, ApiError> {
        let trimmed = question.trim();

        if trimmed.is_empty() {
            return Err(ApiError::validation("Question must not be empty"));
        }

        Ok(Self {
            document_id,
            question: trimmed.to_owned(),
        })
    }
}

/// The backend's answer, returned to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
    pub document_id: i64,
    pub question: String,
}
