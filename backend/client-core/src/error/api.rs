//! Classified API failures.
//!
//! Every failure that crosses out of this crate is one of these variants.
//! Raw transport errors never escape: the classification rules in
//! [`ApiError::from_transport`] and [`ApiError::from_response`] map each
//! failed call outcome to exactly one variant, in priority order:
//!
//! 1. the call exceeded its assigned timeout → [`ApiError::Timeout`];
//! 2. no response was received at all → [`ApiError::NetworkUnavailable`];
//! 3. a response arrived with a non-2xx status → [`ApiError::Server`],
//!    carrying the status and the backend's `detail` string when present;
//! 4. anything else → [`ApiError::Unknown`].
//!
//! [`ApiError::Validation`] is produced locally by input checks before any
//! network call and never comes out of the classifier.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde::Deserialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Request Timeout: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Network Unavailable: {message} {location}")]
    NetworkUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error (HTTP {status}): {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected Error: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ServerDetail {
    detail: String,
}

impl ApiError {
    /// A local, pre-network validation failure.
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn unknown(message: impl Into<String>) -> Self {
        ApiError::Unknown {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a send failure, i.e. a call that produced no usable
    /// response.
    #[track_caller]
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if error.is_timeout() {
            ApiError::Timeout {
                message: format!("Call exceeded its assigned timeout: {error}"),
                location,
            }
        } else if error.is_connect() || error.is_request() {
            ApiError::NetworkUnavailable {
                message: format!("No response from backend: {error}"),
                location,
            }
        } else {
            ApiError::Unknown {
                message: error.to_string(),
                location,
            }
        }
    }

    /// Classify a response that arrived with a non-2xx status.
    ///
    /// Prefers the backend's human-readable `{"detail": ...}` string;
    /// falls back to a generic message when the body has another shape.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = HttpStatusCode::from(response.status().as_u16());
        let body = response.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ServerDetail>(&body)
            .map(|parsed| parsed.detail)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        ApiError::Server {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a failure to decode a successful response's body.
    #[track_caller]
    pub(crate) fn from_decode(error: reqwest::Error) -> Self {
        ApiError::Unknown {
            message: format!("Failed to decode response body: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the retry policy may re-issue the failed call.
    ///
    /// A timeout is final: the backend is overloaded or the task is
    /// intrinsically slow, and re-issuing it only wastes the user's wait.
    /// Validation failures never reached the network.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ApiError::NetworkUnavailable { .. }
                | ApiError::Server { .. }
                | ApiError::Unknown { .. }
        )
    }

    /// The HTTP status carried by server errors.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::Validation {
            message: format!("Invalid URL: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
