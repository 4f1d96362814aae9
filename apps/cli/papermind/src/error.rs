use client_core::error::CoreError;
use client_core::error::api::ApiError;
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the CLI shell.
///
/// Core failures pass through transparently so the classified message
/// (kind, status, capture site) reaches the terminal unchanged; the shell
/// only adds its own variant for wiring problems.
#[derive(Debug, Error)]
pub enum PapermindError {
    /// Error from the shell itself (directories, logger, runtime wiring).
    #[error("PaperMind Error: {message} {location}")]
    App {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PapermindError {
    /// An actionable follow-up line for the user, when the error kind
    /// suggests one.
    pub fn hint(&self) -> Option<&'static str> {
        let api_error = match self {
            PapermindError::Api(error) => error,
            PapermindError::Core(CoreError::Api(error)) => error,
            _ => return None,
        };

        match api_error {
            ApiError::Timeout { .. } => Some(
                "The backend took too long to respond. Try again, or ask a simpler question.",
            ),
            ApiError::NetworkUnavailable { .. } => Some(
                "Cannot reach the backend. Check that the server is running and the base URL is correct (`papermind config`).",
            ),
            ApiError::Server { status, .. } if status.is_not_found() => Some(
                "The document was not found on the server. `papermind list` shows what is available.",
            ),
            _ => None,
        }
    }
}
