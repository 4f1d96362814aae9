pub mod api;
pub mod config;
pub mod connectivity;

pub use api::ApiError;
pub use config::ConfigError;
pub use connectivity::ConnectivityError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] api::ApiError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Connectivity(#[from] connectivity::ConnectivityError),
}
