use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectivityError {
    /// The monitor task is gone; its command channel is closed.
    #[error("Connectivity Monitor Error: {message} {location}")]
    MonitorUnavailable {
        message: String,
        location: ErrorLocation,
    },
}
