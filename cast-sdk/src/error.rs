use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Discovery error: {0}")]
    Discovery(#[from] cast_discovery::DiscoveryError),

    #[error("State error: {0}")]
    State(#[from] cast_state::StateError),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid position observer interval: {0:?}")]
    InvalidInterval(Duration),

    #[error("Failed to start position timer: {0}")]
    Timer(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;
