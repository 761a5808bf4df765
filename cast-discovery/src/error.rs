//! Error types for the discovery layer.

use std::fmt;

/// Error type for discovery operations.
///
/// Discovery itself is performed by the external cast SDK, so these errors
/// describe failures at the seam: the scanner refusing to start, or a device
/// record that cannot be tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The underlying scanner could not be started
    ScannerUnavailable(String),
    /// Filter criteria were rejected (e.g. empty application id)
    InvalidCriteria(String),
    /// A device record was missing its identifier
    InvalidDevice(String),
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscoveryError::ScannerUnavailable(msg) => write!(f, "Scanner unavailable: {}", msg),
            DiscoveryError::InvalidCriteria(msg) => write!(f, "Invalid filter criteria: {}", msg),
            DiscoveryError::InvalidDevice(msg) => write!(f, "Invalid device: {}", msg),
        }
    }
}

impl std::error::Error for DiscoveryError {}

/// Convenience Result type alias for discovery operations.
///
/// Equivalent to `std::result::Result<T, DiscoveryError>`.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
