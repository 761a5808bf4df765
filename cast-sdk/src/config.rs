//! Configuration for a cast context
//!
//! Controls which receiver application is launched, how discovery behaves,
//! and defaults used by the position observer and media conversion.

use std::time::Duration;

use cast_discovery::FilterCriteria;
use cast_state::ImageSize;

use crate::error::SdkError;

/// Application id of the default media receiver
pub const DEFAULT_RECEIVER_APP_ID: &str = "CC1AD845";

/// Configuration for a [`CastContext`](crate::CastContext)
#[derive(Debug, Clone)]
pub struct CastConfig {
    /// Receiver application launched on the device
    /// Default: the default media receiver ("CC1AD845")
    pub receiver_app_id: String,

    /// Name this client identifies itself with
    /// Default: "cast-sdk"
    pub client_package_name: String,

    /// Listen for announcements instead of actively probing
    /// Default: true
    pub passive_scan: bool,

    /// Connect to every device as soon as it comes online
    /// Default: true
    pub auto_connect: bool,

    /// Interval used by `add_default_position_observer`
    /// Default: 1 second
    pub position_interval: Duration,

    /// Artwork size used when a media item does not give one
    /// Default: 200x200
    pub default_image_size: ImageSize,
}

impl Default for CastConfig {
    fn default() -> Self {
        Self {
            receiver_app_id: DEFAULT_RECEIVER_APP_ID.to_string(),
            client_package_name: "cast-sdk".to_string(),
            passive_scan: true,
            auto_connect: true,
            position_interval: Duration::from_secs(1),
            default_image_size: ImageSize::default(),
        }
    }
}

impl CastConfig {
    /// Create a CastConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for a custom receiver application
    pub fn for_receiver(app_id: impl Into<String>) -> Self {
        Self {
            receiver_app_id: app_id.into(),
            ..Default::default()
        }
    }

    /// Validate the configuration and return any issues
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.receiver_app_id.trim().is_empty() {
            return Err(SdkError::Configuration(
                "Receiver application id must not be empty".to_string(),
            ));
        }

        if self.client_package_name.trim().is_empty() {
            return Err(SdkError::Configuration(
                "Client package name must not be empty".to_string(),
            ));
        }

        if self.position_interval == Duration::ZERO {
            return Err(SdkError::Configuration(
                "Position interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Scanner criteria derived from this configuration
    pub fn filter_criteria(&self) -> FilterCriteria {
        FilterCriteria::for_application(self.receiver_app_id.clone()).with_passive(self.passive_scan)
    }

    // Builder methods

    pub fn with_receiver_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.receiver_app_id = app_id.into();
        self
    }

    pub fn with_client_package_name(mut self, name: impl Into<String>) -> Self {
        self.client_package_name = name.into();
        self
    }

    pub fn with_passive_scan(mut self, passive: bool) -> Self {
        self.passive_scan = passive;
        self
    }

    pub fn with_auto_connect(mut self, enabled: bool) -> Self {
        self.auto_connect = enabled;
        self
    }

    pub fn with_position_interval(mut self, interval: Duration) -> Self {
        self.position_interval = interval;
        self
    }

    pub fn with_default_image_size(mut self, size: ImageSize) -> Self {
        self.default_image_size = size;
        self
    }
}
