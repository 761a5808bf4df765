//! Discovered device records and scan filtering.

use serde::{Deserialize, Serialize};

use crate::error::{DiscoveryError, Result};
use crate::DeviceId;

/// A cast receiver surfaced by discovery.
///
/// Owned by the [`DeviceRegistry`](crate::DeviceRegistry); other components
/// refer to a device by its [`DeviceId`] only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Normalized device identifier
    pub id: DeviceId,
    /// Human-readable name, e.g. "Living Room TV"
    pub name: String,
    /// Model name reported by the receiver, if any
    pub model_name: Option<String>,
    /// Whether the device is currently reachable
    pub is_online: bool,
}

impl Device {
    /// Create an online device record
    pub fn new(id: impl Into<DeviceId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            model_name: None,
            is_online: true,
        }
    }

    /// Attach a model name
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = Some(model_name.into());
        self
    }

    /// Reject records the registry cannot key
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(DiscoveryError::InvalidDevice(format!(
                "device '{}' has an empty identifier",
                self.name
            )));
        }
        Ok(())
    }
}

/// Criteria passed to the scanner when discovery starts.
///
/// Only devices able to run the given receiver application are surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Receiver application the device must be able to launch
    pub application_id: String,
    /// Passive scans listen for announcements instead of actively probing
    pub passive: bool,
}

impl FilterCriteria {
    /// Filter for devices able to run `application_id`, scanning passively
    pub fn for_application(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            passive: true,
        }
    }

    /// Toggle passive scanning
    pub fn with_passive(mut self, passive: bool) -> Self {
        self.passive = passive;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.application_id.trim().is_empty() {
            return Err(DiscoveryError::InvalidCriteria(
                "application id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
