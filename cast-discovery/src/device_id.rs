//! Device identity type

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a cast receiver
///
/// Kept exactly as the SDK issued it, apart from surrounding whitespace, so
/// adapters can map it back to their own device objects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    /// Creates a new DeviceId, trimming surrounding whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.trim().len() == id.len() {
            Self(id)
        } else {
            Self(id.trim().to_string())
        }
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        DeviceId::new(s)
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        DeviceId::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_kept_verbatim() {
        let id = DeviceId::new("uuid:AbC");
        assert_eq!(id.as_str(), "uuid:AbC");
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert_eq!(DeviceId::new(" 3F1C9A2E\n"), DeviceId::new("3F1C9A2E"));
    }

    #[test]
    fn test_case_distinguishes_ids() {
        assert_ne!(DeviceId::new("3F1C9A2E"), DeviceId::new("3f1c9a2e"));
    }

    #[test]
    fn test_empty() {
        assert!(DeviceId::new("  ").is_empty());
        assert!(!DeviceId::new("uuid:").is_empty());
    }

    #[test]
    fn test_display() {
        let id = DeviceId::new("living-room-tv");
        assert_eq!(format!("{}", id), "living-room-tv");
    }
}
