//! Application session identity

use cast_discovery::DeviceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a receiver application session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        SessionId::new(s)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        SessionId::new(s)
    }
}

/// A joined application session on a specific device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub device_id: DeviceId,
    pub session_id: SessionId,
}

/// Metadata of the receiver application we connected to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMetadata {
    /// Receiver application id, e.g. "CC1AD845"
    pub application_id: String,
    /// Display name of the receiver application
    pub name: String,
}

impl ApplicationMetadata {
    pub fn new(application_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            name: name.into(),
        }
    }
}
