//! Memory of the last joined application session

use cast_discovery::DeviceId;

use crate::model::{Session, SessionId};

/// Remembers the last successfully joined session so it can be rejoined
///
/// Pure storage: deciding when to keep or drop the identifiers is up to the
/// connection controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionTracker {
    device_id: Option<DeviceId>,
    session_id: Option<SessionId>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the session that was just joined
    pub fn remember(&mut self, device_id: DeviceId, session_id: SessionId) {
        tracing::debug!("Remembering session {} on {}", session_id, device_id);
        self.device_id = Some(device_id);
        self.session_id = Some(session_id);
    }

    /// Forget the session
    ///
    /// With `clear_all == false` the identifiers are kept for a later rejoin.
    pub fn forget(&mut self, clear_all: bool) {
        if clear_all {
            self.device_id = None;
            self.session_id = None;
        }
    }

    pub fn device_id(&self) -> Option<&DeviceId> {
        self.device_id.as_ref()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// The remembered session, when both identifiers are present
    pub fn session(&self) -> Option<Session> {
        Some(Session {
            device_id: self.device_id.clone()?,
            session_id: self.session_id.clone()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.device_id.is_none() && self.session_id.is_none()
    }

    /// Whether `id` is the device of the remembered session
    pub fn matches_device(&self, id: &DeviceId) -> bool {
        self.device_id.as_ref() == Some(id)
    }
}
