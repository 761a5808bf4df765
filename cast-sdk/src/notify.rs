//! Outward notifications
//!
//! Listeners subscribe once and receive every notification broadcast after
//! that point. Receivers that have been dropped are pruned on the next
//! broadcast.

use std::sync::mpsc::{self, Receiver, Sender};

use cast_discovery::DeviceId;
use cast_state::{ConnectionState, SessionId};
use serde::Serialize;

/// Something listeners may want to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CastNotification {
    /// An application session was joined
    Connected {
        device_id: Option<DeviceId>,
        session_id: SessionId,
    },
    /// The transport or application connection went away
    Disconnected {
        device_id: Option<DeviceId>,
        /// Whether the session was kept for a later rejoin
        recoverable: bool,
    },
    /// The derived connection state changed
    StateChanged {
        old: ConnectionState,
        new: ConnectionState,
    },
}

#[derive(Debug, Default)]
pub struct Notifier {
    listeners: Vec<Sender<CastNotification>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener
    pub fn subscribe(&mut self) -> Receiver<CastNotification> {
        let (tx, rx) = mpsc::channel();
        self.listeners.push(tx);
        rx
    }

    /// Send `notification` to every live listener
    pub fn broadcast(&mut self, notification: CastNotification) {
        self.listeners
            .retain(|listener| listener.send(notification.clone()).is_ok());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
