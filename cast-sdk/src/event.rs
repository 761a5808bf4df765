//! Events driving the session controller
//!
//! Every SDK callback (scanner, device manager, media channel) and every
//! timer tick is translated into one [`CastEvent`] and handled by
//! [`CastContext::handle_event`](crate::CastContext::handle_event).

use cast_discovery::{Device, DeviceId};
use cast_state::{ApplicationMetadata, SessionId};

use crate::transport::TransportError;

/// Why the SDK suspended the connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    /// The host application moved to the background
    AppBackgrounded,
    /// The network dropped; the SDK will try to reconnect
    NetworkLost,
}

/// Input to the session state machine
#[derive(Debug, Clone, PartialEq)]
pub enum CastEvent {
    /// The scanner saw a device come online
    DeviceOnline(Device),
    /// The scanner lost a device
    DeviceOffline(DeviceId),
    /// The device manager's transport connection is up
    TransportConnected,
    /// An application session was launched or rejoined
    ApplicationJoined {
        metadata: ApplicationMetadata,
        session_id: SessionId,
        launched: bool,
    },
    /// The transport connection closed
    TransportDisconnected { error: Option<TransportError> },
    /// The application session ended
    ApplicationDisconnected { error: Option<TransportError> },
    /// The transport connection could not be established
    ConnectFailed { error: TransportError },
    /// Launching or rejoining the application failed
    ApplicationJoinFailed { error: TransportError },
    VolumeChanged { level: f32, muted: bool },
    Suspended { reason: SuspendReason },
    Resumed { rejoined_application: bool },
    /// The media channel finished loading an item
    MediaLoadCompleted { media_session_id: i64 },
    MediaStatusUpdated,
    MediaMetadataUpdated,
    /// Position observer timer fired
    PositionTick { generation: u64 },
}

impl CastEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            CastEvent::DeviceOnline(_) => "device_online",
            CastEvent::DeviceOffline(_) => "device_offline",
            CastEvent::TransportConnected => "transport_connected",
            CastEvent::ApplicationJoined { .. } => "application_joined",
            CastEvent::TransportDisconnected { .. } => "transport_disconnected",
            CastEvent::ApplicationDisconnected { .. } => "application_disconnected",
            CastEvent::ConnectFailed { .. } => "connect_failed",
            CastEvent::ApplicationJoinFailed { .. } => "application_join_failed",
            CastEvent::VolumeChanged { .. } => "volume_changed",
            CastEvent::Suspended { .. } => "suspended",
            CastEvent::Resumed { .. } => "resumed",
            CastEvent::MediaLoadCompleted { .. } => "media_load_completed",
            CastEvent::MediaStatusUpdated => "media_status_updated",
            CastEvent::MediaMetadataUpdated => "media_metadata_updated",
            CastEvent::PositionTick { .. } => "position_tick",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(CastEvent::TransportConnected.name(), "transport_connected");
        assert_eq!(
            CastEvent::DeviceOffline(DeviceId::new("tv")).name(),
            "device_offline"
        );
        assert_eq!(CastEvent::PositionTick { generation: 3 }.name(), "position_tick");
    }

    #[test]
    fn test_events_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<CastEvent>();
    }
}
