//! Connection state machine for a single active device
//!
//! The controller owns the device manager for the selected device, the
//! media channel of the running application, and the [`SessionTracker`]
//! used to rejoin a session after a transient disconnect.
//!
//! ```text
//!              connect()              ApplicationJoined
//! Disconnected ─────────▶ Connecting ──────────────────▶ Connected
//!      ▲                      │  ▲                         │   │
//!      │   ConnectFailed /    │  │ Resumed(no rejoin)      │   │ Suspended
//!      │   JoinFailed /       │  │                         │   ▼
//!      └──── Disconnected ◀───┘  └─────────────────── Suspended
//! ```

use cast_discovery::{Device, DeviceId};
use cast_state::{ApplicationMetadata, LinkState, SessionId, SessionTracker};

use crate::event::SuspendReason;
use crate::transport::{self, CastTransport, DeviceManager, ErrorCode, MediaChannel, TransportError};

/// Phase of the controller's own state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerPhase {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Suspended,
}

/// Last volume reported by the device
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume {
    pub level: f32,
    pub muted: bool,
}

/// Result of handling a disconnect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisconnectOutcome {
    /// Device that was selected when the disconnect arrived
    pub device_id: Option<DeviceId>,
    /// Whether the session identifiers were kept
    pub recoverable: bool,
}

/// Drives connect, reconnect and disconnect against one device at a time
pub struct ConnectionController {
    transport: Box<dyn CastTransport>,
    application_id: String,
    client_package_name: String,
    phase: ControllerPhase,
    device_manager: Option<Box<dyn DeviceManager>>,
    selected_device: Option<DeviceId>,
    media_channel: Option<Box<dyn MediaChannel>>,
    application_metadata: Option<ApplicationMetadata>,
    reconnecting: bool,
    sessions: SessionTracker,
    volume: Option<Volume>,
}

impl ConnectionController {
    pub fn new(
        transport: Box<dyn CastTransport>,
        application_id: impl Into<String>,
        client_package_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            application_id: application_id.into(),
            client_package_name: client_package_name.into(),
            phase: ControllerPhase::Disconnected,
            device_manager: None,
            selected_device: None,
            media_channel: None,
            application_metadata: None,
            reconnecting: false,
            sessions: SessionTracker::new(),
            volume: None,
        }
    }

    /// Select `device` and start connecting to it
    ///
    /// Any previous device manager is replaced. Connecting to the device of
    /// the remembered session marks the attempt as a reconnect. If the
    /// transport cannot provide a manager the failure is logged and nothing
    /// changes.
    pub fn connect(&mut self, device: &Device) {
        let mut manager = match self
            .transport
            .device_manager(device, &self.client_package_name)
        {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!("Cannot connect to {} ({}): {}", device.name, device.id, e);
                return;
            }
        };

        if self.device_manager.is_some() {
            tracing::debug!("Replacing device manager with one for {}", device.id);
            self.media_channel = None;
        }

        self.reconnecting = self.sessions.matches_device(&device.id);
        if self.reconnecting {
            tracing::debug!("Remembered device {} is back, reconnecting", device.id);
        }

        tracing::debug!("Connecting to {} ({})", device.name, device.id);
        self.selected_device = Some(device.id.clone());
        self.phase = ControllerPhase::Connecting;
        manager.connect();
        self.device_manager = Some(manager);
    }

    /// Leave the application (without stopping it) and close the connection
    ///
    /// No-op when no device manager exists.
    pub fn disconnect(&mut self) {
        let Some(manager) = self.device_manager.as_mut() else {
            tracing::debug!("disconnect ignored: no device manager");
            return;
        };

        manager.leave_application();
        manager.disconnect();
    }

    pub fn on_transport_connected(&mut self) {
        tracing::debug!("Transport connected");
        let Some(manager) = self.device_manager.as_mut() else {
            tracing::warn!("Transport connected without a device manager");
            return;
        };

        let same_device = self.selected_device.is_some()
            && self.selected_device.as_ref() == self.sessions.device_id();

        match self.sessions.session_id() {
            Some(session_id) if self.reconnecting && same_device => {
                tracing::debug!("Rejoining session {}", session_id);
                manager.join_application(&self.application_id, session_id);
            }
            _ => {
                tracing::debug!("Launching {}", self.application_id);
                manager.launch_application(&self.application_id);
            }
        }
    }

    /// Record the joined session and open the media channel
    pub fn on_application_joined(
        &mut self,
        metadata: ApplicationMetadata,
        session_id: SessionId,
        launched: bool,
    ) {
        tracing::debug!(
            "Application {} {} (session {})",
            metadata.name,
            if launched { "launched" } else { "rejoined" },
            session_id
        );

        self.reconnecting = false;
        self.phase = ControllerPhase::Connected;

        if let Some(manager) = self.device_manager.as_mut() {
            let mut channel = manager.create_media_channel();
            channel.request_status();
            self.media_channel = Some(channel);
        }

        self.application_metadata = Some(metadata);

        if let Some(device_id) = self.selected_device.clone() {
            self.sessions.remember(device_id, session_id);
        }
    }

    /// Handle a transport- or application-level disconnect
    pub fn on_disconnected(&mut self, error: Option<&TransportError>) -> DisconnectOutcome {
        match error {
            Some(e) => tracing::warn!("Disconnected: {}", e),
            None => tracing::debug!("Disconnected"),
        }

        let recoverable = transport::is_recoverable(error);
        let device_id = self.selected_device.clone();

        self.phase = ControllerPhase::Disconnected;
        self.forget_device(!recoverable);

        DisconnectOutcome {
            device_id,
            recoverable,
        }
    }

    pub fn on_connect_failed(&mut self, error: &TransportError) {
        tracing::warn!("Failed to connect: {}", error);

        self.phase = ControllerPhase::Disconnected;
        self.reconnecting = false;
        self.forget_device(true);
    }

    pub fn on_application_join_failed(&mut self, error: &TransportError) {
        self.phase = ControllerPhase::Disconnected;

        if self.reconnecting && error.code == ErrorCode::ApplicationNotRunning {
            // The receiver ran something else since; the old session is gone.
            tracing::debug!("Previous session no longer running, forgetting it");
            self.reconnecting = false;
            self.forget_device(true);
            return;
        }

        tracing::warn!("Failed to connect to application: {}", error);
    }

    pub fn on_volume_changed(&mut self, level: f32, muted: bool) {
        tracing::debug!("Volume: {}, muted: {}", level, muted);
        self.volume = Some(Volume { level, muted });
    }

    pub fn on_suspended(&mut self, reason: SuspendReason) {
        match reason {
            SuspendReason::AppBackgrounded => {
                tracing::info!("Connection suspended: app in background")
            }
            SuspendReason::NetworkLost => {
                tracing::info!("Connection suspended: network lost, SDK will reconnect")
            }
        }
        self.phase = ControllerPhase::Suspended;
    }

    pub fn on_resumed(&mut self, rejoined_application: bool) {
        tracing::debug!("Connection resumed (rejoined application: {})", rejoined_application);
        self.phase = if rejoined_application {
            ControllerPhase::Connected
        } else {
            ControllerPhase::Connecting
        };
    }

    /// Drop the channel and the selection; wipe the session if `clear_all`
    fn forget_device(&mut self, clear_all: bool) {
        self.media_channel = None;
        self.selected_device = None;
        self.sessions.forget(clear_all);
    }

    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    pub fn selected_device(&self) -> Option<&DeviceId> {
        self.selected_device.as_ref()
    }

    pub fn is_reconnecting(&self) -> bool {
        self.reconnecting
    }

    pub fn sessions(&self) -> &SessionTracker {
        &self.sessions
    }

    pub fn application_metadata(&self) -> Option<&ApplicationMetadata> {
        self.application_metadata.as_ref()
    }

    pub fn volume(&self) -> Option<Volume> {
        self.volume
    }

    /// Application link state of the device manager, `None` without one
    pub fn application_link_state(&self) -> Option<LinkState> {
        self.device_manager
            .as_ref()
            .map(|m| m.application_connection_state())
    }

    /// Transport link state of the device manager, `None` without one
    fn transport_link_state(&self) -> Option<LinkState> {
        self.device_manager.as_ref().map(|m| m.connection_state())
    }

    /// Whether the application link is connected
    pub fn is_connected(&self) -> bool {
        self.application_link_state() == Some(LinkState::Connected)
    }

    pub fn has_media_channel(&self) -> bool {
        self.media_channel.is_some()
    }

    pub(crate) fn media_channel(&self) -> Option<&dyn MediaChannel> {
        match &self.media_channel {
            Some(channel) => Some(channel.as_ref()),
            None => None,
        }
    }

    pub(crate) fn media_channel_mut(&mut self) -> Option<&mut Box<dyn MediaChannel>> {
        self.media_channel.as_mut()
    }
}

impl std::fmt::Debug for ConnectionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionController")
            .field("phase", &self.phase)
            .field("transport_link", &self.transport_link_state())
            .field("application_link", &self.application_link_state())
            .field("selected_device", &self.selected_device)
            .field("reconnecting", &self.reconnecting)
            .field("sessions", &self.sessions)
            .field("has_media_channel", &self.media_channel.is_some())
            .finish()
    }
}
