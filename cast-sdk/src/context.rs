//! CastContext - the composed session controller
//!
//! Owns discovery bookkeeping, the connection state machine, the media
//! snapshot and the position observer, and routes every [`CastEvent`]
//! through [`CastContext::handle_event`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use cast_discovery::{Device, DeviceRegistry, DeviceScanner};
use cast_state::{
    ApplicationMetadata, ConnectionState, MediaItem, MediaKind, MediaSnapshot, MediaStatusCache,
    PlayerState, SessionTracker, TrackId,
};

use crate::config::CastConfig;
use crate::controller::{ConnectionController, Volume};
use crate::error::Result;
use crate::event::CastEvent;
use crate::notify::{CastNotification, Notifier};
use crate::ticker::PositionTicker;
use crate::transport::CastTransport;

/// Cast session controller
///
/// A `CastContext` is owned by one thread. SDK adapters running elsewhere
/// post events through [`event_sender`](Self::event_sender); the owner
/// drains them with [`process_pending`](Self::process_pending) or
/// [`wait_event`](Self::wait_event).
///
/// # Example
///
/// ```rust,ignore
/// use cast_sdk::{CastConfig, CastContext, CastEvent};
///
/// let mut cast = CastContext::new(CastConfig::default(), transport, scanner)?;
/// let notifications = cast.subscribe();
/// cast.start_scan()?;
///
/// // SDK callbacks arrive as events
/// let sdk_events = cast.event_sender();
/// sdk_events.send(CastEvent::DeviceOnline(device)).ok();
///
/// loop {
///     cast.wait_event(std::time::Duration::from_millis(100));
///     if cast.is_connected() {
///         cast.load_media(&item, true, 0.0);
///         break;
///     }
/// }
/// ```
pub struct CastContext {
    config: CastConfig,
    registry: DeviceRegistry,
    controller: ConnectionController,
    media: MediaStatusCache,
    ticker: PositionTicker,
    notifier: Notifier,
    state: ConnectionState,
    events_tx: Sender<CastEvent>,
    events_rx: Receiver<CastEvent>,
}

impl CastContext {
    /// Create a context. Fails if `config` does not validate.
    pub fn new(
        config: CastConfig,
        transport: Box<dyn CastTransport>,
        scanner: Box<dyn DeviceScanner>,
    ) -> Result<Self> {
        config.validate()?;

        let controller = ConnectionController::new(
            transport,
            config.receiver_app_id.clone(),
            config.client_package_name.clone(),
        );
        let (events_tx, events_rx) = mpsc::channel();

        Ok(Self {
            config,
            registry: DeviceRegistry::new(scanner),
            controller,
            media: MediaStatusCache::new(),
            ticker: PositionTicker::new(),
            notifier: Notifier::new(),
            state: ConnectionState::Unavailable,
            events_tx,
            events_rx,
        })
    }

    // ========================================================================
    // Discovery
    // ========================================================================

    /// Start passive discovery. No-op if already scanning.
    pub fn start_scan(&mut self) -> Result<()> {
        let criteria = self.config.filter_criteria();
        self.registry.start_scan(&criteria)?;
        Ok(())
    }

    /// Stop discovery. No-op if not scanning.
    pub fn stop_scan(&mut self) {
        self.registry.stop_scan();
    }

    pub fn is_scanning(&self) -> bool {
        self.registry.is_scanning()
    }

    /// Currently discoverable devices
    pub fn discovered_devices(&self) -> Vec<Device> {
        self.registry.devices().cloned().collect()
    }

    // ========================================================================
    // Connection
    // ========================================================================

    /// Connect to `device`, replacing any current selection
    pub fn connect(&mut self, device: &Device) {
        self.controller.connect(device);
        self.discard_orphaned_snapshot();
        self.recompute_state();
    }

    /// Leave the application and close the connection. No-op when idle.
    pub fn disconnect(&mut self) {
        self.controller.disconnect();
        self.recompute_state();
    }

    /// Derived cast state
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether the application link is connected
    pub fn is_connected(&self) -> bool {
        self.controller.is_connected()
    }

    pub fn is_reconnecting(&self) -> bool {
        self.controller.is_reconnecting()
    }

    pub fn sessions(&self) -> &SessionTracker {
        self.controller.sessions()
    }

    pub fn application_metadata(&self) -> Option<&ApplicationMetadata> {
        self.controller.application_metadata()
    }

    pub fn volume(&self) -> Option<Volume> {
        self.controller.volume()
    }

    pub fn controller(&self) -> &ConnectionController {
        &self.controller
    }

    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// Ask the receiver to play `item`
    ///
    /// Ignored unless the state is `Connected` and a media channel is open.
    /// Returns whether the load was requested.
    pub fn load_media(&mut self, item: &MediaItem, autoplay: bool, start_position: f64) -> bool {
        if self.state != ConnectionState::Connected {
            tracing::debug!("load_media ignored: connection state is {:?}", self.state);
            return false;
        }

        let default_size = self.config.default_image_size;
        let Some(channel) = self.controller.media_channel_mut() else {
            tracing::debug!("load_media ignored: no media channel");
            return false;
        };

        let info = item.to_media_information(default_size);
        self.media.reset_track_selection();
        channel.load_media(&info, autoplay, start_position);
        true
    }

    /// Build a [`MediaItem`] from a URL and load it
    pub fn load_media_url(
        &mut self,
        content_url: &str,
        kind: MediaKind,
        autoplay: bool,
        start_position: f64,
    ) -> Result<bool> {
        let item = MediaItem::new(content_url, kind)?;
        Ok(self.load_media(&item, autoplay, start_position))
    }

    /// Copy the media channel's latest status into the snapshot
    pub fn refresh(&mut self) -> bool {
        let connected = self.controller.is_connected();
        let channel = self.controller.media_channel();
        let status = channel.and_then(|c| c.media_status());
        let position = channel.map_or(0.0, |c| c.approximate_stream_position());

        self.media.refresh(connected, status.as_ref(), position)
    }

    pub fn snapshot(&self) -> &MediaSnapshot {
        self.media.snapshot()
    }

    pub fn stream_position(&self) -> f64 {
        self.media.snapshot().stream_position()
    }

    pub fn player_state(&self) -> PlayerState {
        self.media.snapshot().player_state()
    }

    pub fn is_playing_media(&self) -> bool {
        self.media.is_playing_media(self.state.is_connected())
    }

    pub fn is_paused(&self) -> bool {
        self.media.is_paused(self.state.is_connected())
    }

    /// Record an explicit track selection
    pub fn set_track_selected(&mut self, track_id: TrackId, selected: bool) {
        self.media.set_track_selected(track_id, selected);
    }

    pub fn play(&mut self) {
        if let Some(channel) = self.controller.media_channel_mut() {
            channel.play();
        }
    }

    pub fn pause(&mut self) {
        if let Some(channel) = self.controller.media_channel_mut() {
            channel.pause();
        }
    }

    pub fn stop(&mut self) {
        if let Some(channel) = self.controller.media_channel_mut() {
            channel.stop();
        }
    }

    /// Seek to `position` seconds; negative positions seek to the start
    pub fn seek(&mut self, position: f64) {
        if let Some(channel) = self.controller.media_channel_mut() {
            channel.seek(position.max(0.0));
        }
    }

    // ========================================================================
    // Position observer
    // ========================================================================

    /// Call `callback` with the refreshed stream position every `interval`
    ///
    /// Replaces any existing observer.
    pub fn add_position_observer(
        &mut self,
        interval: Duration,
        callback: impl FnMut(f64) + 'static,
    ) -> Result<()> {
        self.ticker
            .add_observer(interval, Box::new(callback), self.events_tx.clone())
    }

    /// Same as `add_position_observer` with the configured interval
    pub fn add_default_position_observer(&mut self, callback: impl FnMut(f64) + 'static) -> Result<()> {
        let interval = self.config.position_interval;
        self.add_position_observer(interval, callback)
    }

    /// Stop the observer. No-op when none is installed.
    pub fn remove_position_observer(&mut self) {
        self.ticker.remove_observer();
    }

    pub fn ticker(&self) -> &PositionTicker {
        &self.ticker
    }

    // ========================================================================
    // Events and notifications
    // ========================================================================

    /// Register for outward notifications
    pub fn subscribe(&mut self) -> Receiver<CastNotification> {
        self.notifier.subscribe()
    }

    /// Sender for marshalling events from other threads into this context
    pub fn event_sender(&self) -> Sender<CastEvent> {
        self.events_tx.clone()
    }

    /// Handle every queued event without blocking. Returns how many ran.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait up to `timeout` for one queued event and handle it
    pub fn wait_event(&mut self, timeout: Duration) -> bool {
        match self.events_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply one event to the state machine
    pub fn handle_event(&mut self, event: CastEvent) {
        tracing::trace!("Handling {}", event.name());

        match event {
            CastEvent::DeviceOnline(device) => self.on_device_online(device),
            CastEvent::DeviceOffline(device_id) => {
                tracing::debug!("Device offline: {}", device_id);
                if let Some(change) = self.registry.device_offline(&device_id) {
                    tracing::debug!("Discovery: {:?}", change);
                }
                self.recompute_state();
            }
            CastEvent::TransportConnected => {
                self.controller.on_transport_connected();
                self.recompute_state();
            }
            CastEvent::ApplicationJoined {
                metadata,
                session_id,
                launched,
            } => {
                self.media.clear();
                self.controller
                    .on_application_joined(metadata, session_id.clone(), launched);
                self.recompute_state();
                self.notifier.broadcast(CastNotification::Connected {
                    device_id: self.controller.selected_device().cloned(),
                    session_id,
                });
            }
            CastEvent::TransportDisconnected { error }
            | CastEvent::ApplicationDisconnected { error } => {
                let outcome = self.controller.on_disconnected(error.as_ref());
                self.discard_orphaned_snapshot();
                self.recompute_state();
                self.notifier.broadcast(CastNotification::Disconnected {
                    device_id: outcome.device_id,
                    recoverable: outcome.recoverable,
                });
            }
            CastEvent::ConnectFailed { error } => {
                self.controller.on_connect_failed(&error);
                self.discard_orphaned_snapshot();
                self.recompute_state();
            }
            CastEvent::ApplicationJoinFailed { error } => {
                self.controller.on_application_join_failed(&error);
                self.discard_orphaned_snapshot();
                self.recompute_state();
            }
            CastEvent::VolumeChanged { level, muted } => {
                self.controller.on_volume_changed(level, muted);
            }
            CastEvent::Suspended { reason } => {
                self.controller.on_suspended(reason);
                self.recompute_state();
            }
            CastEvent::Resumed {
                rejoined_application,
            } => {
                self.controller.on_resumed(rejoined_application);
                self.recompute_state();
            }
            CastEvent::MediaLoadCompleted { media_session_id } => {
                tracing::debug!("Media load completed (media session {})", media_session_id);
            }
            CastEvent::MediaStatusUpdated | CastEvent::MediaMetadataUpdated => {
                self.refresh();
            }
            CastEvent::PositionTick { generation } => {
                if !self.ticker.accepts(generation) {
                    tracing::trace!("Dropping stale tick from generation {}", generation);
                    return;
                }
                self.refresh();
                let position = self.stream_position();
                self.ticker.notify(position);
            }
        }
    }

    fn on_device_online(&mut self, device: Device) {
        if let Err(e) = device.validate() {
            tracing::warn!("Ignoring device: {}", e);
            return;
        }

        tracing::debug!("Device online: {} ({})", device.name, device.id);

        if let Some(change) = self.registry.device_online(device.clone()) {
            tracing::debug!("Discovery: {:?}", change);
        }

        if self.config.auto_connect {
            self.controller.connect(&device);
            self.discard_orphaned_snapshot();
        }

        self.recompute_state();
    }

    /// The snapshot describes the media channel it was read from; once that
    /// channel is gone the snapshot is stale.
    fn discard_orphaned_snapshot(&mut self) {
        if !self.controller.has_media_channel() {
            self.media.clear();
        }
    }

    fn recompute_state(&mut self) {
        let new = ConnectionState::derive(
            self.registry.is_empty(),
            self.controller.application_link_state(),
        );

        if new != self.state {
            let old = std::mem::replace(&mut self.state, new);
            tracing::info!("Cast state: {:?} -> {:?}", old, new);
            self.notifier
                .broadcast(CastNotification::StateChanged { old, new });
        }
    }
}

impl std::fmt::Debug for CastContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CastContext")
            .field("state", &self.state)
            .field("registry", &self.registry)
            .field("controller", &self.controller)
            .field("ticker", &self.ticker)
            .finish()
    }
}
