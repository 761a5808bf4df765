//! Seams over the external cast SDK
//!
//! The controller never speaks a wire protocol itself. An adapter for the
//! real SDK implements these traits and forwards the SDK's callbacks into
//! the context as [`CastEvent`](crate::CastEvent)s.
//!
//! All calls are fire-and-forget: completion is reported later through an
//! event, never through a return value.

use std::fmt;

use cast_discovery::Device;
use cast_state::{LinkState, MediaInformation, MediaStatus, SessionId};
use serde::{Deserialize, Serialize};

/// Error codes reported by the SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    NetworkError,
    Timeout,
    AppDidEnterBackground,
    ApplicationNotRunning,
    LaunchFailed,
    DeviceAuthenticationFailed,
    Cancelled,
    Unknown,
}

/// How an SDK error affects the remembered session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Transient transport condition; the session can be resumed
    Recoverable,
    /// Receiver application problem; depends on reconnection context
    Application,
    /// Anything else
    Fatal,
}

impl ErrorCode {
    pub fn class(self) -> ErrorClass {
        match self {
            ErrorCode::NetworkError | ErrorCode::Timeout | ErrorCode::AppDidEnterBackground => {
                ErrorClass::Recoverable
            }
            ErrorCode::ApplicationNotRunning | ErrorCode::LaunchFailed => ErrorClass::Application,
            _ => ErrorClass::Fatal,
        }
    }

    pub fn is_recoverable(self) -> bool {
        self.class() == ErrorClass::Recoverable
    }
}

/// An error reported by the SDK through a callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportError {
    pub code: ErrorCode,
    pub message: String,
}

impl TransportError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.code.is_recoverable()
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for TransportError {}

/// Whether a disconnect with this (optional) error keeps the session
///
/// A disconnect without an error is a deliberate one and is not recoverable.
pub fn is_recoverable(error: Option<&TransportError>) -> bool {
    error.map_or(false, TransportError::is_recoverable)
}

/// Factory for per-device managers
pub trait CastTransport {
    /// Create a manager for `device`
    fn device_manager(
        &mut self,
        device: &Device,
        client_package_name: &str,
    ) -> Result<Box<dyn DeviceManager>, TransportError>;
}

/// Connection to a single device
pub trait DeviceManager {
    /// Open the transport connection. Reports `TransportConnected` or `ConnectFailed`.
    fn connect(&mut self);

    /// Close the transport connection. Reports `TransportDisconnected`.
    fn disconnect(&mut self);

    /// Leave the receiver application without stopping it for other clients
    fn leave_application(&mut self);

    /// Launch a fresh application session. Reports `ApplicationJoined` or `ApplicationJoinFailed`.
    fn launch_application(&mut self, application_id: &str);

    /// Rejoin an existing session. Reports `ApplicationJoined` or `ApplicationJoinFailed`.
    fn join_application(&mut self, application_id: &str, session_id: &SessionId);

    fn connection_state(&self) -> LinkState;

    fn application_connection_state(&self) -> LinkState;

    /// Attach a media control channel to the running application
    fn create_media_channel(&mut self) -> Box<dyn MediaChannel>;
}

/// Media control channel of a running application
pub trait MediaChannel {
    fn load_media(&mut self, media: &MediaInformation, autoplay: bool, start_position: f64);

    fn play(&mut self);

    fn pause(&mut self);

    fn stop(&mut self);

    /// Seek to `position` seconds
    fn seek(&mut self, position: f64);

    /// Ask the receiver for a status report. Reports `MediaStatusUpdated`.
    fn request_status(&mut self);

    /// Latest status received, if any
    fn media_status(&self) -> Option<MediaStatus>;

    /// Position extrapolated from the last status, in seconds
    fn approximate_stream_position(&self) -> f64;
}
