//! # Cast SDK - session controller for cast receivers
//!
//! Sits on top of an external cast SDK and keeps one coherent view of
//! discovery, the connection to a single receiver and its remote playback:
//!
//! ```rust,ignore
//! use cast_sdk::{CastConfig, CastContext, MediaItem};
//!
//! let mut cast = CastContext::new(CastConfig::default(), transport, scanner)?;
//! cast.start_scan()?;
//!
//! // SDK adapters post events from their own threads
//! let events = cast.event_sender();
//!
//! // The owning thread drains them
//! cast.process_pending();
//!
//! if cast.is_connected() {
//!     let item = MediaItem::video("https://example.com/movie.mp4")?.with_title("Movie");
//!     cast.load_media(&item, true, 0.0);
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Derived state**: `Unavailable`, `Available`, `Connecting` or `Connected`,
//!   computed from discovered devices and the application link
//! - **Session rejoin**: the last session survives recoverable disconnects and
//!   is rejoined when its device comes back
//! - **Media snapshot**: position, player state and track selection cached
//!   from the receiver's media status
//! - **Position observer**: periodic callback with the refreshed position
//!
//! ## Architecture
//!
//! ```text
//! external cast SDK (scanner, device manager, media channel)
//!     ↓ CastEvent
//! cast-sdk (CastContext, ConnectionController)
//!     ↓
//! cast-state (ConnectionState, SessionTracker, MediaStatusCache)
//! cast-discovery (DeviceRegistry)
//! ```
//!
//! The SDK is reached through the [`CastTransport`], [`DeviceManager`],
//! [`MediaChannel`] and [`DeviceScanner`] traits.

// Main exports
pub use config::{CastConfig, DEFAULT_RECEIVER_APP_ID};
pub use context::CastContext;
pub use controller::{ConnectionController, ControllerPhase, DisconnectOutcome, Volume};
pub use error::{Result, SdkError};
pub use event::{CastEvent, SuspendReason};
pub use notify::{CastNotification, Notifier};
pub use ticker::{PositionCallback, PositionTicker};
pub use transport::{
    is_recoverable, CastTransport, DeviceManager, ErrorClass, ErrorCode, MediaChannel,
    TransportError,
};

// Re-export commonly used types from the state and discovery crates
pub use cast_discovery::{Device, DeviceId, DeviceScanner, FilterCriteria, ManualScanner};
pub use cast_state::{
    logging, ApplicationMetadata, ConnectionState, ImageSize, LinkState, MediaImage,
    MediaInformation, MediaItem, MediaKind, MediaMetadata, MediaSnapshot, MediaStatus, MediaTrack,
    PlayerState, SessionId, StreamType, TrackId, TrackKind,
};

mod config;
mod context;
mod controller;
mod error;
mod event;
mod notify;
mod ticker;
mod transport;
