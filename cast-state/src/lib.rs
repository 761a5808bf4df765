//! State for cast sessions
//!
//! Value types and small state holders used by the cast session controller:
//!
//! - [`ConnectionState`]: the derived, outward-facing cast state
//! - [`SessionTracker`]: remembers the last joined session for rejoining
//! - [`MediaStatusCache`]: snapshot of remote playback status
//! - [`MediaItem`]: what callers hand over to be cast
//!
//! None of these types talk to the network; the controller in `cast-sdk`
//! feeds them with what the external cast SDK reports.

pub mod logging;
pub mod model;

mod error;
mod media_cache;
mod session_tracker;

pub use error::{Result, StateError};
pub use media_cache::{MediaSnapshot, MediaStatusCache};
pub use model::{
    ApplicationMetadata, ConnectionState, ImageSize, LinkState, MediaImage, MediaInformation,
    MediaItem, MediaKind, MediaMetadata, MediaStatus, MediaTrack, PlayerState, Session, SessionId,
    StreamType, TrackId, TrackKind, DEFAULT_IMAGE_SIZE,
};
pub use session_tracker::SessionTracker;

pub use cast_discovery::DeviceId;
