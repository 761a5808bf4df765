//! Model types for cast-state

mod connection_state;
mod media;
mod media_item;
mod player_state;
mod session;

pub use connection_state::{ConnectionState, LinkState};
pub use media::{
    MediaImage, MediaInformation, MediaMetadata, MediaStatus, MediaTrack, StreamType, TrackId,
    TrackKind,
};
pub use media_item::{ImageSize, MediaItem, MediaKind, DEFAULT_IMAGE_SIZE};
pub use player_state::PlayerState;
pub use session::{ApplicationMetadata, Session, SessionId};
