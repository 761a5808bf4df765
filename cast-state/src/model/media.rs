//! Media descriptions exchanged with the receiver

use serde::{Deserialize, Serialize};

use super::PlayerState;

/// Identifier of a media track (audio, video or text)
pub type TrackId = i64;

/// How the receiver should treat the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StreamType {
    #[default]
    None,
    Buffered,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Audio,
    Video,
    Text,
}

/// A selectable track within a piece of media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaTrack {
    pub id: TrackId,
    pub kind: TrackKind,
    pub name: Option<String>,
    pub language: Option<String>,
}

impl MediaTrack {
    pub fn new(id: TrackId, kind: TrackKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            language: None,
        }
    }
}

/// Artwork attached to media metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Generic display metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub images: Vec<MediaImage>,
}

impl MediaMetadata {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.subtitle.is_none() && self.images.is_empty()
    }
}

/// Description of a piece of media as understood by the receiver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInformation {
    /// Content id, usually the URL the receiver fetches
    pub content_id: String,
    pub stream_type: StreamType,
    /// MIME type, e.g. "audio/mpeg"
    pub content_type: String,
    pub metadata: Option<MediaMetadata>,
    /// Duration in seconds, 0 when unknown
    pub stream_duration: f64,
    pub tracks: Vec<MediaTrack>,
}

impl MediaInformation {
    pub fn track_ids(&self) -> impl Iterator<Item = TrackId> + '_ {
        self.tracks.iter().map(|t| t.id)
    }
}

/// One status report from the media channel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaStatus {
    pub player_state: PlayerState,
    pub media_information: Option<MediaInformation>,
}

impl MediaStatus {
    pub fn new(player_state: PlayerState, media_information: Option<MediaInformation>) -> Self {
        Self {
            player_state,
            media_information,
        }
    }
}
