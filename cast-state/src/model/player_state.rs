//! Remote player state enumeration

use serde::{Deserialize, Serialize};

/// Playback state reported by the receiver's media channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayerState {
    /// No status received yet
    #[default]
    Unknown,
    /// Nothing loaded, or playback finished
    Idle,
    /// Currently playing
    Playing,
    /// Playback is paused
    Paused,
    /// Waiting for data
    Buffering,
    /// Media is being loaded
    Loading,
}

impl PlayerState {
    /// Parse from a media status `playerState` string
    ///
    /// Handles values like "PLAYING", "PAUSED", "BUFFERING", "IDLE".
    /// Unrecognized strings map to `Unknown`.
    pub fn from_status_str(state: &str) -> Self {
        match state.to_uppercase().as_str() {
            "IDLE" => PlayerState::Idle,
            "PLAYING" => PlayerState::Playing,
            "PAUSED" => PlayerState::Paused,
            "BUFFERING" => PlayerState::Buffering,
            "LOADING" => PlayerState::Loading,
            _ => PlayerState::Unknown,
        }
    }

    /// Whether media counts as "playing" from the user's point of view
    ///
    /// Paused and buffering media is still considered active.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            PlayerState::Buffering | PlayerState::Playing | PlayerState::Paused
        )
    }
}
