//! Cached view of remote playback status
//!
//! The media channel is polled (on a timer or when it reports a status
//! update) and the interesting parts are copied into a [`MediaSnapshot`].
//! Consumers only ever see the snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{MediaInformation, MediaStatus, PlayerState, TrackId};

/// Most recently polled view of remote playback
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaSnapshot {
    stream_position: f64,
    player_state: PlayerState,
    media_information: Option<MediaInformation>,
    selected_tracks: Option<BTreeMap<TrackId, bool>>,
}

impl MediaSnapshot {
    /// Approximate stream position in seconds
    pub fn stream_position(&self) -> f64 {
        self.stream_position
    }

    pub fn player_state(&self) -> PlayerState {
        self.player_state
    }

    pub fn media_information(&self) -> Option<&MediaInformation> {
        self.media_information.as_ref()
    }

    /// Track selection by track id; empty until populated
    pub fn selected_track_by_identifier(&self) -> BTreeMap<TrackId, bool> {
        self.selected_tracks.clone().unwrap_or_default()
    }

    /// Whether a selection map exists (explicit, or zeroed by a refresh)
    pub fn has_track_selection(&self) -> bool {
        self.selected_tracks.is_some()
    }
}

/// Owner of the [`MediaSnapshot`]
#[derive(Debug, Clone, Default)]
pub struct MediaStatusCache {
    snapshot: MediaSnapshot,
}

impl MediaStatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &MediaSnapshot {
        &self.snapshot
    }

    /// Forget everything learned from the previous media channel
    pub fn clear(&mut self) {
        self.snapshot = MediaSnapshot::default();
    }

    /// Drop any track selection ahead of loading new media
    pub fn reset_track_selection(&mut self) {
        self.snapshot.selected_tracks = None;
    }

    /// Copy a status report into the snapshot
    ///
    /// Does nothing unless `connected` and a status is available. Returns
    /// whether the snapshot was updated.
    pub fn refresh(&mut self, connected: bool, status: Option<&MediaStatus>, position: f64) -> bool {
        let Some(status) = status.filter(|_| connected) else {
            return false;
        };

        self.snapshot.stream_position = position;
        self.snapshot.player_state = status.player_state;
        self.snapshot.media_information = status.media_information.clone();

        if self.snapshot.selected_tracks.is_none() {
            self.zero_selected_tracks();
        }

        true
    }

    /// Mark a track as explicitly selected or deselected
    pub fn set_track_selected(&mut self, track_id: TrackId, selected: bool) {
        if self.snapshot.selected_tracks.is_none() {
            self.zero_selected_tracks();
        }
        self.snapshot
            .selected_tracks
            .get_or_insert_with(BTreeMap::new)
            .insert(track_id, selected);
    }

    /// Playing, paused or buffering while connected
    pub fn is_playing_media(&self, connected: bool) -> bool {
        connected && self.snapshot.player_state.is_active()
    }

    pub fn is_paused(&self, connected: bool) -> bool {
        connected && self.snapshot.player_state == PlayerState::Paused
    }

    /// Map every known track to "not selected". Leaves the selection unset
    /// when there is no media information to take track ids from.
    fn zero_selected_tracks(&mut self) {
        let Some(info) = self.snapshot.media_information.as_ref() else {
            return;
        };

        self.snapshot.selected_tracks = Some(info.track_ids().map(|id| (id, false)).collect());
    }
}
