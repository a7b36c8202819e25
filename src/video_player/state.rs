// SPDX-License-Identifier: MPL-2.0
//! Authoritative transport state of the player view.
//!
//! `PlaybackState` is created once when the view mounts and is only mutated
//! through [`TransportController`](super::transport::TransportController).
//! Progress reports from the embedded player are folded in with
//! [`PlaybackState::merge_progress`], which implements the field-level
//! precedence rule: while the user holds the seek handle, the reported
//! position is dropped but buffering information still lands.

use crate::domain::playback::{DisplayMode, PlaybackRate, Played, Volume};

/// Payload of the embedded player's periodic progress callback.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressUpdate {
    /// Fraction of the duration played.
    pub played: f64,
    /// Fraction of the stream buffered.
    pub loaded: f64,
    /// Playback position in seconds.
    pub played_seconds: f64,
    /// Buffered position in seconds.
    pub loaded_seconds: f64,
}

/// Outcome of merging one progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every field was applied.
    Applied,
    /// A seek drag is in progress: the position fields were discarded.
    PositionSuppressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    pub volume: Volume,
    pub playback_rate: PlaybackRate,
    pub played: Played,
    pub loaded: Played,
    pub played_seconds: f64,
    pub loaded_seconds: f64,
    /// True while the user holds the seek control.
    pub seeking: bool,
    pub display_mode: DisplayMode,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            muted: false,
            volume: Volume::default(),
            playback_rate: PlaybackRate::default(),
            played: Played::default(),
            loaded: Played::default(),
            played_seconds: 0.0,
            loaded_seconds: 0.0,
            seeking: false,
            display_mode: DisplayMode::default(),
        }
    }
}

impl PlaybackState {
    /// Folds a progress update into the state.
    ///
    /// `seeking` suppresses `played` and `played_seconds` only.
    pub fn merge_progress(&mut self, update: ProgressUpdate) -> MergeOutcome {
        self.loaded = Played::new(update.loaded);
        if update.loaded_seconds.is_finite() {
            self.loaded_seconds = update.loaded_seconds.max(0.0);
        }

        if self.seeking {
            return MergeOutcome::PositionSuppressed;
        }

        self.played = Played::new(update.played);
        if update.played_seconds.is_finite() {
            self.played_seconds = update.played_seconds.max(0.0);
        }
        MergeOutcome::Applied
    }

    /// Snapshot of the declarative props the embedded player renders from.
    #[must_use]
    pub fn props(&self) -> PlayerProps {
        PlayerProps {
            playing: self.playing,
            muted: self.muted,
            volume: self.volume,
            playback_rate: self.playback_rate,
        }
    }
}

/// Declarative props pushed to the embedded player after each state change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProps {
    pub playing: bool,
    pub muted: bool,
    pub volume: Volume,
    pub playback_rate: PlaybackRate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn update(played: f64, loaded: f64) -> ProgressUpdate {
        ProgressUpdate {
            played,
            loaded,
            played_seconds: played * 100.0,
            loaded_seconds: loaded * 100.0,
        }
    }

    #[test]
    fn defaults_match_mount_state() {
        let state = PlaybackState::default();
        assert!(!state.playing);
        assert!(!state.muted);
        assert!(!state.seeking);
        assert_abs_diff_eq!(state.volume.value(), 0.5);
        assert_eq!(state.playback_rate, PlaybackRate::Normal);
        assert_abs_diff_eq!(state.played.value(), 0.0);
        assert_eq!(state.display_mode, DisplayMode::Elapsed);
    }

    #[test]
    fn merge_applies_all_fields_when_not_seeking() {
        let mut state = PlaybackState::default();
        let outcome = state.merge_progress(update(0.25, 0.5));

        assert_eq!(outcome, MergeOutcome::Applied);
        assert_abs_diff_eq!(state.played.value(), 0.25);
        assert_abs_diff_eq!(state.played_seconds, 25.0);
        assert_abs_diff_eq!(state.loaded.value(), 0.5);
        assert_abs_diff_eq!(state.loaded_seconds, 50.0);
    }

    #[test]
    fn merge_suppresses_only_position_while_seeking() {
        let mut state = PlaybackState {
            seeking: true,
            played: Played::new(0.8),
            played_seconds: 80.0,
            ..PlaybackState::default()
        };

        let outcome = state.merge_progress(update(0.1, 0.9));

        assert_eq!(outcome, MergeOutcome::PositionSuppressed);
        assert_abs_diff_eq!(state.played.value(), 0.8);
        assert_abs_diff_eq!(state.played_seconds, 80.0);
        assert_abs_diff_eq!(state.loaded.value(), 0.9);
        assert_abs_diff_eq!(state.loaded_seconds, 90.0);
    }

    #[test]
    fn merge_clamps_out_of_range_reports() {
        let mut state = PlaybackState::default();
        state.merge_progress(ProgressUpdate {
            played: 1.4,
            loaded: -1.0,
            played_seconds: f64::NAN,
            loaded_seconds: -3.0,
        });
        assert_abs_diff_eq!(state.played.value(), 1.0);
        assert_abs_diff_eq!(state.loaded.value(), 0.0);
        assert_abs_diff_eq!(state.played_seconds, 0.0);
        assert_abs_diff_eq!(state.loaded_seconds, 0.0);
    }

    #[test]
    fn props_mirror_transport_fields() {
        let state = PlaybackState {
            playing: true,
            muted: true,
            playback_rate: PlaybackRate::Double,
            ..PlaybackState::default()
        };
        let props = state.props();
        assert!(props.playing);
        assert!(props.muted);
        assert_eq!(props.playback_rate, PlaybackRate::Double);
        assert_eq!(props.volume, state.volume);
    }
}
