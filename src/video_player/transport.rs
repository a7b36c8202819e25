// SPDX-License-Identifier: MPL-2.0
//! Transport controller: the single writer of [`PlaybackState`].
//!
//! Every control in the overlay bar maps to one method here. Methods that
//! command the embedded player take it as an argument, so the controller
//! holds no handle and can be driven by an in-memory double in tests.

use super::state::{MergeOutcome, PlaybackState, PlayerProps, ProgressUpdate};
use super::time_format;
use crate::application::port::{FullscreenCapability, PlayerTransport, SeekTarget};
use crate::config::Config;
use crate::domain::playback::{DisplayMode, PlaybackRate, Played, SkipStep, Volume};

#[derive(Debug, Clone, Default)]
pub struct TransportController {
    state: PlaybackState,
    skip_step: SkipStep,
}

impl TransportController {
    /// Creates a controller in the mount state with the given skip distance.
    #[must_use]
    pub fn new(skip_step: SkipStep) -> Self {
        Self {
            state: PlaybackState::default(),
            skip_step,
        }
    }

    /// Creates a controller whose initial volume, mute flag, rate and skip
    /// distance come from configuration.
    ///
    /// An unknown rate falls back to normal speed.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let mut controller = Self::new(
            config
                .transport
                .skip_step_secs
                .map(SkipStep::new)
                .unwrap_or_default(),
        );

        if let Some(volume) = config.player.volume {
            controller.state.volume = Volume::new(volume);
        }
        if let Some(muted) = config.player.muted {
            controller.state.muted = muted;
        }
        if let Some(rate) = config.player.playback_rate {
            controller.state.playback_rate = PlaybackRate::from_value(rate).unwrap_or_else(|| {
                log::warn!("Unsupported playback rate {rate} in config, using 1x");
                PlaybackRate::default()
            });
        }
        controller
    }

    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        self.skip_step
    }

    #[must_use]
    pub fn props(&self) -> PlayerProps {
        self.state.props()
    }

    // -------------------------------------------------------------------------
    // Player commands
    // -------------------------------------------------------------------------

    /// Jumps back by the skip step. No-op until the player reports a position.
    pub fn rewind(&self, player: &mut impl PlayerTransport) {
        if let Some(current) = player.current_time() {
            let target = current - self.skip_step.value();
            log::debug!("Rewind {current:.2}s -> {target:.2}s");
            player.seek_to(SeekTarget::Seconds(target));
        }
    }

    /// Jumps forward by the skip step. No-op until the player reports a position.
    pub fn fast_forward(&self, player: &mut impl PlayerTransport) {
        if let Some(current) = player.current_time() {
            let target = current + self.skip_step.value();
            log::debug!("Fast forward {current:.2}s -> {target:.2}s");
            player.seek_to(SeekTarget::Seconds(target));
        }
    }

    /// Absolute seek in seconds; bookmarks go through here.
    pub fn seek_to_seconds(&self, seconds: f64, player: &mut impl PlayerTransport) {
        log::debug!("Seek to {seconds:.2}s");
        player.seek_to(SeekTarget::Seconds(seconds));
    }

    // -------------------------------------------------------------------------
    // Local state
    // -------------------------------------------------------------------------

    pub fn toggle_play_pause(&mut self) {
        self.state.playing = !self.state.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.state.muted = !self.state.muted;
    }

    /// Applies a volume slider value in percent (0–100, clamped).
    ///
    /// Dragging to zero mutes; any other value unmutes.
    pub fn set_volume(&mut self, percent: f64) {
        self.state.volume = Volume::from_percent(percent);
        // Decided on the input: tiny percentages round to a silent f32.
        self.state.muted = !(percent > 0.0);
    }

    pub fn set_playback_rate(&mut self, rate: PlaybackRate) {
        self.state.playback_rate = rate;
    }

    pub fn toggle_display_format(&mut self) {
        self.state.display_mode = self.state.display_mode.toggled();
    }

    // -------------------------------------------------------------------------
    // Seek drag
    // -------------------------------------------------------------------------

    /// The user grabbed the seek handle.
    pub fn begin_seek(&mut self) {
        self.state.seeking = true;
    }

    /// Moves the handle without commanding the player.
    pub fn seek_to(&mut self, percent: f64) {
        self.state.played = Played::from_percent(percent);
    }

    /// Releases the handle and issues exactly one fractional seek.
    pub fn commit_seek(&mut self, percent: f64, player: &mut impl PlayerTransport) {
        let played = Played::from_percent(percent);
        self.state.seeking = false;
        self.state.played = played;
        log::debug!("Commit seek at {:.1}%", played.percent());
        player.seek_to(SeekTarget::Fraction(played.value()));
    }

    /// Merges a progress report. Returns whether the position was applied.
    pub fn on_progress(&mut self, update: ProgressUpdate) -> bool {
        self.state.merge_progress(update) == MergeOutcome::Applied
    }

    // -------------------------------------------------------------------------
    // Host capabilities
    // -------------------------------------------------------------------------

    /// Toggles fullscreen on the player container.
    ///
    /// An unavailable capability is logged and otherwise ignored.
    pub fn toggle_fullscreen(&self, fullscreen: &mut impl FullscreenCapability) {
        match fullscreen.toggle() {
            Ok(active) => log::debug!("Fullscreen now {}", if active { "on" } else { "off" }),
            Err(err) => log::warn!("Fullscreen toggle ignored: {err}"),
        }
    }

    // -------------------------------------------------------------------------
    // Derived display values
    // -------------------------------------------------------------------------

    /// Value of the elapsed-time label, honoring the display mode.
    #[must_use]
    pub fn elapsed_time(&self, player: &impl PlayerTransport) -> String {
        let current = player.current_time();
        match self.state.display_mode {
            DisplayMode::Elapsed => time_format::format_opt(current),
            DisplayMode::Remaining => {
                let remaining = current.zip(player.duration()).map(|(c, d)| d - c);
                format!("-{}", time_format::format_opt(remaining))
            }
        }
    }

    #[must_use]
    pub fn total_duration(&self, player: &impl PlayerTransport) -> String {
        time_format::format_opt(player.duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ControlsConfig, PlayerConfig, TransportConfig};
    use crate::error::CapabilityError;
    use crate::test_utils::assert_abs_diff_eq;

    #[derive(Default)]
    struct RecordingPlayer {
        current: Option<f64>,
        duration: Option<f64>,
        seeks: Vec<SeekTarget>,
    }

    impl RecordingPlayer {
        fn ready(current: f64, duration: f64) -> Self {
            Self {
                current: Some(current),
                duration: Some(duration),
                seeks: Vec::new(),
            }
        }
    }

    impl PlayerTransport for RecordingPlayer {
        fn seek_to(&mut self, target: SeekTarget) {
            self.seeks.push(target);
        }

        fn current_time(&self) -> Option<f64> {
            self.current
        }

        fn duration(&self) -> Option<f64> {
            self.duration
        }
    }

    struct StubFullscreen {
        result: Result<bool, CapabilityError>,
        calls: usize,
    }

    impl FullscreenCapability for StubFullscreen {
        fn toggle(&mut self) -> Result<bool, CapabilityError> {
            self.calls += 1;
            self.result.clone()
        }
    }

    #[test]
    fn rewind_and_fast_forward_use_skip_step() {
        let controller = TransportController::default();
        let mut player = RecordingPlayer::ready(15.0, 60.0);

        controller.rewind(&mut player);
        controller.fast_forward(&mut player);

        assert_eq!(
            player.seeks,
            vec![SeekTarget::Seconds(5.0), SeekTarget::Seconds(25.0)]
        );
    }

    #[test]
    fn rewind_passes_negative_targets_through() {
        let controller = TransportController::default();
        let mut player = RecordingPlayer::ready(3.0, 60.0);
        controller.rewind(&mut player);
        assert_eq!(player.seeks, vec![SeekTarget::Seconds(-7.0)]);
    }

    #[test]
    fn skips_are_no_ops_before_ready() {
        let controller = TransportController::default();
        let mut player = RecordingPlayer::default();
        controller.rewind(&mut player);
        controller.fast_forward(&mut player);
        assert!(player.seeks.is_empty());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut controller = TransportController::default();
        controller.toggle_play_pause();
        controller.toggle_mute();
        assert!(controller.state().playing);
        assert!(controller.state().muted);
        controller.toggle_play_pause();
        assert!(!controller.state().playing);
    }

    #[test]
    fn set_volume_derives_mute_from_zero() {
        let mut controller = TransportController::default();

        controller.set_volume(0.0);
        assert!(controller.state().muted);
        assert_abs_diff_eq!(controller.state().volume.value(), 0.0);

        controller.set_volume(40.0);
        assert!(!controller.state().muted);
        assert_abs_diff_eq!(controller.state().volume.value(), 0.4);

        controller.set_volume(250.0);
        assert_abs_diff_eq!(controller.state().volume.value(), 1.0);
    }

    #[test]
    fn tiny_volume_stays_unmuted() {
        let mut controller = TransportController::default();
        controller.set_volume(1e-44);
        assert!(!controller.state().muted);

        controller.set_volume(-3.0);
        assert!(controller.state().muted);

        controller.set_volume(f64::NAN);
        assert!(controller.state().muted);
    }

    #[test]
    fn seek_drag_issues_single_fraction_command() {
        let mut controller = TransportController::default();
        let mut player = RecordingPlayer::ready(0.0, 100.0);

        controller.begin_seek();
        controller.seek_to(30.0);
        controller.seek_to(45.0);
        assert!(player.seeks.is_empty());
        assert_abs_diff_eq!(controller.state().played.value(), 0.45);

        controller.commit_seek(50.0, &mut player);
        assert!(!controller.state().seeking);
        assert_eq!(player.seeks, vec![SeekTarget::Fraction(0.5)]);
    }

    #[test]
    fn progress_is_held_back_while_seeking() {
        let mut controller = TransportController::default();
        controller.begin_seek();
        controller.seek_to(70.0);

        let applied = controller.on_progress(ProgressUpdate {
            played: 0.1,
            loaded: 0.3,
            played_seconds: 10.0,
            loaded_seconds: 30.0,
        });

        assert!(!applied);
        assert_abs_diff_eq!(controller.state().played.value(), 0.7);
        assert_abs_diff_eq!(controller.state().loaded.value(), 0.3);
    }

    #[test]
    fn elapsed_label_follows_display_mode() {
        let mut controller = TransportController::default();
        let player = RecordingPlayer::ready(65.0, 3661.0);

        assert_eq!(controller.elapsed_time(&player), "01:05");
        assert_eq!(controller.total_duration(&player), "1:01:01");

        controller.toggle_display_format();
        assert_eq!(controller.elapsed_time(&player), "-59:56");

        controller.toggle_display_format();
        assert_eq!(controller.state().display_mode, DisplayMode::Elapsed);
    }

    #[test]
    fn labels_use_placeholder_when_not_ready() {
        let mut controller = TransportController::default();
        let player = RecordingPlayer::default();
        assert_eq!(controller.elapsed_time(&player), "00:00");
        assert_eq!(controller.total_duration(&player), "00:00");
        controller.toggle_display_format();
        assert_eq!(controller.elapsed_time(&player), "-00:00");
    }

    #[test]
    fn fullscreen_errors_are_swallowed() {
        let controller = TransportController::default();
        let mut fullscreen = StubFullscreen {
            result: Err(CapabilityError::Unavailable("no window")),
            calls: 0,
        };
        controller.toggle_fullscreen(&mut fullscreen);
        assert_eq!(fullscreen.calls, 1);
    }

    #[test]
    fn with_config_applies_initial_values() {
        let config = Config {
            player: PlayerConfig {
                volume: Some(0.8),
                muted: Some(true),
                playback_rate: Some(1.5),
                ..PlayerConfig::default()
            },
            transport: TransportConfig {
                skip_step_secs: Some(5.0),
            },
            controls: ControlsConfig::default(),
        };

        let controller = TransportController::with_config(&config);
        assert_abs_diff_eq!(controller.state().volume.value(), 0.8);
        assert!(controller.state().muted);
        assert_eq!(controller.state().playback_rate, PlaybackRate::OneAndHalf);
        assert_abs_diff_eq!(controller.skip_step().value(), 5.0);
    }

    #[test]
    fn with_config_rejects_unknown_rate() {
        let mut config = Config::default();
        config.player.playback_rate = Some(3.0);
        let controller = TransportController::with_config(&config);
        assert_eq!(controller.state().playback_rate, PlaybackRate::Normal);
    }
}
