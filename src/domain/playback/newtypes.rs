// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for transport values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_SKIP_STEP_SECS, DEFAULT_VOLUME, MAX_SKIP_STEP_SECS, MAX_VOLUME, MIN_SKIP_STEP_SECS,
    MIN_VOLUME,
};
use std::fmt;

/// Slider percentages are clamped to this range before conversion.
const PERCENT_MAX: f64 = 100.0;

fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, PERCENT_MAX)
    }
}

// =============================================================================
// Volume
// =============================================================================

/// Volume level, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(MIN_VOLUME);
        }
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Creates a volume from a slider percentage (0–100).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self::new((clamp_percent(percent) / PERCENT_MAX) as f32)
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the volume as a slider percentage.
    #[must_use]
    pub fn percent(self) -> f64 {
        f64::from(self.0) * PERCENT_MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// One of the rates offered by the playback-rate menu.
///
/// The set is closed, so an arbitrary rate cannot reach the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackRate {
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// All rates, slowest first.
    pub const ALL: [PlaybackRate; 4] = [
        PlaybackRate::Half,
        PlaybackRate::Normal,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    /// Returns the speed multiplier.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Maps a multiplier back to a menu entry, `None` if it is not offered.
    #[must_use]
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rate| (rate.value() - value).abs() < 1e-9)
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// =============================================================================
// Played
// =============================================================================

/// Fractional position within the total duration (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Played(f64);

impl Played {
    /// Creates a fraction, clamping to valid range. NaN reads as the start.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Creates a fraction from a slider percentage (0–100).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self::new(clamp_percent(percent) / PERCENT_MAX)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the fraction as a slider percentage.
    #[must_use]
    pub fn percent(self) -> f64 {
        self.0 * PERCENT_MAX
    }
}

// =============================================================================
// DisplayMode
// =============================================================================

/// How the elapsed-time label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Time since the start.
    #[default]
    Elapsed,
    /// Time left until the end, shown with a leading minus.
    Remaining,
}

impl DisplayMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Elapsed => DisplayMode::Remaining,
            DisplayMode::Remaining => DisplayMode::Elapsed,
        }
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Rewind / fast-forward distance in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        if secs.is_nan() {
            return Self::default();
        }
        Self(secs.clamp(MIN_SKIP_STEP_SECS, MAX_SKIP_STEP_SECS))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(DEFAULT_SKIP_STEP_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_clamps_to_valid_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), MIN_VOLUME);
        assert_abs_diff_eq!(Volume::new(2.0).value(), MAX_VOLUME);
        assert_abs_diff_eq!(Volume::new(0.3).value(), 0.3);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), MIN_VOLUME);
    }

    #[test]
    fn volume_from_percent_divides_by_hundred() {
        assert_abs_diff_eq!(Volume::from_percent(0.0).value(), 0.0);
        assert_abs_diff_eq!(Volume::from_percent(37.0).value(), 0.37, epsilon = 1e-6);
        assert_abs_diff_eq!(Volume::from_percent(100.0).value(), 1.0);
        assert_abs_diff_eq!(Volume::from_percent(250.0).value(), 1.0);
    }

    #[test]
    fn volume_default() {
        assert_abs_diff_eq!(Volume::default().value(), DEFAULT_VOLUME);
    }

    #[test]
    fn playback_rates_are_ordered_and_closed() {
        let values: Vec<f64> = PlaybackRate::ALL.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![0.5, 1.0, 1.5, 2.0]);
        assert_eq!(PlaybackRate::from_value(1.5), Some(PlaybackRate::OneAndHalf));
        assert_eq!(PlaybackRate::from_value(3.0), None);
        assert_eq!(PlaybackRate::default(), PlaybackRate::Normal);
    }

    #[test]
    fn playback_rate_display_matches_menu_labels() {
        assert_eq!(PlaybackRate::Half.to_string(), "0.5");
        assert_eq!(PlaybackRate::Normal.to_string(), "1");
        assert_eq!(PlaybackRate::Double.to_string(), "2");
    }

    #[test]
    fn played_clamps_and_converts_percent() {
        assert_abs_diff_eq!(Played::new(1.7).value(), 1.0);
        assert_abs_diff_eq!(Played::new(-0.2).value(), 0.0);
        assert_abs_diff_eq!(Played::new(f64::NAN).value(), 0.0);
        assert_abs_diff_eq!(Played::from_percent(42.0).value(), 0.42);
        assert_abs_diff_eq!(Played::new(0.25).percent(), 25.0);
    }

    #[test]
    fn display_mode_toggle_is_involution() {
        let mode = DisplayMode::default();
        assert_eq!(mode, DisplayMode::Elapsed);
        assert_eq!(mode.toggled(), DisplayMode::Remaining);
        assert_eq!(mode.toggled().toggled(), mode);
    }

    #[test]
    fn skip_step_clamps() {
        assert_abs_diff_eq!(SkipStep::default().value(), DEFAULT_SKIP_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::new(0.0).value(), MIN_SKIP_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::new(1000.0).value(), MAX_SKIP_STEP_SECS);
        assert_abs_diff_eq!(SkipStep::new(f64::NAN).value(), DEFAULT_SKIP_STEP_SECS);
    }
}
