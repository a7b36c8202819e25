// SPDX-License-Identifier: MPL-2.0
//! Embedded player port definitions.
//!
//! The transport core never decodes anything itself. It issues seek commands
//! and reads the live transport clock through [`PlayerTransport`], and asks
//! the host to switch the player container to fullscreen through
//! [`FullscreenCapability`].

use crate::error::CapabilityError;

/// Where a seek command should land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekTarget {
    /// Absolute position in seconds. Out-of-range values are clamped by the player.
    Seconds(f64),
    /// Fraction of the total duration (0.0–1.0).
    Fraction(f64),
}

impl SeekTarget {
    /// Resolves the target to seconds for a known duration, clamped to `[0, duration]`.
    #[must_use]
    pub fn resolve(self, duration_secs: f64) -> f64 {
        let duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        let secs = match self {
            SeekTarget::Seconds(secs) => secs,
            SeekTarget::Fraction(fraction) => fraction * duration,
        };
        if secs.is_nan() {
            0.0
        } else {
            secs.clamp(0.0, duration)
        }
    }
}

/// Command/query surface of the embedded player.
///
/// Both queries return `None` until media is loaded. Commands issued before
/// that are the implementation's business: they may be dropped or buffered.
pub trait PlayerTransport {
    /// Seeks the player. Fire-and-forget: the resulting position is reported
    /// through the next progress update.
    fn seek_to(&mut self, target: SeekTarget);

    /// Current playback position in seconds.
    fn current_time(&self) -> Option<f64>;

    /// Total duration in seconds.
    fn duration(&self) -> Option<f64>;
}

/// Host capability that toggles fullscreen on the player container.
pub trait FullscreenCapability {
    /// Toggles fullscreen and returns whether fullscreen is now active.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::Unavailable`] when the host cannot switch
    /// modes (for instance before the window exists).
    fn toggle(&mut self) -> Result<bool, CapabilityError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn _assert_object_safe(_: &dyn PlayerTransport, _: &dyn FullscreenCapability) {}

    #[test]
    fn resolve_clamps_seconds_into_duration() {
        assert_abs_diff_eq!(SeekTarget::Seconds(-5.0).resolve(60.0), 0.0);
        assert_abs_diff_eq!(SeekTarget::Seconds(75.0).resolve(60.0), 60.0);
        assert_abs_diff_eq!(SeekTarget::Seconds(12.5).resolve(60.0), 12.5);
    }

    #[test]
    fn resolve_scales_fraction_by_duration() {
        assert_abs_diff_eq!(SeekTarget::Fraction(0.5).resolve(120.0), 60.0);
        assert_abs_diff_eq!(SeekTarget::Fraction(1.5).resolve(120.0), 120.0);
    }

    #[test]
    fn resolve_handles_unknown_duration() {
        assert_abs_diff_eq!(SeekTarget::Fraction(0.5).resolve(f64::NAN), 0.0);
        assert_abs_diff_eq!(SeekTarget::Seconds(f64::NAN).resolve(10.0), 0.0);
    }
}
