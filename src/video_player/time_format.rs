// SPDX-License-Identifier: MPL-2.0
//! Time display formatting for the control bar and bookmark labels.
//!
//! A duration is read as a UTC timestamp (milliseconds since the epoch) and
//! its calendar hour, minute and second are printed, so values wrap at
//! 24 hours.
//!
//! # Examples
//!
//! ```
//! use iced_reel::video_player::time_format::format;
//!
//! assert_eq!(format(65.0), "01:05");
//! assert_eq!(format(3661.0), "1:01:01");
//! assert_eq!(format(f64::NAN), "00:00");
//! ```

use crate::domain::playback::PlaybackRate;
use chrono::{DateTime, Timelike};

/// Shown whenever there is no valid time to display.
pub const PLACEHOLDER: &str = "00:00";

/// Milliseconds per second as f64 for calculations.
const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Formats a duration in seconds as `MM:SS`, or `H:MM:SS` once hours are non-zero.
///
/// Non-finite input returns [`PLACEHOLDER`].
#[must_use]
pub fn format(seconds: f64) -> String {
    if !seconds.is_finite() {
        return PLACEHOLDER.to_string();
    }

    // Saturating cast; timestamps chrono cannot represent fall through to the placeholder.
    let millis = (seconds * MILLIS_PER_SECOND).trunc() as i64;
    let Some(date) = DateTime::from_timestamp_millis(millis) else {
        return PLACEHOLDER.to_string();
    };

    let hours = date.hour();
    let minutes = date.minute();
    let secs = date.second();

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Formats an optional duration; `None` (player not ready) returns [`PLACEHOLDER`].
#[must_use]
pub fn format_opt(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| PLACEHOLDER.to_string(), format)
}

/// Formats the playback-rate menu label, e.g. `1.5X`.
#[must_use]
pub fn format_rate(rate: PlaybackRate) -> String {
    format!("{}X", rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_numbers_return_placeholder() {
        assert_eq!(format(f64::NAN), "00:00");
        assert_eq!(format(f64::INFINITY), "00:00");
        assert_eq!(format(f64::NEG_INFINITY), "00:00");
        assert_eq!(format_opt(None), "00:00");
    }

    #[test]
    fn formats_minutes_and_seconds_padded() {
        assert_eq!(format(0.0), "00:00");
        assert_eq!(format(5.0), "00:05");
        assert_eq!(format(65.0), "01:05");
        assert_eq!(format(599.0), "09:59");
        assert_eq!(format(3599.0), "59:59");
    }

    #[test]
    fn formats_hours_unpadded_with_padded_minutes() {
        assert_eq!(format(3600.0), "1:00:00");
        assert_eq!(format(3661.0), "1:01:01");
        assert_eq!(format(36_000.0 + 9.0 * 60.0 + 7.0), "10:09:07");
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        assert_eq!(format(65.999), "01:05");
        assert_eq!(format(0.4), "00:00");
    }

    #[test]
    fn calendar_fields_wrap_past_a_day() {
        assert_eq!(format(86_400.0), "00:00");
        assert_eq!(format(86_400.0 + 3661.0), "1:01:01");
    }

    #[test]
    fn negative_values_read_as_previous_day() {
        assert_eq!(format(-5.0), "23:59:55");
    }

    #[test]
    fn unrepresentable_timestamps_return_placeholder() {
        assert_eq!(format(1e300), "00:00");
        assert_eq!(format(-1e300), "00:00");
    }

    #[test]
    fn format_opt_formats_present_values() {
        assert_eq!(format_opt(Some(3661.0)), "1:01:01");
    }

    #[test]
    fn rate_labels() {
        assert_eq!(format_rate(PlaybackRate::Half), "0.5X");
        assert_eq!(format_rate(PlaybackRate::Normal), "1X");
        assert_eq!(format_rate(PlaybackRate::OneAndHalf), "1.5X");
    }
}
