// SPDX-License-Identifier: MPL-2.0
//! Auto-hide state of the overlay control bar.
//!
//! The bar hides after a number of idle progress ticks and comes back on any
//! pointer movement over the player. Ticks are counted rather than timed so
//! the cadence follows the player's progress interval.
//!
//! # Example
//!
//! ```
//! use iced_reel::ui::state::ControlsVisibility;
//!
//! let mut controls = ControlsVisibility::new(3);
//! for _ in 0..4 {
//!     controls.on_progress_tick();
//! }
//! assert!(!controls.is_visible());
//!
//! controls.on_pointer_moved();
//! assert!(controls.is_visible());
//! ```

use crate::config::DEFAULT_IDLE_TICKS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlsVisibility {
    visibility: Visibility,
    idle_ticks: u32,
    threshold: u32,
}

impl ControlsVisibility {
    /// Creates a visible bar that hides once more than `threshold` idle
    /// ticks have been counted.
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        Self {
            visibility: Visibility::Visible,
            idle_ticks: 0,
            threshold,
        }
    }

    pub fn on_pointer_moved(&mut self) {
        self.visibility = Visibility::Visible;
        self.idle_ticks = 0;
    }

    /// Counts one idle tick; hidden bars ignore ticks.
    pub fn on_progress_tick(&mut self) {
        if self.visibility == Visibility::Hidden {
            return;
        }
        self.idle_ticks += 1;
        if self.idle_ticks > self.threshold {
            self.visibility = Visibility::Hidden;
            self.idle_ticks = 0;
        }
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    #[must_use]
    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible() {
        let controls = ControlsVisibility::default();
        assert!(controls.is_visible());
        assert_eq!(controls.idle_ticks(), 0);
        assert_eq!(controls.threshold(), 3);
    }

    #[test]
    fn hides_after_threshold_is_exceeded() {
        let mut controls = ControlsVisibility::default();
        for _ in 0..3 {
            controls.on_progress_tick();
        }
        assert!(controls.is_visible());
        assert_eq!(controls.idle_ticks(), 3);

        controls.on_progress_tick();
        assert_eq!(controls.visibility(), Visibility::Hidden);
        assert_eq!(controls.idle_ticks(), 0);
    }

    #[test]
    fn hidden_ignores_ticks() {
        let mut controls = ControlsVisibility::new(0);
        controls.on_progress_tick();
        assert!(!controls.is_visible());
        controls.on_progress_tick();
        assert_eq!(controls.idle_ticks(), 0);
        assert!(!controls.is_visible());
    }

    #[test]
    fn pointer_move_resets_counter() {
        let mut controls = ControlsVisibility::default();
        controls.on_progress_tick();
        controls.on_progress_tick();
        controls.on_pointer_moved();
        assert_eq!(controls.idle_ticks(), 0);

        for _ in 0..4 {
            controls.on_progress_tick();
        }
        controls.on_pointer_moved();
        assert!(controls.is_visible());
        assert_eq!(controls.idle_ticks(), 0);
    }

    #[test]
    fn instances_are_independent() {
        let mut first = ControlsVisibility::default();
        let second = ControlsVisibility::default();
        for _ in 0..4 {
            first.on_progress_tick();
        }
        assert!(!first.is_visible());
        assert!(second.is_visible());
    }
}
