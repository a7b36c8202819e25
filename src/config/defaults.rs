// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume applied when the player mounts (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.5;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

// ==========================================================================
// Playback Rate Defaults
// ==========================================================================

/// Rate applied when the player mounts.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

// ==========================================================================
// Transport Defaults
// ==========================================================================

/// Rewind / fast-forward distance in seconds.
pub const DEFAULT_SKIP_STEP_SECS: f64 = 10.0;

/// Minimum rewind / fast-forward distance in seconds.
pub const MIN_SKIP_STEP_SECS: f64 = 1.0;

/// Maximum rewind / fast-forward distance in seconds.
pub const MAX_SKIP_STEP_SECS: f64 = 60.0;

/// Interval between two progress reports of the embedded player.
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 1000;

/// Lower bound for the progress interval, below which the UI would be flooded.
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Overlay Controls Defaults
// ==========================================================================

/// Idle progress ticks tolerated before the control bar hides.
pub const DEFAULT_IDLE_TICKS: u32 = 3;

// ==========================================================================
// Bookmark Defaults
// ==========================================================================

/// Bookmark thumbnail width in pixels.
pub const THUMBNAIL_WIDTH: u32 = 160;

/// Bookmark thumbnail height in pixels.
pub const THUMBNAIL_HEIGHT: u32 = 90;
