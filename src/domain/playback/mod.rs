// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! Value objects shared by the transport core and the view layer. They are
//! independent of any presentation or infrastructure concern.

pub mod newtypes;

pub use newtypes::{DisplayMode, PlaybackRate, Played, SkipStep, Volume};
