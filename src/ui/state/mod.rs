// SPDX-License-Identifier: MPL-2.0
//! UI state kept apart from the `App` struct.

pub mod controls_visibility;

pub use controls_visibility::{ControlsVisibility, Visibility};
