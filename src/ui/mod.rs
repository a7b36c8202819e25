// SPDX-License-Identifier: MPL-2.0
//! User interface components and state.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! state, build widgets, and emit messages handled by [`crate::app`].
//!
//! - [`controls`] - Overlay control bar on top of the video
//! - [`bookmarks`] - Bookmark thumbnail grid
//! - [`state`] - UI-only state machines (control bar auto-hide)
//! - [`styles`] - Widget styles
//! - [`design_tokens`] - Colors, spacing, sizes

pub mod bookmarks;
pub mod controls;
pub mod design_tokens;
pub mod state;
pub mod styles;
