// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` is a lightweight video player built with the Iced GUI framework.
//!
//! Transport logic (play/pause, skip, seek drag, volume, rate, elapsed or
//! remaining time) lives in [`video_player::TransportController`] and talks to
//! the decoder through the [`application::port::PlayerTransport`] trait.
//! Bookmarks capture a thumbnail of the current frame and jump back to it.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
