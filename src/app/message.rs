// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::controls;
use crate::video_player::PlaybackMessage;
use iced::window;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Control bar interaction.
    Controls(controls::Message),
    /// A bookmark card was clicked.
    BookmarkClicked(usize),
    /// Pointer moved over the player area.
    PointerMoved,
    /// Event from the embedded player.
    Playback(PlaybackMessage),
    /// First window event seen; carries the main window id.
    WindowOpened(window::Id),
    /// Close the error banner.
    DismissError,
}

/// Runtime flags passed from `main.rs` into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File path or URL given on the command line.
    pub source: Option<String>,
    /// Optional config directory override, from `--config-dir`.
    pub config_dir: Option<String>,
}
