// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::media::MediaSource;
use crate::video_player::video_playback;
use iced::{event, Subscription};
use std::time::Duration;

/// Reports the main window id from the first window events.
///
/// Fullscreen switching needs the id; the update loop keeps the first one.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(
            iced::window::Event::Opened { .. }
            | iced::window::Event::Resized(_)
            | iced::window::Event::Focused,
        ) => Some(Message::WindowOpened(window_id)),
        _ => None,
    })
}

/// Creates the video playback subscription for the current source, if any.
pub fn create_video_subscription(
    source: Option<&MediaSource>,
    progress_interval: Duration,
) -> Subscription<Message> {
    match source {
        Some(source) => {
            video_playback(source.clone(), progress_interval).map(Message::Playback)
        }
        None => Subscription::none(),
    }
}
