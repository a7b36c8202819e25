// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler works on an [`UpdateContext`] of mutable borrows into `App`
//! so the transport controller, the player handle and the bookmark store can
//! be used together without borrowing the whole application.

use super::fullscreen::WindowFullscreen;
use super::Message;
use crate::application::port::{FrameCapture, PlayerTransport};
use crate::config::{THUMBNAIL_HEIGHT, THUMBNAIL_WIDTH};
use crate::error::{CaptureError, PlayerError};
use crate::media::{BookmarkStore, ThumbnailCapture};
use crate::ui::controls;
use crate::ui::state::ControlsVisibility;
use crate::video_player::{
    DecodedFrame, PlaybackMessage, PlayerHandle, PlayerProps, TransportController,
};
use iced::widget::image;
use iced::Task;

pub(super) struct UpdateContext<'a> {
    pub transport: &'a mut TransportController,
    pub player: &'a mut PlayerHandle,
    pub controls: &'a mut ControlsVisibility,
    pub bookmarks: &'a mut BookmarkStore,
    pub bookmark_images: &'a mut Vec<image::Handle>,
    pub current_frame: &'a mut Option<DecodedFrame>,
    pub frame_handle: &'a mut Option<image::Handle>,
    pub fullscreen: &'a mut WindowFullscreen,
    pub rate_menu_open: &'a mut bool,
    pub last_error: &'a mut Option<String>,
    pub pushed_props: &'a mut Option<PlayerProps>,
}

pub(super) fn handle_controls(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::Bookmark => add_bookmark(ctx),
        controls::Message::Rewind => ctx.transport.rewind(ctx.player),
        controls::Message::FastForward => ctx.transport.fast_forward(ctx.player),
        controls::Message::TogglePlayPause => ctx.transport.toggle_play_pause(),
        controls::Message::SeekChanged(percent) => {
            if !ctx.transport.state().seeking {
                ctx.transport.begin_seek();
            }
            ctx.transport.seek_to(percent);
        }
        controls::Message::SeekReleased => {
            let percent = ctx.transport.state().played.percent();
            ctx.transport.commit_seek(percent, ctx.player);
        }
        controls::Message::ToggleMute => ctx.transport.toggle_mute(),
        controls::Message::VolumeChanged(percent) => ctx.transport.set_volume(percent),
        controls::Message::ToggleDisplayFormat => ctx.transport.toggle_display_format(),
        controls::Message::ToggleRateMenu => *ctx.rate_menu_open = !*ctx.rate_menu_open,
        controls::Message::RateSelected(rate) => {
            ctx.transport.set_playback_rate(rate);
            *ctx.rate_menu_open = false;
        }
        controls::Message::ToggleFullscreen => {
            ctx.transport.toggle_fullscreen(ctx.fullscreen);
            return ctx.fullscreen.take_task();
        }
    }
    Task::none()
}

pub(super) fn handle_playback(ctx: &mut UpdateContext<'_>, message: PlaybackMessage) {
    match message {
        PlaybackMessage::Started(handle) => {
            // Replacing the handle does not end the old decoder task.
            if ctx.player.is_connected() {
                if let Err(e) = ctx.player.stop() {
                    log::debug!("Previous decoder already gone: {e}");
                }
            }
            *ctx.player = handle;
            // Force a full props push to the new decoder.
            *ctx.pushed_props = None;
        }
        PlaybackMessage::Ready {
            duration_secs,
            width,
            height,
        } => {
            log::info!("Player ready: {width}x{height}, {duration_secs:.1}s");
            *ctx.last_error = None;
        }
        PlaybackMessage::Frame(frame) => {
            *ctx.frame_handle = Some(image::Handle::from_rgba(
                frame.width,
                frame.height,
                frame.rgba_data.as_ref().clone(),
            ));
            *ctx.current_frame = Some(frame);
        }
        PlaybackMessage::Progress(update) => {
            ctx.transport.on_progress(update);
            ctx.controls.on_progress_tick();
        }
        PlaybackMessage::EndOfStream => {
            if ctx.transport.state().playing {
                ctx.transport.toggle_play_pause();
            }
        }
        PlaybackMessage::Error(msg) => {
            let error = PlayerError::from_message(&msg);
            log::error!("Player error: {error}");
            *ctx.last_error = Some(error.to_string());
        }
    }
}

pub(super) fn handle_bookmark_clicked(ctx: &mut UpdateContext<'_>, index: usize) {
    ctx.bookmarks
        .seek_to_bookmark(index, ctx.transport, &mut *ctx.player);
}

/// Captures the current frame and appends a bookmark.
///
/// Without a decoded frame or a known position the click is ignored.
fn add_bookmark(ctx: &mut UpdateContext<'_>) {
    let Some(current_time) = ctx.player.current_time() else {
        log::warn!("Bookmark ignored: player not ready");
        return;
    };

    let capture = ctx
        .current_frame
        .as_ref()
        .ok_or(CaptureError::NoFrame)
        .and_then(|frame| {
            ThumbnailCapture.capture(&frame.source(), THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT)
        });

    match capture {
        Ok(thumbnail) => {
            let handle = image::Handle::from_bytes(thumbnail.bytes().to_vec());
            ctx.bookmarks.add(current_time, thumbnail);
            ctx.bookmark_images.push(handle);
        }
        Err(err) => log::warn!("Bookmark ignored: {err}"),
    }
}

/// Pushes changed props to the embedded player.
///
/// Video decoding has no audio sink, so `muted` and `volume` are only logged.
pub(super) fn sync_player_props(
    transport: &TransportController,
    player: &PlayerHandle,
    pushed: &mut Option<PlayerProps>,
) {
    if !player.is_connected() {
        return;
    }

    let props = transport.props();
    let previous = *pushed;
    if previous == Some(props) {
        return;
    }

    if previous.map(|p| (p.muted, p.volume)) != Some((props.muted, props.volume)) {
        log::debug!(
            "Audio props: muted={} volume={:.2}",
            props.muted,
            props.volume.value()
        );
    }

    match push_props(player, previous, props) {
        Ok(()) => *pushed = Some(props),
        Err(err) => log::warn!("Could not update player: {err}"),
    }
}

fn push_props(
    player: &PlayerHandle,
    previous: Option<PlayerProps>,
    props: PlayerProps,
) -> Result<(), PlayerError> {
    if previous.map(|p| p.playing) != Some(props.playing) {
        if props.playing {
            player.play()?;
        } else {
            player.pause()?;
        }
    }
    if previous.map(|p| p.playback_rate) != Some(props.playback_rate) {
        player.set_rate(props.playback_rate)?;
    }
    Ok(())
}
