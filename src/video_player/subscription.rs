// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! Connects the [`AsyncDecoder`] to the UI event loop. The first message of a
//! session is [`PlaybackMessage::Started`], carrying the [`PlayerHandle`] the
//! application uses to command the decoder and read its clock.

use super::clock::TransportClock;
use super::decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
use super::state::ProgressUpdate;
use crate::application::port::{PlayerTransport, SeekTarget};
use crate::domain::playback::PlaybackRate;
use crate::error::PlayerError;
use crate::media::video::MediaSource;
use iced::futures::SinkExt;
use iced::stream;
use std::time::Duration;
use tokio::sync::mpsc;

/// Command/query handle on a running decoder.
///
/// The default handle is disconnected: queries return `None` and commands
/// are dropped with a debug log.
#[derive(Clone, Default)]
pub struct PlayerHandle {
    command_tx: Option<mpsc::UnboundedSender<DecoderCommand>>,
    clock: TransportClock,
}

impl PlayerHandle {
    pub(crate) fn new(command_tx: mpsc::UnboundedSender<DecoderCommand>, clock: TransportClock) -> Self {
        Self {
            command_tx: Some(command_tx),
            clock,
        }
    }

    /// Sends a command to the decoder.
    pub fn send(&self, command: DecoderCommand) -> Result<(), PlayerError> {
        match &self.command_tx {
            Some(tx) => tx.send(command).map_err(|_| PlayerError::NotRunning),
            None => {
                log::debug!("Player not started, dropping {:?}", command);
                Ok(())
            }
        }
    }

    pub fn play(&self) -> Result<(), PlayerError> {
        self.send(DecoderCommand::Play)
    }

    pub fn pause(&self) -> Result<(), PlayerError> {
        self.send(DecoderCommand::Pause)
    }

    pub fn set_rate(&self, rate: PlaybackRate) -> Result<(), PlayerError> {
        self.send(DecoderCommand::SetRate(rate.value()))
    }

    pub fn stop(&self) -> Result<(), PlayerError> {
        self.send(DecoderCommand::Stop)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.command_tx.is_some()
    }
}

impl PlayerTransport for PlayerHandle {
    fn seek_to(&mut self, target: SeekTarget) {
        if let Err(e) = self.send(DecoderCommand::Seek(target)) {
            log::warn!("Seek dropped: {}", e);
        }
    }

    fn current_time(&self) -> Option<f64> {
        self.clock.current_time()
    }

    fn duration(&self) -> Option<f64> {
        self.clock.duration()
    }
}

impl std::fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("connected", &self.command_tx.is_some())
            .field("ready", &self.clock.is_ready())
            .finish()
    }
}

/// Messages emitted by the video playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Subscription started, provides the handle for play/pause/seek.
    Started(PlayerHandle),

    /// Media opened, duration known.
    Ready {
        duration_secs: f64,
        width: u32,
        height: u32,
    },

    /// A new frame is ready for display.
    Frame(DecodedFrame),

    /// Progress callback payload.
    Progress(ProgressUpdate),

    /// Playback reached the end.
    EndOfStream,

    /// An error occurred.
    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::Ready {
                duration_secs,
                width,
                height,
            } => PlaybackMessage::Ready {
                duration_secs,
                width,
                height,
            },
            DecoderEvent::FrameReady(frame) => PlaybackMessage::Frame(frame),
            DecoderEvent::Progress(update) => PlaybackMessage::Progress(update),
            DecoderEvent::EndOfStream => PlaybackMessage::EndOfStream,
            DecoderEvent::Error(msg) => PlaybackMessage::Error(msg),
        }
    }
}

/// Creates a video playback subscription.
///
/// The source keys the subscription: a new source starts a new decoder.
/// `progress_interval` is the cadence of [`PlaybackMessage::Progress`]
/// while playing.
pub fn video_playback(
    source: MediaSource,
    progress_interval: Duration,
) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with_id(
        source.clone(),
        stream::channel(100, move |mut output| async move {
            match AsyncDecoder::new(&source, progress_interval) {
                Ok(mut decoder) => {
                    let handle = PlayerHandle::new(decoder.command_sender(), decoder.clock());
                    let _ = output.send(PlaybackMessage::Started(handle)).await;

                    while let Some(event) = decoder.recv_event().await {
                        if output.send(PlaybackMessage::from(event)).await.is_err() {
                            break;
                        }
                    }
                    log::debug!("Playback of {} finished", source);
                }
                Err(e) => {
                    log::error!("Cannot play {}: {}", source, e);
                    let _ = output.send(PlaybackMessage::Error(e.to_string())).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}
