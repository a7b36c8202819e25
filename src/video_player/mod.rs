// SPDX-License-Identifier: MPL-2.0
//! Video playback for IcedReel.
//!
//! The transport core (`state`, `transport`, `time_format`) is plain Rust and
//! knows nothing about FFmpeg or iced. The embedded player (`decoder`,
//! `clock`, `subscription`) decodes with FFmpeg on a blocking Tokio task and
//! feeds the UI through an iced subscription.

pub mod clock;
mod decoder;
pub mod state;
pub mod subscription;
pub mod time_format;
pub mod transport;

pub use clock::TransportClock;
pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use state::{MergeOutcome, PlaybackState, PlayerProps, ProgressUpdate};
pub use subscription::{video_playback, PlaybackMessage, PlayerHandle};
pub use transport::TransportController;
