// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value objects with no dependency on `iced` or FFmpeg.

pub mod frame;
pub mod playback;

pub use frame::{FrameSource, Thumbnail};
