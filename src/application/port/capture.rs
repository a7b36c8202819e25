// SPDX-License-Identifier: MPL-2.0
//! Frame capture port definition.

use crate::domain::{FrameSource, Thumbnail};
use crate::error::CaptureError;

/// Turns a decoded frame into an encoded thumbnail of fixed dimensions.
///
/// Implementations run synchronously on the UI thread and must stay within
/// one frame interval for common source sizes.
pub trait FrameCapture {
    /// Captures `frame` scaled to exactly `width × height`.
    ///
    /// # Errors
    ///
    /// Returns a [`CaptureError`] if the frame is malformed or encoding fails.
    fn capture(
        &self,
        frame: &FrameSource,
        width: u32,
        height: u32,
    ) -> Result<Thumbnail, CaptureError>;
}
