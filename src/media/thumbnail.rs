// SPDX-License-Identifier: MPL-2.0
//! Bookmark thumbnail capture.
//!
//! Scales the current RGBA frame to a fixed size and encodes it as PNG using
//! the `image` crate. The aspect ratio is not preserved: the frame is
//! stretched to fill the thumbnail, like drawing it into a fixed canvas.

use crate::application::port::FrameCapture;
use crate::domain::{FrameSource, Thumbnail};
use crate::error::CaptureError;
use image_rs::imageops::{self, FilterType};
use image_rs::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use std::io::Cursor;

/// [`FrameCapture`] backed by `image`: triangle-filter resize, PNG output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThumbnailCapture;

impl FrameCapture for ThumbnailCapture {
    fn capture(
        &self,
        frame: &FrameSource,
        width: u32,
        height: u32,
    ) -> Result<Thumbnail, CaptureError> {
        if !frame.is_consistent() || width == 0 || height == 0 {
            return Err(CaptureError::InvalidFrame {
                width: frame.width,
                height: frame.height,
                len: frame.rgba_data.len(),
            });
        }

        let source = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
            frame.width,
            frame.height,
            frame.rgba_data.as_slice(),
        )
        .ok_or(CaptureError::InvalidFrame {
            width: frame.width,
            height: frame.height,
            len: frame.rgba_data.len(),
        })?;

        let scaled = imageops::resize(&source, width, height, FilterType::Triangle);

        let mut encoded = Vec::new();
        DynamicImage::ImageRgba8(scaled)
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .map_err(|e| CaptureError::Encode(e.to_string()))?;

        Ok(Thumbnail::new(encoded, width, height))
    }
}
