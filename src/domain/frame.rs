// SPDX-License-Identifier: MPL-2.0
//! Frame and thumbnail value objects.

use std::sync::Arc;

/// A decoded video frame in RGBA layout, as handed out by the embedded player.
///
/// Pixel data is shared so that keeping the latest frame around for bookmark
/// capture does not copy it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSource {
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl FrameSource {
    #[must_use]
    pub fn new(rgba_data: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self {
            rgba_data,
            width,
            height,
        }
    }

    /// Returns true if the buffer holds exactly `width × height` RGBA pixels.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.rgba_data.len() as u64 == u64::from(self.width) * u64::from(self.height) * 4
    }
}

/// An encoded (PNG) snapshot of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    encoded: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl Thumbnail {
    #[must_use]
    pub fn new(encoded: impl Into<Arc<[u8]>>, width: u32, height: u32) -> Self {
        Self {
            encoded: encoded.into(),
            width,
            height,
        }
    }

    /// Encoded image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.encoded
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_consistency_checks_buffer_length() {
        let ok = FrameSource::new(Arc::new(vec![0; 2 * 3 * 4]), 2, 3);
        assert!(ok.is_consistent());

        let short = FrameSource::new(Arc::new(vec![0; 5]), 2, 3);
        assert!(!short.is_consistent());

        let empty = FrameSource::new(Arc::new(Vec::new()), 0, 0);
        assert!(!empty.is_consistent());
    }

    #[test]
    fn thumbnail_clones_share_bytes() {
        let thumb = Thumbnail::new(vec![1u8, 2, 3], 160, 90);
        let copy = thumb.clone();
        assert_eq!(copy.bytes(), &[1, 2, 3]);
        assert_eq!((copy.width(), copy.height()), (160, 90));
        assert!(std::ptr::eq(thumb.bytes().as_ptr(), copy.bytes().as_ptr()));
    }
}
