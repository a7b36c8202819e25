// SPDX-License-Identifier: MPL-2.0
//! Media sources, bookmarks and frame capture.

pub mod bookmarks;
pub mod thumbnail;
pub mod video;

pub use bookmarks::{Bookmark, BookmarkStore};
pub use thumbnail::ThumbnailCapture;
pub use video::{init_ffmpeg, MediaSource};
