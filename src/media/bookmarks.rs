// SPDX-License-Identifier: MPL-2.0
//! In-memory bookmarks of playback positions.
//!
//! A bookmark records where playback was, a label for it and a thumbnail of
//! the frame on screen. The store is append-only for the lifetime of the
//! session; indices returned by [`BookmarkStore::add`] never shift.

use crate::application::port::PlayerTransport;
use crate::domain::Thumbnail;
use crate::video_player::time_format;
use crate::video_player::TransportController;

#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    time_seconds: f64,
    label: String,
    thumbnail: Thumbnail,
}

impl Bookmark {
    fn new(time_seconds: f64, thumbnail: Thumbnail) -> Self {
        Self {
            time_seconds,
            label: time_format::format(time_seconds),
            thumbnail,
        }
    }

    /// Playback position at capture, in seconds.
    #[must_use]
    pub fn time_seconds(&self) -> f64 {
        self.time_seconds
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bookmark for `current_time`. Identical timestamps are kept
    /// as separate entries.
    pub fn add(&mut self, current_time: f64, thumbnail: Thumbnail) -> &Bookmark {
        let index = self.bookmarks.len();
        self.bookmarks.push(Bookmark::new(current_time, thumbnail));
        log::info!("Bookmark added at {}", self.bookmarks[index].label);
        &self.bookmarks[index]
    }

    /// Seeks to the bookmark at `index` through the controller's absolute
    /// seek command. Returns `false` (and sends nothing) for an unknown index.
    pub fn seek_to_bookmark(
        &self,
        index: usize,
        controller: &TransportController,
        player: &mut impl PlayerTransport,
    ) -> bool {
        match self.bookmarks.get(index) {
            Some(bookmark) => {
                controller.seek_to_seconds(bookmark.time_seconds, player);
                true
            }
            None => {
                log::debug!("No bookmark at index {index}");
                false
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SeekTarget;

    #[derive(Default)]
    struct RecordingPlayer {
        seeks: Vec<SeekTarget>,
    }

    impl PlayerTransport for RecordingPlayer {
        fn seek_to(&mut self, target: SeekTarget) {
            self.seeks.push(target);
        }

        fn current_time(&self) -> Option<f64> {
            None
        }

        fn duration(&self) -> Option<f64> {
            None
        }
    }

    fn thumb() -> Thumbnail {
        Thumbnail::new(vec![1, 2, 3], 160, 90)
    }

    #[test]
    fn add_appends_in_call_order_with_formatted_labels() {
        let mut store = BookmarkStore::new();
        assert_eq!(store.add(65.0, thumb()).label(), "01:05");
        store.add(3661.0, thumb());
        store.add(2.5, thumb());

        let labels: Vec<_> = store.iter().map(Bookmark::label).collect();
        assert_eq!(labels, vec!["01:05", "1:01:01", "00:02"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn identical_timestamps_are_not_merged() {
        let mut store = BookmarkStore::new();
        store.add(10.0, thumb());
        store.add(10.0, thumb());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn seek_to_bookmark_issues_absolute_seek() {
        let mut store = BookmarkStore::new();
        store.add(42.0, thumb());
        let controller = TransportController::default();
        let mut player = RecordingPlayer::default();

        assert!(store.seek_to_bookmark(0, &controller, &mut player));
        assert_eq!(player.seeks, vec![SeekTarget::Seconds(42.0)]);
    }

    #[test]
    fn unknown_index_sends_nothing() {
        let store = BookmarkStore::new();
        let controller = TransportController::default();
        let mut player = RecordingPlayer::default();

        assert!(!store.seek_to_bookmark(3, &controller, &mut player));
        assert!(player.seeks.is_empty());
        assert!(store.is_empty());
        assert!(store.get(0).is_none());
    }
}
