// SPDX-License-Identifier: MPL-2.0
//! Video source handling and FFmpeg initialization.

use crate::error::{Error, PlayerError, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Once;

/// Static flag to ensure FFmpeg is initialized only once.
static FFMPEG_INIT: Once = Once::new();

/// Initialize FFmpeg with appropriate log level.
///
/// Safe to call multiple times. Also brings up the network layer so that
/// HTTP(S) sources can be opened, and sets the FFmpeg log level to ERROR so
/// container warnings do not flood stderr.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Player(PlayerError::Other(format!(
                "FFmpeg initialization failed: {e}"
            ))));
            return;
        }
        ffmpeg_next::format::network::init();

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Where the player reads media from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaSource {
    /// Local file.
    File(PathBuf),
    /// Anything FFmpeg can open by URL (`http://`, `https://`, `file://`, ...).
    Url(String),
}

impl MediaSource {
    /// Classifies a command-line or config value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.contains("://") {
            MediaSource::Url(trimmed.to_string())
        } else {
            MediaSource::File(PathBuf::from(trimmed))
        }
    }

    /// Fails early for local files that do not exist. URLs are checked by FFmpeg.
    pub fn validate(&self) -> Result<()> {
        match self {
            MediaSource::File(path) if !path.exists() => Err(Error::Player(
                PlayerError::SourceUnavailable(format!("{} not found", path.display())),
            )),
            _ => Ok(()),
        }
    }

    /// Path handed to `ffmpeg_next::format::input`, which accepts URLs as well.
    #[must_use]
    pub fn as_input_path(&self) -> PathBuf {
        match self {
            MediaSource::File(path) => path.clone(),
            MediaSource::Url(url) => PathBuf::from(url),
        }
    }

    /// Short name for the control bar title.
    #[must_use]
    pub fn title(&self) -> String {
        let tail = match self {
            MediaSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            MediaSource::Url(url) => url
                .split(['?', '#'])
                .next()
                .and_then(|base| base.rsplit('/').find(|segment| !segment.is_empty()))
                .map(str::to_string),
        };
        tail.unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::File(path) => write!(f, "{}", path.display()),
            MediaSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_ffmpeg_can_be_called_twice() {
        assert!(init_ffmpeg().is_ok());
        assert!(init_ffmpeg().is_ok());
    }

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            MediaSource::parse("https://example.com/clip.mp4"),
            MediaSource::Url("https://example.com/clip.mp4".to_string())
        );
        assert_eq!(
            MediaSource::parse(" /videos/clip.mp4 "),
            MediaSource::File(PathBuf::from("/videos/clip.mp4"))
        );
    }

    #[test]
    fn validate_rejects_missing_file() {
        let source = MediaSource::parse("/nonexistent/clip.mp4");
        assert!(matches!(
            source.validate(),
            Err(Error::Player(PlayerError::SourceUnavailable(_)))
        ));
        assert!(MediaSource::parse("https://example.com/a.mp4")
            .validate()
            .is_ok());
    }

    #[test]
    fn title_uses_last_segment() {
        assert_eq!(
            MediaSource::parse("https://example.com/media/big_buck_bunny.mp4?token=1").title(),
            "big_buck_bunny.mp4"
        );
        assert_eq!(MediaSource::parse("/videos/talk.webm").title(), "talk.webm");
    }

    #[test]
    fn validate_accepts_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, b"data").expect("write");
        assert!(MediaSource::File(path).validate().is_ok());
    }
}
