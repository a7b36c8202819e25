// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Player(PlayerError),
    Capture(CaptureError),
}

/// Failures reported by the embedded player while opening or decoding a source.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerError {
    /// The source could not be reached (missing file, refused connection, ...).
    SourceUnavailable(String),

    /// The source contains no video stream.
    NoVideoStream,

    /// The codec is not supported by the system's FFmpeg.
    UnsupportedCodec(String),

    /// Decoding failed during playback.
    DecodingFailed(String),

    /// The decoder task is gone and no longer accepts commands.
    NotRunning,

    /// Generic error with raw message.
    Other(String),
}

impl PlayerError {
    /// Categorizes a raw FFmpeg/decoder message.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("codec") || msg_lower.contains("decoder") {
            if let Some(codec) = Self::extract_codec_name(&msg_lower) {
                return PlayerError::UnsupportedCodec(codec);
            }
            if msg_lower.contains("not found") || msg_lower.contains("unsupported") {
                return PlayerError::DecodingFailed(msg.to_string());
            }
        }

        if msg_lower.contains("no such file")
            || msg_lower.contains("not found")
            || msg_lower.contains("permission denied")
            || msg_lower.contains("connection")
            || msg_lower.contains("i/o error")
        {
            return PlayerError::SourceUnavailable(msg.to_string());
        }

        if msg_lower.contains("no video stream") || msg_lower.contains("no video track") {
            return PlayerError::NoVideoStream;
        }

        if msg_lower.contains("packet")
            || msg_lower.contains("scaling")
            || msg_lower.contains("seek")
            || msg_lower.contains("decode")
        {
            return PlayerError::DecodingFailed(msg.to_string());
        }

        PlayerError::Other(msg.to_string())
    }

    fn extract_codec_name(msg: &str) -> Option<String> {
        let codecs = ["h264", "hevc", "h265", "vp8", "vp9", "av1", "mpeg4", "mpeg2"];
        codecs
            .iter()
            .find(|codec| msg.contains(*codec))
            .map(|codec| codec.to_uppercase())
    }
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
            PlayerError::NoVideoStream => write!(f, "No video stream found"),
            PlayerError::UnsupportedCodec(codec) => write!(f, "Unsupported video codec: {}", codec),
            PlayerError::DecodingFailed(msg) => write!(f, "Decoding failed: {}", msg),
            PlayerError::NotRunning => write!(f, "Player is not running"),
            PlayerError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PlayerError {}

/// Failures of the frame-capture capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// No frame has been decoded yet.
    NoFrame,

    /// Frame dimensions are zero or do not match the pixel buffer.
    InvalidFrame { width: u32, height: u32, len: usize },

    /// The thumbnail could not be encoded.
    Encode(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoFrame => write!(f, "No frame available for capture"),
            CaptureError::InvalidFrame { width, height, len } => write!(
                f,
                "Invalid frame: {}x{} with {} bytes of RGBA data",
                width, height, len
            ),
            CaptureError::Encode(msg) => write!(f, "Failed to encode thumbnail: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}

/// A platform capability (fullscreen, ...) that the host cannot provide right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    Unavailable(&'static str),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityError::Unavailable(what) => write!(f, "Capability unavailable: {}", what),
        }
    }
}

impl std::error::Error for CapabilityError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Player(e) => write!(f, "Player Error: {}", e),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<PlayerError> for Error {
    fn from(err: PlayerError) -> Self {
        Error::Player(err)
    }
}

impl From<CaptureError> for Error {
    fn from(err: CaptureError) -> Self {
        Error::Capture(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn player_error_from_message_source() {
        let err = PlayerError::from_message("No such file or directory");
        assert!(matches!(err, PlayerError::SourceUnavailable(_)));

        let err = PlayerError::from_message("Connection refused");
        assert!(matches!(err, PlayerError::SourceUnavailable(_)));
    }

    #[test]
    fn player_error_from_message_no_stream() {
        let err = PlayerError::from_message("No video stream found in source");
        assert_eq!(err, PlayerError::NoVideoStream);
    }

    #[test]
    fn player_error_from_message_codec() {
        let err = PlayerError::from_message("Decoder h264 not found");
        assert!(matches!(err, PlayerError::UnsupportedCodec(codec) if codec == "H264"));
    }

    #[test]
    fn player_error_from_message_decoding() {
        let err = PlayerError::from_message("Packet send failed: error");
        assert!(matches!(err, PlayerError::DecodingFailed(_)));
    }

    #[test]
    fn player_error_falls_back_to_other() {
        let err = PlayerError::from_message("something odd");
        assert_eq!(err, PlayerError::Other("something odd".to_string()));
    }

    #[test]
    fn capture_error_wraps_into_crate_error() {
        let err: Error = CaptureError::NoFrame.into();
        assert_eq!(
            format!("{}", err),
            "Capture Error: No frame available for capture"
        );
    }

    #[test]
    fn capability_error_display() {
        let err = CapabilityError::Unavailable("fullscreen");
        assert_eq!(format!("{}", err), "Capability unavailable: fullscreen");
    }
}
