//! Error types for Subline Core

use crate::types::TrackKind;
use thiserror::Error;

/// Result type alias for caption operations
pub type Result<T> = std::result::Result<T, Error>;

/// File-level caption errors.
///
/// Malformed individual cues never surface here; they are skipped and
/// recorded as [`Diagnostic`](crate::types::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum Error {
    // Content errors
    #[error("Caption file is empty")]
    EmptyContent,

    #[error("Invalid caption format: content is neither WebVTT nor SRT")]
    InvalidFormat,

    #[error("No valid cues found in {kind} content")]
    EmptyResult { kind: TrackKind },

    // Transcript errors
    #[error("Invalid transcript: {0}")]
    InvalidTranscript(String),

    // Navigation errors
    #[error("Cue index {index} out of range (track has {len} cues)")]
    CueOutOfRange { index: usize, len: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the caller can retry with different input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EmptyContent
                | Error::InvalidFormat
                | Error::EmptyResult { .. }
                | Error::InvalidTranscript(_)
                | Error::CueOutOfRange { .. }
        )
    }

    /// Returns a stable error code for the UI layer
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::EmptyContent => "EMPTY_CONTENT",
            Error::InvalidFormat => "INVALID_FORMAT",
            Error::EmptyResult { .. } => "EMPTY_RESULT",
            Error::InvalidTranscript(_) => "INVALID_TRANSCRIPT",
            Error::CueOutOfRange { .. } => "CUE_OUT_OF_RANGE",
            Error::Json(_) => "JSON",
            Error::Io(_) => "IO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::InvalidFormat.error_code(), "INVALID_FORMAT");
        assert_eq!(
            Error::EmptyResult { kind: TrackKind::Srt }.error_code(),
            "EMPTY_RESULT"
        );
    }

    #[test]
    fn test_empty_result_message_names_format() {
        let err = Error::EmptyResult { kind: TrackKind::WebVtt };
        assert_eq!(err.to_string(), "No valid cues found in WebVTT content");
    }

    #[test]
    fn test_io_is_not_recoverable() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert!(!err.is_recoverable());
        assert!(Error::InvalidFormat.is_recoverable());
    }
}
