//! Caption parsing - WebVTT and SRT
//!
//! [`CaptionParser`] detects the format once from the content signature and
//! dispatches to [`WebVttParser`] or [`SrtParser`]:
//!
//! - content containing `WEBVTT` is parsed as WebVTT
//! - otherwise content containing `-->` is parsed as SRT
//! - anything else is rejected before parsing with [`Error::InvalidFormat`]
//!
//! # Example
//!
//! ```rust
//! use subline_core::captions::CaptionParser;
//!
//! let vtt = "WEBVTT\n\n00:00:01.000 --> 00:00:03.000\nHello\n";
//! let track = CaptionParser::default().parse(vtt).unwrap();
//! assert_eq!(track.cues[0].text, "Hello");
//! ```

mod export;
mod index;
mod sanitize;
mod sentence;
mod srt;
mod timecode;
mod vtt;

pub use export::{format_clock, format_timestamp, srt_to_vtt, to_srt, to_webvtt};
pub use index::{active_index, CueIndex};
pub use sanitize::{clean_line, clean_lines};
pub use sentence::{sentence_fragments, split_sentences};
pub use srt::SrtParser;
pub use timecode::{parse_timecode, try_parse_timecode, TimeCodeError};
pub use vtt::WebVttParser;

use crate::config::ParserConfig;
use crate::types::{CaptionFormat, CaptionTrack, Cue, Diagnostic, SentenceCue, TrackKind};
use crate::{Error, Result};
use tracing::{info, warn};

/// Cues produced by one of the format parsers, before file-level checks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedCues {
    pub cues: Vec<Cue>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Detect the caption format from the content signature
pub fn detect_format(content: &str) -> Result<CaptionFormat> {
    if content.trim().is_empty() {
        return Err(Error::EmptyContent);
    }
    if content.contains("WEBVTT") {
        return Ok(CaptionFormat::WebVtt);
    }
    if content.contains("-->") {
        return Ok(CaptionFormat::Srt);
    }
    Err(Error::InvalidFormat)
}

/// Format-detecting caption parser
#[derive(Debug, Clone, Default)]
pub struct CaptionParser {
    config: ParserConfig,
}

impl CaptionParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse caption content into a track.
    ///
    /// Fails with [`Error::InvalidFormat`] when the content is neither
    /// format, and with [`Error::EmptyResult`] when no cue survives.
    pub fn parse(&self, content: &str) -> Result<CaptionTrack> {
        let format = detect_format(content)?;

        let parsed = match format {
            CaptionFormat::WebVtt => WebVttParser::parse(content),
            CaptionFormat::Srt => SrtParser::parse(content, self.config.validate_srt),
        };
        let kind = TrackKind::from(format);

        if parsed.cues.is_empty() {
            warn!(
                format = %format,
                skipped = parsed.diagnostics.len(),
                "No valid cues in caption content"
            );
            return Err(Error::EmptyResult { kind });
        }

        info!(
            format = %format,
            cues = parsed.cues.len(),
            skipped = parsed.diagnostics.len(),
            "Captions parsed"
        );

        Ok(CaptionTrack {
            kind,
            cues: parsed.cues,
            diagnostics: parsed.diagnostics,
        })
    }

    /// Split cues into sentence sub-cues using the configured threshold
    pub fn split_sentences(&self, cues: &[Cue]) -> Vec<SentenceCue> {
        split_sentences(cues, self.config.min_sentence_chars)
    }
}

/// Parse caption content with the default configuration
pub fn parse_captions(content: &str) -> Result<CaptionTrack> {
    CaptionParser::default().parse(content)
}
