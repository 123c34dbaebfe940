//! Core types for Subline

use serde::{Deserialize, Serialize};

/// Caption file formats understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptionFormat {
    WebVtt,
    Srt,
}

impl std::fmt::Display for CaptionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptionFormat::WebVtt => write!(f, "WebVTT"),
            CaptionFormat::Srt => write!(f, "SRT"),
        }
    }
}

impl std::str::FromStr for CaptionFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vtt" | "webvtt" => Ok(CaptionFormat::WebVtt),
            "srt" | "subrip" => Ok(CaptionFormat::Srt),
            other => Err(format!("unknown caption format: {}", other)),
        }
    }
}

/// Where a track's cues came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackKind {
    WebVtt,
    Srt,
    /// Speech-to-text segments or a pre-processed subtitle document
    Transcript,
}

impl From<CaptionFormat> for TrackKind {
    fn from(format: CaptionFormat) -> Self {
        match format {
            CaptionFormat::WebVtt => TrackKind::WebVtt,
            CaptionFormat::Srt => TrackKind::Srt,
        }
    }
}

impl std::fmt::Display for TrackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackKind::WebVtt => write!(f, "WebVTT"),
            TrackKind::Srt => write!(f, "SRT"),
            TrackKind::Transcript => write!(f, "transcript"),
        }
    }
}

/// Anything with a display window on the playback timeline
pub trait Timed {
    /// Inclusive lower bound in seconds
    fn start(&self) -> f64;
    /// Inclusive upper bound in seconds
    fn end(&self) -> f64;

    /// Check if the window contains `time` (both ends inclusive)
    fn contains(&self, time: f64) -> bool {
        time >= self.start() && time <= self.end()
    }

    /// Length of the window in seconds
    fn duration(&self) -> f64 {
        self.end() - self.start()
    }
}

/// One timed caption entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Sanitized display text
    pub text: String,
    /// Translated line, when the source carried one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

impl Cue {
    /// Create a new cue
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            translation: None,
        }
    }

    /// Attach a translated line
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = Some(translation.into());
        self
    }

    /// Check the `0 <= start < end` interval invariant
    pub fn has_valid_interval(&self) -> bool {
        interval_is_valid(self.start, self.end)
    }
}

impl Timed for Cue {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }
}

/// A sentence-level piece of a parent cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceCue {
    pub start: f64,
    pub end: f64,
    pub text: String,
    /// Index of the originating cue in its sequence
    pub parent_index: usize,
    /// Ordinal among the siblings split from the same parent
    pub position: usize,
}

impl Timed for SentenceCue {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }
}

/// Which cue sequence is presented to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentationMode {
    /// Cues exactly as parsed
    #[default]
    Cue,
    /// Sentence sub-cues
    Sentence,
}

/// Why a construct was skipped during parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// Timing line did not split into exactly two timestamps
    MalformedTiming,
    /// Interval violates `0 <= start < end`
    InvalidInterval,
    /// Nothing displayable remained after sanitizing
    EmptyText,
    /// Text already accepted from an earlier cue
    DuplicateText,
    /// SRT block without index, timing and text lines
    IncompleteBlock,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticKind::MalformedTiming => write!(f, "malformed timing line"),
            DiagnosticKind::InvalidInterval => write!(f, "invalid time interval"),
            DiagnosticKind::EmptyText => write!(f, "empty cue text"),
            DiagnosticKind::DuplicateText => write!(f, "duplicate cue text"),
            DiagnosticKind::IncompleteBlock => write!(f, "incomplete block"),
        }
    }
}

/// A skipped construct, located by 1-based line number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

/// Parsed caption file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrack {
    /// Source of the cues
    pub kind: TrackKind,
    /// Cues in presentation order
    pub cues: Vec<Cue>,
    /// Constructs skipped while parsing
    pub diagnostics: Vec<Diagnostic>,
}

impl CaptionTrack {
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Latest cue end, or 0 for an empty track
    pub fn duration(&self) -> f64 {
        max_end(&self.cues)
    }
}

pub(crate) fn interval_is_valid(start: f64, end: f64) -> bool {
    start >= 0.0 && end > 0.0 && end > start
}

pub(crate) fn max_end<T: Timed>(items: &[T]) -> f64 {
    items.iter().map(Timed::end).fold(0.0, f64::max)
}
