//! Transcript ingestion
//!
//! Speech-to-text output reaches the player as `{start, end, text}` triples,
//! either wrapped in the transcription service envelope or inside a
//! pre-processed subtitle document. Both are normalized into the same cue
//! contract as parsed caption files.

use crate::types::{CaptionTrack, Cue, Diagnostic, DiagnosticKind, TrackKind};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One recognized speech segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

/// Transcription payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Full transcript text
    #[serde(default)]
    pub text: String,
    /// Detected language code
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

/// Transcription service response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<TranscriptResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TranscriptResponse {
    /// Normalize the response segments into a track
    pub fn into_track(self) -> Result<CaptionTrack> {
        if !self.success {
            return Err(Error::InvalidTranscript(
                self.error
                    .unwrap_or_else(|| "transcription was not successful".to_string()),
            ));
        }
        let result = self
            .result
            .ok_or_else(|| Error::InvalidTranscript("response has no result".to_string()))?;

        info!(
            language = result.language.as_deref().unwrap_or("unknown"),
            segments = result.segments.len(),
            "Transcript received"
        );
        normalize(result.segments)
    }
}

/// Video metadata stored alongside pre-processed subtitles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoInfo {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub processed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration: f64,
}

/// One bilingual subtitle entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleEntry {
    pub start: f64,
    pub end: f64,
    pub text: String,
    /// Chinese translation of `text`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chinese: Option<String>,
}

/// Pre-processed subtitle document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtitleDocument {
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
    #[serde(default)]
    pub subtitles: Vec<SubtitleEntry>,
}

impl SubtitleDocument {
    /// Latest subtitle end, or 0 when there are none
    pub fn duration(&self) -> f64 {
        self.subtitles.iter().map(|s| s.end).fold(0.0, f64::max)
    }

    /// Normalize the entries into a track, keeping translations
    pub fn into_track(self) -> Result<CaptionTrack> {
        normalize_cues(self.subtitles.into_iter().map(|entry| {
            let cue = Cue::new(entry.start, entry.end, entry.text);
            match entry.chinese {
                Some(translation) => cue.with_translation(translation),
                None => cue,
            }
        }))
    }
}

/// Normalize transcript segments into a track.
///
/// Segments keep their order and their text is folded onto one line. A
/// segment is dropped when its interval breaks `0 <= start < end` or no text
/// remains.
pub fn normalize<I>(segments: I) -> Result<CaptionTrack>
where
    I: IntoIterator<Item = TranscriptSegment>,
{
    normalize_cues(
        segments
            .into_iter()
            .map(|segment| Cue::new(segment.start, segment.end, segment.text)),
    )
}

fn normalize_cues<I>(candidates: I) -> Result<CaptionTrack>
where
    I: IntoIterator<Item = Cue>,
{
    let mut cues = Vec::new();
    let mut diagnostics = Vec::new();

    // diagnostics are located by 1-based segment ordinal
    for (i, mut cue) in candidates.into_iter().enumerate() {
        if !cue.has_valid_interval() {
            debug!(segment = i + 1, start = cue.start, end = cue.end, "Skipping segment with invalid interval");
            diagnostics.push(Diagnostic::new(i + 1, DiagnosticKind::InvalidInterval));
            continue;
        }

        let text = single_line(&cue.text);
        if text.is_empty() {
            debug!(segment = i + 1, "Skipping segment with empty text");
            diagnostics.push(Diagnostic::new(i + 1, DiagnosticKind::EmptyText));
            continue;
        }
        cue.text = text;
        cue.translation = cue
            .translation
            .map(|t| single_line(&t))
            .filter(|t| !t.is_empty());

        cues.push(cue);
    }

    if cues.is_empty() {
        return Err(Error::EmptyResult {
            kind: TrackKind::Transcript,
        });
    }

    Ok(CaptionTrack {
        kind: TrackKind::Transcript,
        cues,
        diagnostics,
    })
}

/// Collapse every whitespace run, newlines included, into one space
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode transcript JSON into a track.
///
/// Accepts a service response (`{"success", "result"}`, or a bare
/// `{"error"}` failure body), a subtitle
/// document (`{"subtitles"}`), or a bare array of segments.
pub fn from_json(json: &str) -> Result<CaptionTrack> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let is_document = value.get("subtitles").is_some();
    let is_response = ["result", "success", "error"]
        .iter()
        .any(|key| value.get(key).is_some());

    if value.is_array() {
        let segments: Vec<TranscriptSegment> = serde_json::from_value(value)?;
        normalize(segments)
    } else if is_document {
        let document: SubtitleDocument = serde_json::from_value(value)?;
        document.into_track()
    } else if is_response {
        let response: TranscriptResponse = serde_json::from_value(value)?;
        response.into_track()
    } else {
        Err(Error::InvalidTranscript(
            "expected a transcription response, subtitle document or segment array".to_string(),
        ))
    }
}
