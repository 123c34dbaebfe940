//! Caption Session - current-cue tracking for a playing video
//!
//! Holds the loaded track and its sentence split, and follows the playback
//! position:
//! - Track loading (replaces the previous track only on success)
//! - Cue / sentence mode switching
//! - Active cue updates on every playback tick
//! - Previous / next / repeat navigation

use crate::{
    captions::{CaptionParser, CueIndex},
    config::ParserConfig,
    transcript,
    types::*,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Display data for one entry of the active sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CueView {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

/// Active-cue transition reported by [`CaptionSession::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

/// Caption state for a single video
pub struct CaptionSession {
    /// Parser used for every load
    parser: CaptionParser,
    /// Loaded track
    track: Option<Arc<CaptionTrack>>,
    /// Sentence split of the loaded track
    sentences: Arc<[SentenceCue]>,
    /// Which sequence is presented
    mode: SegmentationMode,
    /// Lookup table for the presented sequence
    index: CueIndex,
    /// Active entry of the presented sequence
    current: Option<usize>,
}

impl CaptionSession {
    /// Create an empty session
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: CaptionParser::new(config),
            track: None,
            sentences: Arc::from(Vec::new()),
            mode: SegmentationMode::default(),
            index: CueIndex::default(),
            current: None,
        }
    }

    /// Parse caption file content and make it the current track
    pub fn load(&mut self, content: &str) -> Result<Arc<CaptionTrack>> {
        let track = self.parser.parse(content)?;
        Ok(self.replace_track(track))
    }

    /// Load transcript JSON and make it the current track
    pub fn load_transcript(&mut self, json: &str) -> Result<Arc<CaptionTrack>> {
        let track = transcript::from_json(json)?;
        Ok(self.replace_track(track))
    }

    /// Make an already built track current
    pub fn replace_track(&mut self, track: CaptionTrack) -> Arc<CaptionTrack> {
        let track = Arc::new(track);
        self.sentences = Arc::from(self.parser.split_sentences(&track.cues));
        self.track = Some(Arc::clone(&track));
        self.rebuild_index();

        info!(
            kind = %track.kind,
            cues = track.len(),
            sentences = self.sentences.len(),
            "Caption track loaded"
        );

        track
    }

    /// Currently loaded track
    pub fn track(&self) -> Option<Arc<CaptionTrack>> {
        self.track.clone()
    }

    /// Cues of the loaded track
    pub fn cues(&self) -> &[Cue] {
        self.track.as_deref().map(|t| t.cues.as_slice()).unwrap_or(&[])
    }

    /// Sentence sub-cues of the loaded track
    pub fn sentences(&self) -> &[SentenceCue] {
        &self.sentences
    }

    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }

    /// Switch the presented sequence; clears the active entry
    pub fn set_mode(&mut self, mode: SegmentationMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.rebuild_index();
        debug!(mode = ?mode, entries = self.len(), "Segmentation mode changed");
    }

    /// Number of entries in the presented sequence
    pub fn len(&self) -> usize {
        match self.mode {
            SegmentationMode::Cue => self.cues().len(),
            SegmentationMode::Sentence => self.sentences.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display data for entry `index` of the presented sequence
    pub fn entry(&self, index: usize) -> Option<CueView> {
        match self.mode {
            SegmentationMode::Cue => self.cues().get(index).map(|cue| CueView {
                index,
                start: cue.start,
                end: cue.end,
                text: cue.text.clone(),
                translation: cue.translation.clone(),
            }),
            SegmentationMode::Sentence => self.sentences.get(index).map(|s| CueView {
                index,
                start: s.start,
                end: s.end,
                text: s.text.clone(),
                translation: None,
            }),
        }
    }

    /// All entries of the presented sequence
    pub fn entries(&self) -> Vec<CueView> {
        (0..self.len()).filter_map(|i| self.entry(i)).collect()
    }

    /// Index of the active entry
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The active entry
    pub fn current(&self) -> Option<CueView> {
        self.current.and_then(|i| self.entry(i))
    }

    /// Follow the playback position.
    ///
    /// Returns the transition when the active entry changed.
    pub fn update(&mut self, time: f64) -> Option<CueChange> {
        let active = self.index.active_index(time);
        if active == self.current {
            return None;
        }

        let change = CueChange {
            previous: self.current,
            current: active,
        };
        self.current = active;
        Some(change)
    }

    /// Make entry `index` active and return its start time to seek to
    pub fn jump_to(&mut self, index: usize) -> Result<f64> {
        let entry = self.entry(index).ok_or(Error::CueOutOfRange {
            index,
            len: self.len(),
        })?;
        self.current = Some(index);
        debug!(index, start = entry.start, "Jumped to cue");
        Ok(entry.start)
    }

    /// Step back one entry, or go to the first one
    pub fn previous_cue(&mut self) -> Option<f64> {
        let target = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => 0,
        };
        self.jump_to(target).ok()
    }

    /// Step forward one entry; from no active entry, go to the first one.
    ///
    /// Returns `None` at the last entry.
    pub fn next_cue(&mut self) -> Option<f64> {
        let target = match self.current {
            Some(i) if i + 1 < self.len() => i + 1,
            Some(_) => return None,
            None => 0,
        };
        self.jump_to(target).ok()
    }

    /// Start time of the active entry, or of the first entry when none is
    /// active
    pub fn repeat_cue(&mut self) -> Option<f64> {
        match self.current {
            Some(i) => self.entry(i).map(|e| e.start),
            None => self.jump_to(0).ok(),
        }
    }

    /// Drop the active entry
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Latest cue end of the loaded track
    pub fn duration(&self) -> f64 {
        self.track.as_deref().map(CaptionTrack::duration).unwrap_or(0.0)
    }

    fn rebuild_index(&mut self) {
        self.index = match self.mode {
            SegmentationMode::Cue => CueIndex::new(self.cues()),
            SegmentationMode::Sentence => CueIndex::new(&self.sentences[..]),
        };
        self.current = None;
    }
}

impl Default for CaptionSession {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VTT: &str = "WEBVTT

00:00:01.000 --> 00:00:04.000
First line. Second line.

00:00:05.000 --> 00:00:07.000
Middle

00:00:08.000 --> 00:00:10.000
Last
";

    fn loaded() -> CaptionSession {
        let mut session = CaptionSession::default();
        session.load(VTT).unwrap();
        session
    }

    #[test]
    fn test_session_creation() {
        let session = CaptionSession::default();
        assert!(session.is_empty());
        assert_eq!(session.current_index(), None);
        assert_eq!(session.duration(), 0.0);
    }

    #[test]
    fn test_update_reports_only_changes() {
        let mut session = loaded();

        assert_eq!(
            session.update(1.5),
            Some(CueChange { previous: None, current: Some(0) })
        );
        assert_eq!(session.update(2.0), None);
        assert_eq!(
            session.update(4.5),
            Some(CueChange { previous: Some(0), current: None })
        );
        assert_eq!(session.update(9.0).map(|c| c.current), Some(Some(2)));
        assert_eq!(session.current().unwrap().text, "Last");
    }

    #[test]
    fn test_navigation() {
        let mut session = loaded();

        // nothing active: next and repeat go to the first cue
        assert_eq!(session.next_cue(), Some(1.0));
        assert_eq!(session.current_index(), Some(0));
        session.clear();
        assert_eq!(session.repeat_cue(), Some(1.0));

        assert_eq!(session.next_cue(), Some(5.0));
        assert_eq!(session.next_cue(), Some(8.0));
        assert_eq!(session.next_cue(), None);
        assert_eq!(session.current_index(), Some(2));
        assert_eq!(session.repeat_cue(), Some(8.0));

        assert_eq!(session.previous_cue(), Some(5.0));
        assert_eq!(session.previous_cue(), Some(1.0));
        assert_eq!(session.previous_cue(), Some(1.0));
        assert_eq!(session.current_index(), Some(0));
    }

    #[test]
    fn test_navigation_without_cues() {
        let mut session = CaptionSession::default();
        assert_eq!(session.next_cue(), None);
        assert_eq!(session.previous_cue(), None);
        assert_eq!(session.repeat_cue(), None);
        assert!(matches!(
            session.jump_to(3),
            Err(Error::CueOutOfRange { index: 3, len: 0 })
        ));
    }

    #[test]
    fn test_sentence_mode() {
        let mut session = loaded();
        session.update(1.5);

        session.set_mode(SegmentationMode::Sentence);
        assert_eq!(session.current_index(), None);
        assert_eq!(session.len(), 4);

        // "First line." and "Second line." share [1, 4] by length
        assert_eq!(session.update(2.0).and_then(|c| c.current), Some(0));
        assert_eq!(session.update(3.0).and_then(|c| c.current), Some(1));
        assert_eq!(session.current().unwrap().text, "Second line.");

        session.set_mode(SegmentationMode::Cue);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_failed_load_keeps_previous_track() {
        let mut session = loaded();
        session.update(5.5);

        assert!(session.load("not a caption file").is_err());
        assert_eq!(session.len(), 3);
        assert_eq!(session.current_index(), Some(1));
    }

    #[test]
    fn test_reload_replaces_track() {
        let mut session = loaded();
        let before = session.track().unwrap();
        session.update(1.5);

        session.load("1\n00:00:00,000 --> 00:00:02,000\nOnly\n").unwrap();
        assert_eq!(session.len(), 1);
        assert_eq!(session.current_index(), None);
        assert_eq!(session.duration(), 2.0);
        // earlier readers keep their snapshot
        assert_eq!(before.len(), 3);
    }

    #[test]
    fn test_load_transcript() {
        let mut session = CaptionSession::default();
        let track = session
            .load_transcript(r#"{"subtitles": [{"start": 0, "end": 2, "text": "Hi", "chinese": "你好"}]}"#)
            .unwrap();
        assert_eq!(track.kind, TrackKind::Transcript);
        assert_eq!(session.entry(0).unwrap().translation.as_deref(), Some("你好"));
    }
}
