//! Caption Player - cue tracking for a browser video element
//!
//! Thin wrapper over `CaptionSession`. Indices cross the boundary as `i32`
//! with `-1` for "no cue".

use subline_core::{CaptionSession, SegmentationMode};
use wasm_bindgen::prelude::*;

use crate::{to_js_error, WasmConfig};

/// Caption state for one video element
#[wasm_bindgen]
pub struct SublinePlayer {
    session: CaptionSession,
}

#[wasm_bindgen]
impl SublinePlayer {
    /// Create a player, optionally with custom parser settings
    #[wasm_bindgen(constructor)]
    pub fn new(config: Option<WasmConfig>) -> Self {
        Self {
            session: CaptionSession::new(config.unwrap_or_default().into()),
        }
    }

    /// Load WebVTT or SRT content; returns the cue count.
    ///
    /// On failure the previous track stays loaded.
    #[wasm_bindgen]
    pub fn load(&mut self, content: &str) -> Result<usize, JsError> {
        let track = self.session.load(content).map_err(to_js_error)?;
        Ok(track.len())
    }

    /// Load a transcription response or subtitle document (JSON)
    #[wasm_bindgen(js_name = loadTranscript)]
    pub fn load_transcript(&mut self, json: &str) -> Result<usize, JsError> {
        let track = self.session.load_transcript(json).map_err(to_js_error)?;
        Ok(track.len())
    }

    /// Follow the playback position; returns the active index or `-1`
    #[wasm_bindgen]
    pub fn update(&mut self, time: f64) -> i32 {
        self.session.update(time);
        self.current_index()
    }

    /// Active index, or `-1`
    #[wasm_bindgen(getter, js_name = currentIndex)]
    pub fn current_index(&self) -> i32 {
        to_js_index(self.session.current_index())
    }

    /// Entries of the presented sequence as `{index, start, end, text, translation?}`
    #[wasm_bindgen]
    pub fn cues(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.session.entries())?)
    }

    /// The active entry, or `null`
    #[wasm_bindgen]
    pub fn current(&self) -> Result<JsValue, JsError> {
        match self.session.current() {
            Some(view) => Ok(serde_wasm_bindgen::to_value(&view)?),
            None => Ok(JsValue::NULL),
        }
    }

    /// Seek time of the next entry, `undefined` at the end
    #[wasm_bindgen(js_name = next)]
    pub fn next_cue(&mut self) -> Option<f64> {
        self.session.next_cue()
    }

    /// Seek time of the previous entry (clamped to the first)
    #[wasm_bindgen(js_name = previous)]
    pub fn previous_cue(&mut self) -> Option<f64> {
        self.session.previous_cue()
    }

    /// Seek time that replays the active entry
    #[wasm_bindgen(js_name = repeat)]
    pub fn repeat_cue(&mut self) -> Option<f64> {
        self.session.repeat_cue()
    }

    /// Make entry `index` active; returns its start time
    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, index: usize) -> Result<f64, JsError> {
        self.session.jump_to(index).map_err(to_js_error)
    }

    /// Switch between cue and sentence presentation
    #[wasm_bindgen(js_name = setSentenceMode)]
    pub fn set_sentence_mode(&mut self, enabled: bool) {
        let mode = if enabled {
            SegmentationMode::Sentence
        } else {
            SegmentationMode::Cue
        };
        self.session.set_mode(mode);
    }

    #[wasm_bindgen(getter, js_name = sentenceMode)]
    pub fn sentence_mode(&self) -> bool {
        self.session.mode() == SegmentationMode::Sentence
    }

    /// Number of entries in the presented sequence
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.session.len()
    }

    /// Latest cue end in seconds
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> f64 {
        self.session.duration()
    }

    /// Drop the active entry, e.g. after a seek
    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.session.clear();
    }
}

impl Default for SublinePlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

fn to_js_index(index: Option<usize>) -> i32 {
    index.and_then(|i| i32::try_from(i).ok()).unwrap_or(-1)
}
