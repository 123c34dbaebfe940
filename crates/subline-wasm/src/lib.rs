//! Subline WASM - WebAssembly Caption Engine
//!
//! Runs the caption parser and cue tracker in the browser:
//! - WebVTT / SRT parsing and transcript loading
//! - Active cue lookup from `timeupdate` ticks
//! - Previous / next / repeat navigation
//! - Sentence mode
//!
//! ## Integration with an HTML video element
//!
//! ```javascript
//! import init, { SublinePlayer } from '@subline/wasm';
//!
//! await init();
//! const player = new SublinePlayer();
//! player.load(await (await fetch('talk.vtt')).text());
//! video.addEventListener('timeupdate', () => {
//!     const index = player.update(video.currentTime);
//!     if (index >= 0) highlight(index);
//! });
//! ```

use subline_core::ParserConfig;
use wasm_bindgen::prelude::*;

mod player;

pub use player::SublinePlayer;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Subline WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    subline_core::VERSION.to_string()
}

/// Parse caption content into `{kind, cues, diagnostics}`
#[wasm_bindgen(js_name = parseCaptions)]
pub fn parse_captions(content: &str) -> Result<JsValue, JsError> {
    let track = subline_core::parse_captions(content).map_err(to_js_error)?;
    Ok(serde_wasm_bindgen::to_value(&track)?)
}

/// Format seconds as `MM:SS` or `HH:MM:SS`
#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock(seconds: f64) -> String {
    subline_core::captions::format_clock(seconds)
}

/// Parser settings for the WASM player
#[wasm_bindgen]
#[derive(Clone)]
pub struct WasmConfig {
    /// Drop SRT blocks with invalid intervals
    pub validate_srt: bool,
    /// Shortest sentence kept in sentence mode, in characters
    pub min_sentence_chars: usize,
}

#[wasm_bindgen]
impl WasmConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        ParserConfig::default().into()
    }

    /// Accept every structurally complete SRT block verbatim
    #[wasm_bindgen]
    pub fn legacy() -> Self {
        ParserConfig::legacy().into()
    }
}

impl Default for WasmConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ParserConfig> for WasmConfig {
    fn from(config: ParserConfig) -> Self {
        Self {
            validate_srt: config.validate_srt,
            min_sentence_chars: config.min_sentence_chars,
        }
    }
}

impl From<WasmConfig> for ParserConfig {
    fn from(config: WasmConfig) -> Self {
        Self {
            validate_srt: config.validate_srt,
            min_sentence_chars: config.min_sentence_chars,
        }
    }
}

/// Map a core error to a JS `Error` whose message carries the error code
pub(crate) fn to_js_error(err: subline_core::Error) -> JsError {
    JsError::new(&format!("[{}] {}", err.error_code(), err))
}
