//! Subline Core - Caption Engine for Subline
//!
//! This crate turns caption files into timed cues and tracks which cue is on
//! screen while a video plays:
//! - WebVTT and SRT parsing with format detection
//! - Markup stripping and entity decoding for cue text
//! - Sentence-level splitting with proportional timing
//! - Active cue lookup per playback tick
//! - Transcript ingestion from speech-to-text output
//! - WebVTT / SRT export
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Subline Core                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐          │
//! │  │   TimeCode   │  │     Text     │  │  Transcript  │          │
//! │  │    Parser    │  │  Sanitizer   │  │   Ingestion  │          │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘          │
//! │         └────────┬────────┘                 │                   │
//! │         ┌────────┴────────┐                 │                   │
//! │  ┌──────┴──────┐   ┌──────┴──────┐          │                   │
//! │  │   WebVTT    │   │     SRT     │          │                   │
//! │  │   Parser    │   │   Parser    │          │                   │
//! │  └──────┬──────┘   └──────┬──────┘          │                   │
//! │         └────────┬────────┘                 │                   │
//! │           ┌──────┴──────┐                   │                   │
//! │           │   Caption   │                   │                   │
//! │           │   Parser    │                   │                   │
//! │           └──────┬──────┘                   │                   │
//! │                  └──────────┬───────────────┘                   │
//! │                      ┌──────┴──────┐                            │
//! │  ┌──────────────┐    │   Caption   │    ┌──────────────┐        │
//! │  │   Sentence   │────│   Session   │────│   CueIndex   │        │
//! │  │   Splitter   │    └─────────────┘    └──────────────┘        │
//! │  └──────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod captions;
pub mod config;
pub mod error;
pub mod session;
pub mod transcript;
pub mod types;

pub use captions::{
    detect_format, parse_captions, CaptionParser, CueIndex, SrtParser, WebVttParser,
};
pub use config::ParserConfig;
pub use error::{Error, Result};
pub use session::{CaptionSession, CueChange, CueView};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Subline Core initialized");
}
