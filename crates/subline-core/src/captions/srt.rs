//! SRT (SubRip) cue parsing

use super::timecode::parse_timecode;
use super::ParsedCues;
use crate::types::{interval_is_valid, Cue, Diagnostic, DiagnosticKind};
use tracing::debug;

/// SRT (SubRip) parser
///
/// Cues keep file block order. Text is taken verbatim (no markup pass).
pub struct SrtParser;

impl SrtParser {
    /// Parse SRT content.
    ///
    /// With `validate` set, blocks whose interval breaks `0 <= start < end`
    /// are skipped like WebVTT cues; otherwise every complete block is kept.
    pub fn parse(content: &str, validate: bool) -> ParsedCues {
        let mut cues = Vec::new();
        let mut diagnostics = Vec::new();

        for (line_no, block) in blocks(content) {
            if block.len() < 3 {
                debug!(line = line_no, lines = block.len(), "Skipping incomplete SRT block");
                diagnostics.push(Diagnostic::new(line_no, DiagnosticKind::IncompleteBlock));
                continue;
            }

            let timing_line = block[1];
            let times: Vec<&str> = timing_line.split("-->").collect();
            if times.len() != 2 {
                debug!(line = line_no + 1, timing = timing_line, "Skipping malformed SRT timing line");
                diagnostics.push(Diagnostic::new(line_no + 1, DiagnosticKind::MalformedTiming));
                continue;
            }

            let start = parse_timecode(times[0]);
            let end = parse_timecode(times[1]);
            if validate && !interval_is_valid(start, end) {
                debug!(line = line_no + 1, start, end, "Skipping SRT block with invalid interval");
                diagnostics.push(Diagnostic::new(line_no + 1, DiagnosticKind::InvalidInterval));
                continue;
            }

            let text = block[2..]
                .iter()
                .map(|line| line.trim())
                .collect::<Vec<_>>()
                .join(" ");

            cues.push(Cue::new(start, end, text));
        }

        ParsedCues { cues, diagnostics }
    }
}

/// Split content into blank-line separated blocks, tagged with the
/// 1-based line number of each block's first line
fn blocks(content: &str) -> Vec<(usize, Vec<&str>)> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut first_line = 0;

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push((first_line, std::mem::take(&mut current)));
            }
            continue;
        }
        if current.is_empty() {
            first_line = i + 1;
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push((first_line, current));
    }

    blocks
}
