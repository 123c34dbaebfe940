//! WebVTT cue parsing

use super::sanitize::clean_lines;
use super::timecode::parse_timecode;
use super::ParsedCues;
use crate::types::{interval_is_valid, Cue, Diagnostic, DiagnosticKind};
use std::collections::HashSet;
use tracing::debug;

/// WebVTT parser
///
/// Output is sorted by start time and holds no two cues with the same text:
/// rolling auto-generated captions repeat each line across several
/// overlapping cues, and only the first occurrence is kept.
pub struct WebVttParser;

impl WebVttParser {
    /// Parse WebVTT content. Malformed cues are skipped, never fatal.
    pub fn parse(content: &str) -> ParsedCues {
        let lines: Vec<&str> = content.lines().collect();
        let mut cues = Vec::new();
        let mut diagnostics = Vec::new();
        let mut seen = HashSet::new();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            let line_no = i + 1;
            i += 1;

            if !line.contains("-->") {
                continue;
            }

            let times: Vec<&str> = line.split("-->").collect();
            if times.len() != 2 {
                debug!(line = line_no, timing = line, "Skipping malformed timing line");
                diagnostics.push(Diagnostic::new(line_no, DiagnosticKind::MalformedTiming));
                continue;
            }

            let start = parse_timecode(times[0]);
            let end = parse_timecode(times[1]);
            if !interval_is_valid(start, end) {
                debug!(line = line_no, start, end, "Skipping cue with invalid interval");
                diagnostics.push(Diagnostic::new(line_no, DiagnosticKind::InvalidInterval));
                continue;
            }

            // Text runs until a blank line or the next timing line
            let text_start = i;
            while i < lines.len() && !lines[i].trim().is_empty() && !lines[i].contains("-->") {
                i += 1;
            }
            let text = clean_lines(lines[text_start..i].iter().copied());

            if text.is_empty() {
                debug!(line = line_no, "Skipping cue with empty text");
                diagnostics.push(Diagnostic::new(line_no, DiagnosticKind::EmptyText));
                continue;
            }

            if !seen.insert(text.clone()) {
                debug!(line = line_no, text = %text, "Skipping duplicate cue");
                diagnostics.push(Diagnostic::new(line_no, DiagnosticKind::DuplicateText));
                continue;
            }

            cues.push(Cue::new(start, end, text));
        }

        cues.sort_by(|a, b| a.start.total_cmp(&b.start));

        ParsedCues { cues, diagnostics }
    }
}
