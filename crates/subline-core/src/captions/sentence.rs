//! Sentence-level segmentation
//!
//! Each cue's text is cut after runs of `.`, `!` or `?` and the cue's time
//! window is shared out by character count. This is a heuristic: it assumes
//! speech rate is uniform across the cue, so sub-cue boundaries are an
//! approximation, not transcript-accurate timing.

use crate::types::{Cue, SentenceCue};
use tracing::debug;

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into sentence fragments.
///
/// Whitespace is collapsed, punctuation stays with the sentence it ends, and
/// fragments shorter than `min_chars` are dropped. When nothing survives the
/// whole text is returned as one fragment.
pub fn sentence_fragments(text: &str, min_chars: usize) -> Vec<String> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut fragments = Vec::new();
    let mut begin = 0;
    let mut chars = normalized.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        fragments.push(&normalized[begin..end]);
        begin = end;
    }
    if begin < normalized.len() {
        fragments.push(&normalized[begin..]);
    }

    let kept: Vec<String> = fragments
        .into_iter()
        .map(str::trim)
        .filter(|f| f.chars().count() >= min_chars)
        .map(str::to_string)
        .collect();

    if kept.is_empty() {
        vec![normalized]
    } else {
        kept
    }
}

/// Split every cue into sentence sub-cues.
///
/// Sub-cues of one parent are contiguous and cover exactly
/// `[parent.start, parent.end]`. Parents without a positive duration
/// produce nothing.
pub fn split_sentences(cues: &[Cue], min_chars: usize) -> Vec<SentenceCue> {
    let mut sentences = Vec::new();

    for (parent_index, cue) in cues.iter().enumerate() {
        let duration = cue.end - cue.start;
        if duration.is_nan() || duration <= 0.0 {
            debug!(parent = parent_index, "Not splitting cue without positive duration");
            continue;
        }

        let fragments = sentence_fragments(&cue.text, min_chars);
        let lengths: Vec<usize> = fragments.iter().map(|f| f.chars().count()).collect();
        let total: usize = lengths.iter().sum();
        if total == 0 {
            continue;
        }

        // boundaries[k] is where fragment k starts; the last one is the parent end
        let mut boundaries = Vec::with_capacity(fragments.len() + 1);
        let mut consumed = 0;
        boundaries.push(cue.start);
        for len in &lengths[..lengths.len() - 1] {
            consumed += len;
            boundaries.push(cue.start + duration * consumed as f64 / total as f64);
        }
        boundaries.push(cue.end);

        for (position, text) in fragments.into_iter().enumerate() {
            sentences.push(SentenceCue {
                start: boundaries[position],
                end: boundaries[position + 1].min(cue.end),
                text,
                parent_index,
                position,
            });
        }
    }

    sentences
}
