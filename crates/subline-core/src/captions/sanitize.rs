//! Cue text cleanup: markup removal and entity decoding

use once_cell::sync::Lazy;
use regex::Regex;

static INLINE_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\d{2}:\d{2}:\d{2}\.\d{3}>").unwrap());

static CLASS_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<c[^>]*>").unwrap());

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Clean one raw cue text line.
///
/// Returns an empty string when nothing displayable remains.
pub fn clean_line(line: &str) -> String {
    let text = INLINE_TIMESTAMP.replace_all(line, "");
    let text = CLASS_OPEN.replace_all(&text, "");
    let text = text.replace("</c>", "");
    let text = ANY_TAG.replace_all(&text, "");

    // &amp; last, so "&amp;lt;" stays literal "&lt;"
    let text = text
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    text.trim().to_string()
}

/// Clean each line and join the non-empty results with single spaces
pub fn clean_lines<'a, I>(lines: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
