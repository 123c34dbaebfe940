//! Caption serialization and time formatting

use crate::types::{CaptionFormat, Cue};

/// Format seconds for a cue list: `MM:SS`, or `HH:MM:SS` past the hour.
///
/// Fractions are truncated; NaN and negative values render as `00:00`.
pub fn format_clock(seconds: f64) -> String {
    if seconds.is_nan() || seconds < 0.0 {
        return "00:00".to_string();
    }

    let total = seconds.floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Format seconds as a full timestamp: `HH:MM:SS.mmm` or `HH:MM:SS,mmm`
pub fn format_timestamp(seconds: f64, format: CaptionFormat) -> String {
    let millis = if seconds.is_finite() && seconds > 0.0 {
        (seconds * 1000.0).round() as u64
    } else {
        0
    };

    let hours = millis / 3_600_000;
    let minutes = (millis % 3_600_000) / 60_000;
    let secs = (millis % 60_000) / 1000;
    let ms = millis % 1000;
    let separator = match format {
        CaptionFormat::WebVtt => '.',
        CaptionFormat::Srt => ',',
    };

    format!("{:02}:{:02}:{:02}{}{:03}", hours, minutes, secs, separator, ms)
}

/// Cue text on one line; a blank line would end the cue early
fn payload(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Serialize cues as WebVTT. Text is entity-escaped.
pub fn to_webvtt(cues: &[Cue]) -> String {
    let mut vtt = String::from("WEBVTT\n\n");

    for cue in cues {
        let text = payload(&cue.text)
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        vtt.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_timestamp(cue.start, CaptionFormat::WebVtt),
            format_timestamp(cue.end, CaptionFormat::WebVtt),
            text
        ));
    }

    vtt
}

/// Serialize cues as numbered SRT blocks, one text line per cue
pub fn to_srt(cues: &[Cue]) -> String {
    let mut srt = String::new();

    for (i, cue) in cues.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(cue.start, CaptionFormat::Srt),
            format_timestamp(cue.end, CaptionFormat::Srt),
            payload(&cue.text)
        ));
    }

    srt
}

/// Convert raw SRT text to WebVTT by rewriting timing lines
pub fn srt_to_vtt(srt: &str) -> String {
    let mut vtt = String::from("WEBVTT\n\n");

    for line in srt.lines() {
        if line.contains("-->") {
            vtt.push_str(&line.replace(',', "."));
        } else {
            vtt.push_str(line);
        }
        vtt.push('\n');
    }

    vtt
}
