//! Timestamp parsing
//!
//! Accepts `HH:MM:SS.mmm`, `MM:SS.mmm` and `SS.mmm`, the SRT comma variant,
//! and VTT timing tokens that still carry cue settings (`align:start`, ...).
//! Parsing is permissive: a numeric part that does not parse counts as zero.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::warn;

static CUE_SETTINGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+(?:align|position|line|size|vertical|region):.*$").unwrap()
});

static LEADING_INT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+").unwrap());

static LEADING_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)").unwrap());

/// A token that cannot be read as a timestamp at all
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unparseable timestamp '{token}': expected 1-3 ':'-separated parts, found {parts}")]
pub struct TimeCodeError {
    pub token: String,
    pub parts: usize,
}

/// Parse a timestamp token into seconds.
///
/// Never fails: an unparseable token is logged and read as `0`. Callers
/// must validate the resulting interval rather than test for zero.
pub fn parse_timecode(token: &str) -> f64 {
    match try_parse_timecode(token) {
        Ok(seconds) => seconds,
        Err(e) => {
            warn!(token = token, error = %e, "Timestamp parse failed, using 0");
            0.0
        }
    }
}

/// Parse a timestamp token, reporting a wrong part count as an error
pub fn try_parse_timecode(token: &str) -> std::result::Result<f64, TimeCodeError> {
    let cleaned = token.trim().replacen(',', ".", 1);
    let cleaned = CUE_SETTINGS.replace(&cleaned, "");
    let cleaned = cleaned.trim();

    let parts: Vec<&str> = cleaned.split(':').collect();
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m, s] => (leading_int(h), leading_int(m), leading_float(s)),
        [m, s] => (0.0, leading_int(m), leading_float(s)),
        [s] => (0.0, 0.0, leading_float(s)),
        _ => {
            return Err(TimeCodeError {
                token: cleaned.to_string(),
                parts: parts.len(),
            })
        }
    };

    Ok(hours * 3600.0 + minutes * 60.0 + seconds)
}

/// Integer prefix of `s`, or 0
fn leading_int(s: &str) -> f64 {
    LEADING_INT
        .find(s.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Decimal prefix of `s`, or 0
fn leading_float(s: &str) -> f64 {
    LEADING_FLOAT
        .find(s.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert!(close(parse_timecode("01:02:03.400"), 3723.4));
    }

    #[test]
    fn test_minutes_seconds() {
        assert!(close(parse_timecode("02:03.400"), 123.4));
    }

    #[test]
    fn test_seconds_only() {
        assert!(close(parse_timecode("3.400"), 3.4));
    }

    #[test]
    fn test_srt_comma() {
        assert!(close(parse_timecode("00:00:05,250"), 5.25));
    }

    #[test]
    fn test_cue_settings_are_stripped() {
        assert!(close(parse_timecode("00:00:01.000 align:start position:0%"), 1.0));
        assert!(close(parse_timecode(" 00:00:02.500 LINE:0 "), 2.5));
        assert!(close(parse_timecode("00:00:03.000 size:80%"), 3.0));
    }

    #[test]
    fn test_non_numeric_parts_count_as_zero() {
        assert!(close(parse_timecode("xx:01:02.000"), 62.0));
        assert!(close(parse_timecode("00:yy:02.5"), 2.5));
        assert_eq!(parse_timecode("abc"), 0.0);
        assert_eq!(parse_timecode(""), 0.0);
    }

    #[test]
    fn test_prefix_numbers_are_read() {
        // integer parts truncate, seconds keep their fraction
        assert!(close(parse_timecode("1.9:00:01.25ms"), 3601.25));
    }

    #[test]
    fn test_too_many_parts() {
        let err = try_parse_timecode("00:00:00:01.000").unwrap_err();
        assert_eq!(err.parts, 4);
        assert_eq!(parse_timecode("00:00:00:01.000"), 0.0);
    }

    #[test]
    fn test_sign_applies_per_part() {
        // "-00" hours is negative zero, so only the seconds part counts
        assert!(close(parse_timecode("-00:00:01.000"), 1.0));
        assert!(close(parse_timecode("-1.5"), -1.5));
    }
}
