//! Parser configuration

use serde::{Deserialize, Serialize};

/// Parse and segmentation policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Apply the `0 <= start < end` interval check to SRT blocks.
    /// When false, every structurally complete block is kept verbatim.
    pub validate_srt: bool,
    /// Shortest sentence fragment kept by the splitter, in characters
    pub min_sentence_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            validate_srt: true,
            min_sentence_chars: 3,
        }
    }
}

impl ParserConfig {
    /// Verbatim SRT acceptance, matching legacy player output
    pub fn legacy() -> Self {
        Self {
            validate_srt: false,
            ..Default::default()
        }
    }

    /// Parse a JSON config; missing fields take defaults
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert!(config.validate_srt);
        assert_eq!(config.min_sentence_chars, 3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ParserConfig::from_json(r#"{"validate_srt": false}"#).unwrap();
        assert!(!config.validate_srt);
        assert_eq!(config.min_sentence_chars, 3);
    }

    #[test]
    fn test_invalid_json() {
        let err = ParserConfig::from_json("not json").unwrap_err();
        assert_eq!(err.error_code(), "JSON");
    }
}
