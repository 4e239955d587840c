//! Language definitions for chat messages
//!
//! Messages are processed with either the Japanese or the English rule set.
//! Script ranges are used by the language detector to count Japanese
//! code points.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Language {
    #[default]
    #[serde(rename = "en", alias = "english")]
    English,
    #[serde(rename = "ja", alias = "japanese", alias = "jp")]
    Japanese,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
        }
    }

    /// Scripts counted as evidence for this language
    pub fn scripts(&self) -> &'static [Script] {
        match self {
            Self::English => &[Script::Latin],
            Self::Japanese => &[Script::Hiragana, Script::Katakana, Script::Han],
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Japanese]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Script systems relevant to language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Hiragana,
    Katakana,
    /// CJK Unified Ideographs (kanji)
    Han,
}

impl Script {
    /// Get Unicode block for this script
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Hiragana => (0x3040, 0x309F),
            Self::Katakana => (0x30A0, 0x30FF),
            Self::Han => (0x4E00, 0x9FFF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let (start, end) = self.unicode_range();
        (start..=end).contains(&(c as u32))
    }

    /// Check if a character is Hiragana, Katakana or a CJK ideograph
    pub fn is_japanese(c: char) -> bool {
        Language::Japanese
            .scripts()
            .iter()
            .any(|script| script.contains_char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::Japanese.code(), "ja");
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn test_script_ranges() {
        assert!(Script::Hiragana.contains_char('あ'));
        assert!(Script::Katakana.contains_char('ー'));
        assert!(Script::Han.contains_char('車'));
        assert!(!Script::Han.contains_char('a'));
        assert!(Script::Latin.contains_char('z'));
    }

    #[test]
    fn test_is_japanese() {
        assert!(Script::is_japanese('ヘ'));
        assert!(Script::is_japanese('給'));
        assert!(!Script::is_japanese('：'));
        assert!(!Script::is_japanese('１'));
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Language::Japanese).unwrap();
        assert_eq!(json, "\"ja\"");
        let parsed: Language = serde_json::from_str("\"english\"").unwrap();
        assert_eq!(parsed, Language::English);
    }
}
