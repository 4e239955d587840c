//! Language detection
//!
//! A message is Japanese when more than a fifth of its code points are
//! Hiragana, Katakana or CJK ideographs. Everything else, including the empty
//! string, is English.

use chat_intent_core::{Language, Script};

/// Share of Japanese code points above which a message is Japanese, as 1/N
const JAPANESE_RATIO_DENOMINATOR: usize = 5;

/// Script-ratio language detector
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect the rule-set language of `text`
    pub fn detect(&self, text: &str) -> Language {
        let (japanese, total) = Self::count(text);

        // japanese / total > 1/5, without floating point
        if japanese * JAPANESE_RATIO_DENOMINATOR > total {
            Language::Japanese
        } else {
            Language::English
        }
    }

    /// Fraction of Japanese code points, 0.0 for empty text
    pub fn japanese_ratio(&self, text: &str) -> f32 {
        let (japanese, total) = Self::count(text);
        if total == 0 {
            return 0.0;
        }
        japanese as f32 / total as f32
    }

    fn count(text: &str) -> (usize, usize) {
        text.chars().fold((0, 0), |(japanese, total), c| {
            (japanese + usize::from(Script::is_japanese(c)), total + 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_japanese() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("ヘルプ"), Language::Japanese);
        assert_eq!(detector.detect("給油を記録して"), Language::Japanese);
    }

    #[test]
    fn test_detect_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("show resource list"), Language::English);
        assert_eq!(detector.detect("１２３：？"), Language::English);
    }

    #[test]
    fn test_empty_is_english() {
        assert_eq!(LanguageDetector::new().detect(""), Language::English);
        assert_eq!(LanguageDetector::new().japanese_ratio(""), 0.0);
    }

    #[test]
    fn test_ratio_boundary() {
        let detector = LanguageDetector::new();
        // 1 of 5 code points: exactly 20%
        assert_eq!(detector.detect("車abcd"), Language::English);
        // 2 of 9 code points: just above 20%
        assert_eq!(detector.detect("車両abcdefg"), Language::Japanese);
    }

    #[test]
    fn test_mixed_message() {
        // 4 of 16 code points
        let text = "fuel 給油 車両:1 50L";
        assert_eq!(text.chars().count(), 16);
        assert_eq!(LanguageDetector::new().detect(text), Language::Japanese);
    }
}
