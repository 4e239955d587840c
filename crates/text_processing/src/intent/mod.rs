//! Intent Scoring
//!
//! Every intent with rules for the message language is scored:
//!
//! - each distinct keyword found as a case-insensitive substring adds 1
//! - each pattern that matches adds 2
//!
//! The highest total wins. Equal totals go to the intent declared first in
//! the catalog. A best total of 0 yields [`UNKNOWN_INTENT`].

use chat_intent_core::{Language, UNKNOWN_INTENT};
use serde::{Deserialize, Serialize};

use crate::catalog::{IntentSpec, PatternCatalog};

/// Weight of a matched keyword
pub const KEYWORD_WEIGHT: u32 = 1;

/// Weight of a matched pattern
pub const PATTERN_WEIGHT: u32 = 2;

/// Intent name with its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentMatch {
    pub intent: String,
    pub score: u32,
}

impl IntentMatch {
    pub fn unknown() -> Self {
        Self {
            intent: UNKNOWN_INTENT.to_string(),
            score: 0,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}

/// Score a single intent against `text`
///
/// `text_lower` must be `text.to_lowercase()`.
pub fn score_intent(text: &str, text_lower: &str, language: Language, spec: &IntentSpec) -> u32 {
    let keyword_hits = spec
        .keywords(language)
        .iter()
        .filter(|keyword| text_lower.contains(keyword.as_str()))
        .count() as u32;
    let pattern_hits = spec
        .patterns(language)
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .count() as u32;

    keyword_hits * KEYWORD_WEIGHT + pattern_hits * PATTERN_WEIGHT
}

/// Pick the best-scoring intent
pub fn score(text: &str, language: Language, catalog: &PatternCatalog) -> IntentMatch {
    let text_lower = text.to_lowercase();

    let mut best: Option<(&IntentSpec, u32)> = None;
    for spec in catalog.iter() {
        let total = score_intent(text, &text_lower, language, spec);
        // Strictly greater: the first declared intent keeps ties
        if total > best.map_or(0, |(_, s)| s) {
            best = Some((spec, total));
        }
    }

    match best {
        Some((spec, total)) => IntentMatch {
            intent: spec.name().to_string(),
            score: total,
        },
        None => IntentMatch::unknown(),
    }
}

/// All intents with a non-zero score, best first
///
/// Equal scores keep catalog order.
pub fn rank(text: &str, language: Language, catalog: &PatternCatalog) -> Vec<IntentMatch> {
    let text_lower = text.to_lowercase();

    let mut matches: Vec<IntentMatch> = catalog
        .iter()
        .filter_map(|spec| {
            let total = score_intent(text, &text_lower, language, spec);
            (total > 0).then(|| IntentMatch {
                intent: spec.name().to_string(),
                score: total,
            })
        })
        .collect();

    // Stable sort preserves declaration order within a score
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}
