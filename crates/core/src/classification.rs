//! Classification result types

use serde::{Deserialize, Serialize};

use crate::entity::EntityMap;
use crate::language::Language;

/// Sentinel intent for messages no catalog entry matched
pub const UNKNOWN_INTENT: &str = "Unknown";

/// Intent name hosts must answer with usage text
pub const HELP_INTENT: &str = "help";

/// Output of one classification call
///
/// Built once per message and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Language whose rule set was applied
    pub language: Language,
    /// Winning intent name, or [`UNKNOWN_INTENT`]
    pub intent: String,
    /// Evidence weight of the winning intent (keyword = 1, pattern = 2)
    pub score: u32,
    /// Entities extracted for the winning intent
    pub entities: EntityMap,
    /// Message text as received
    pub raw_text: String,
}

impl ClassificationResult {
    /// Result for a message that matched nothing
    pub fn unknown(language: Language, raw_text: impl Into<String>) -> Self {
        Self {
            language,
            intent: UNKNOWN_INTENT.to_string(),
            score: 0,
            entities: EntityMap::new(),
            raw_text: raw_text.into(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}
