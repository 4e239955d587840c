//! Classification pipeline
//!
//! `text -> language -> scored intent -> entities of the winner`. Each step is
//! pure; the classifier only holds the shared catalog and can be used from any
//! number of threads or tasks at once.

use std::sync::Arc;

use chat_intent_config::{ConfigError, Settings};
use chat_intent_core::ClassificationResult;

use crate::catalog::PatternCatalog;
use crate::detect::LanguageDetector;
use crate::intent::{self, IntentMatch};
use crate::slot_extraction;

/// Intent classifier over a shared catalog
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    catalog: Arc<PatternCatalog>,
    detector: LanguageDetector,
}

impl IntentClassifier {
    pub fn new(catalog: Arc<PatternCatalog>) -> Self {
        Self {
            catalog,
            detector: LanguageDetector::new(),
        }
    }

    /// Classifier over the built-in catalog
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self::new(PatternCatalog::builtin()?))
    }

    /// Classifier over the catalog named by `settings`
    ///
    /// Falls back to the built-in catalog when no path is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        match &settings.catalog.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading intent catalog");
                Ok(Self::new(Arc::new(PatternCatalog::load(path)?)))
            }
            None => Self::builtin(),
        }
    }

    pub fn catalog(&self) -> &Arc<PatternCatalog> {
        &self.catalog
    }

    /// Classify a chat message
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let language = self.detector.detect(text);
        let best = intent::score(text, language, &self.catalog);

        let result = if best.is_unknown() {
            ClassificationResult::unknown(language, text)
        } else {
            let entities = slot_extraction::extract(text, &best.intent, &self.catalog);
            ClassificationResult {
                language,
                intent: best.intent,
                score: best.score,
                entities,
                raw_text: text.to_string(),
            }
        };

        tracing::debug!(
            language = %result.language,
            intent = %result.intent,
            score = result.score,
            entities = result.entities.len(),
            "Classified message"
        );
        result
    }

    /// Every intent with a non-zero score, best first
    pub fn rank(&self, text: &str) -> Vec<IntentMatch> {
        let language = self.detector.detect(text);
        intent::rank(text, language, &self.catalog)
    }
}
