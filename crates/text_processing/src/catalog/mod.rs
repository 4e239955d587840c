//! Pattern Catalog
//!
//! Immutable table of intents compiled from [`IntentsConfig`]. Building the
//! catalog validates every definition up front: names are unique, every
//! intent has rules in at least one language, and every regex compiles.
//! Keywords are lower-cased so scoring can match them against lower-cased
//! text. Declaration order is preserved and is the scoring tie-break.
//!
//! A built catalog is never mutated; share it as `Arc<PatternCatalog>`.

mod field;

pub use field::{CaptureKind, CapturePattern, FieldExtractor, FieldRule};

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use chat_intent_config::{ConfigError, IntentDefinition, IntentsConfig};
use chat_intent_core::{Language, UNKNOWN_INTENT};
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};

pub(crate) use field::normalize_literal;

static BUILTIN: OnceCell<Arc<PatternCatalog>> = OnceCell::new();

/// Compile a case-insensitive regex belonging to `intent`
pub(crate) fn compile_regex(intent: &str, pattern: &str) -> Result<Regex, ConfigError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ConfigError::InvalidPattern {
            intent: intent.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

/// Compiled intent
#[derive(Debug, Clone)]
pub struct IntentSpec {
    name: String,
    description: String,
    /// Lower-cased, de-duplicated keywords per language
    keywords: BTreeMap<Language, Vec<String>>,
    patterns: BTreeMap<Language, Vec<Regex>>,
    fields: Vec<FieldExtractor>,
}

impl IntentSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Field extractors in declaration order
    pub fn fields(&self) -> &[FieldExtractor] {
        &self.fields
    }

    pub fn keywords(&self, language: Language) -> &[String] {
        self.keywords.get(&language).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn patterns(&self, language: Language) -> &[Regex] {
        self.patterns.get(&language).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if the intent can score anything in `language`
    pub fn has_rules_for(&self, language: Language) -> bool {
        !self.keywords(language).is_empty() || !self.patterns(language).is_empty()
    }

    fn compile(def: &IntentDefinition) -> Result<Self, ConfigError> {
        let name = def.name.trim();

        let mut keywords = BTreeMap::new();
        for (language, words) in &def.keywords {
            let mut seen = HashSet::new();
            let mut compiled = Vec::with_capacity(words.len());
            for word in words {
                let word = word.trim().to_lowercase();
                if word.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: format!("intents.{}.keywords.{}", name, language),
                        message: "Keyword must not be blank".to_string(),
                    });
                }
                if seen.insert(word.clone()) {
                    compiled.push(word);
                }
            }
            if !compiled.is_empty() {
                keywords.insert(*language, compiled);
            }
        }

        let mut patterns = BTreeMap::new();
        for (language, sources) in &def.patterns {
            let mut seen = HashSet::new();
            let mut compiled = Vec::with_capacity(sources.len());
            for source in sources {
                if seen.insert(source.as_str()) {
                    compiled.push(compile_regex(name, source)?);
                }
            }
            if !compiled.is_empty() {
                patterns.insert(*language, compiled);
            }
        }

        let mut fields: Vec<FieldExtractor> = Vec::with_capacity(def.fields.len());
        for field_def in &def.fields {
            let field = FieldExtractor::compile(name, field_def)?;
            if fields.iter().any(|f| f.name() == field.name()) {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}.fields", name),
                    message: format!("Duplicate field {}", field.name()),
                });
            }
            fields.push(field);
        }

        let spec = Self {
            name: name.to_string(),
            description: def.description.clone(),
            keywords,
            patterns,
            fields,
        };

        if !Language::all().iter().any(|lang| spec.has_rules_for(*lang)) {
            return Err(ConfigError::EmptyIntent(spec.name));
        }

        Ok(spec)
    }
}

/// Ordered, immutable collection of compiled intents
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    intents: Vec<IntentSpec>,
}

impl PatternCatalog {
    /// Build from configuration
    pub fn build(config: &IntentsConfig) -> Result<Self, ConfigError> {
        Self::from_definitions(&config.intents)
    }

    /// Build from intent definitions, keeping their order
    pub fn from_definitions(definitions: &[IntentDefinition]) -> Result<Self, ConfigError> {
        let mut names = HashSet::new();
        let mut intents = Vec::with_capacity(definitions.len());

        for def in definitions {
            let name = def.name.trim();
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "intents.name".to_string(),
                    message: "Intent name must not be empty".to_string(),
                });
            }
            if name.eq_ignore_ascii_case(UNKNOWN_INTENT) {
                return Err(ConfigError::ReservedIntentName(name.to_string()));
            }
            if !names.insert(name) {
                return Err(ConfigError::DuplicateIntent(name.to_string()));
            }
            intents.push(IntentSpec::compile(def)?);
        }

        let catalog = Self { intents };
        tracing::info!(
            intents = catalog.len(),
            fields = catalog.intents.iter().map(|i| i.fields.len()).sum::<usize>(),
            "Built pattern catalog"
        );
        Ok(catalog)
    }

    /// Load a YAML catalog file and build it
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        Self::build(&IntentsConfig::load(path)?)
    }

    /// Shared built-in catalog, compiled on first use
    pub fn builtin() -> Result<Arc<Self>, ConfigError> {
        BUILTIN
            .get_or_try_init(|| {
                let config = IntentsConfig::builtin()?;
                Self::build(&config).map(Arc::new)
            })
            .cloned()
    }

    /// Get an intent by name
    pub fn get(&self, name: &str) -> Option<&IntentSpec> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// Intent names in declaration order
    pub fn intent_names(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Intents in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &IntentSpec> {
        self.intents.iter()
    }
}
