//! Intent Configuration
//!
//! Config-driven intent definitions. Every intent carries language-keyed
//! keyword and pattern tables plus the field extractors that run when the
//! intent wins. Definitions are plain data; compilation and validation happen
//! when the pattern catalog is built.

use chat_intent_core::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

/// Built-in bilingual catalog
const BUILTIN_INTENTS: &str = include_str!("../data/intents.yaml");

/// Intents configuration loaded from intents.yaml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntentsConfig {
    /// Intent definitions, in tie-break order
    #[serde(default)]
    pub intents: Vec<IntentDefinition>,
}

impl IntentsConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            intents = config.intents.len(),
            "Loaded intent definitions"
        );
        Ok(config)
    }

    /// Parse from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// The catalog embedded in this crate
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_yaml_str(BUILTIN_INTENTS)
    }

    /// Get an intent definition by name
    pub fn get_intent(&self, name: &str) -> Option<&IntentDefinition> {
        self.intents.iter().find(|i| i.name == name)
    }

    /// Get all intent names in declaration order
    pub fn intent_names(&self) -> Vec<&str> {
        self.intents.iter().map(|i| i.name.as_str()).collect()
    }

    /// Check if an intent exists
    pub fn has_intent(&self, name: &str) -> bool {
        self.intents.iter().any(|i| i.name == name)
    }
}

/// Single intent definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentDefinition {
    /// Intent name (identifier)
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
    /// Keywords per language, matched as case-insensitive substrings
    #[serde(default)]
    pub keywords: BTreeMap<Language, Vec<String>>,
    /// Regex patterns per language, matched case-insensitively
    #[serde(default)]
    pub patterns: BTreeMap<Language, Vec<String>>,
    /// Field extractors, run only when this intent wins
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl IntentDefinition {
    /// Check if the intent has any keyword or pattern for `language`
    pub fn has_rules_for(&self, language: Language) -> bool {
        let non_empty = |table: &BTreeMap<Language, Vec<String>>| {
            table.get(&language).is_some_and(|rules| !rules.is_empty())
        };
        non_empty(&self.keywords) || non_empty(&self.patterns)
    }

    /// Check if the intent has rules in at least one language
    pub fn has_rules(&self) -> bool {
        Language::all().iter().any(|lang| self.has_rules_for(*lang))
    }

    /// Get a field definition by name
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// How a captured field value is coerced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Positive integer
    #[serde(alias = "id", alias = "integer")]
    Identifier,
    /// Non-negative float
    #[serde(alias = "number")]
    Decimal,
    /// Trimmed free text
    Text,
    /// Literal looked up in a canonical mapping
    #[serde(alias = "enum_value")]
    Enum,
    /// ISO date, or free-form text for display dates
    #[serde(alias = "date_value")]
    Date,
    /// Marker token presence
    #[serde(alias = "boolean_flag", alias = "bool")]
    Flag,
}

/// Field extractor definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Entity name in the result map
    pub name: String,
    /// Result type
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Regexes tried in order; the first match wins
    #[serde(default)]
    pub patterns: Vec<PatternRule>,
    /// Literal to canonical mapping (enum fields)
    #[serde(default)]
    pub values: Vec<EnumMapping>,
    /// Marker tokens (flag fields)
    #[serde(default)]
    pub markers: Vec<String>,
    /// Pass free-form date text through unvalidated (date fields)
    #[serde(default)]
    pub display: bool,
}

/// Regex with the capture group holding the value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    pub regex: String,
    #[serde(default = "default_group")]
    pub group: usize,
}

fn default_group() -> usize {
    1
}

/// Canonical enum value and the literals that map to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumMapping {
    pub canonical: String,
    #[serde(default)]
    pub literals: Vec<String>,
}
