//! Configuration management for chat intent classification
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, `config/{env}.yaml`)
//! - Environment variables (CHAT_INTENT_ prefix)
//!
//! # Intent Catalog
//!
//! Intent definitions (keywords, patterns and field extractors per language)
//! are plain YAML data. A bilingual catalog for the resource-planning and
//! vehicle-management agents is embedded in this crate; hosts can point
//! `catalog.path` at their own file instead.

pub mod intents;
pub mod settings;

pub use intents::{
    EnumMapping, FieldDefinition, FieldKind, IntentDefinition, IntentsConfig, PatternRule,
};
pub use settings::{
    load_settings, load_settings_from, CatalogSettings, ObservabilityConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Duplicate intent name: {0}")]
    DuplicateIntent(String),

    #[error("Intent {0} has no keywords or patterns in any language")]
    EmptyIntent(String),

    #[error("Intent name {0} is reserved")]
    ReservedIntentName(String),

    #[error("Invalid pattern for {intent}: {pattern} ({message})")]
    InvalidPattern {
        intent: String,
        pattern: String,
        message: String,
    },

    #[error("No handler registered for required intent: {0}")]
    MissingHandler(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
