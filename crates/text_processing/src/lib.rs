//! Intent classification and entity extraction for chat agents
//!
//! A chat message is classified in three steps:
//! - **Language detection**: Japanese when more than 20% of the code points
//!   are Japanese script, English otherwise
//! - **Intent scoring**: keyword hits weigh 1, pattern hits weigh 2, and the
//!   first declared intent wins ties
//! - **Entity extraction**: only the winning intent's field extractors run
//!
//! # Example
//!
//! ```
//! use chat_intent_text_processing::IntentClassifier;
//!
//! let classifier = IntentClassifier::builtin().unwrap();
//! let result = classifier.classify("fuel add vehicle:1 50000km 45.5L 175/L");
//!
//! assert_eq!(result.intent, "fuel_add");
//! assert_eq!(result.entities.decimal("liters"), Some(45.5));
//! ```

pub mod catalog;
pub mod detect;
pub mod dispatch;
pub mod intent;
pub mod numerals;
pub mod slot_extraction;

mod logging;
mod pipeline;

pub use catalog::{FieldExtractor, IntentSpec, PatternCatalog};
pub use detect::LanguageDetector;
pub use dispatch::{Dispatcher, DispatcherBuilder, IntentHandler};
pub use intent::IntentMatch;
pub use logging::init_tracing;
pub use pipeline::IntentClassifier;
pub use slot_extraction::extract;

// Re-export shared types so hosts need a single dependency
pub use chat_intent_config::{ConfigError, IntentsConfig, Settings};
pub use chat_intent_core::{
    ClassificationResult, EntityMap, EntityValue, Language, HELP_INTENT, UNKNOWN_INTENT,
};
