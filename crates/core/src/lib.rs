//! Core types for chat intent classification
//!
//! This crate provides the value types shared by the other crates:
//! - Language and script definitions (Japanese, English)
//! - Typed entity values and the entity map
//! - The classification result handed to message handlers

pub mod classification;
pub mod entity;
pub mod language;

pub use classification::{ClassificationResult, HELP_INTENT, UNKNOWN_INTENT};
pub use entity::{EntityMap, EntityValue};
pub use language::{Language, Script};
