//! Typed entities extracted from a chat message

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of a single extracted field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EntityValue {
    /// Positive integer (record IDs, odometer readings)
    Identifier(u64),
    /// Non-negative decimal (quantities, prices)
    Decimal(f64),
    /// Free text (names)
    Text(String),
    /// Canonical value of a mapped literal
    EnumValue(String),
    /// ISO date or display date text
    DateValue(String),
    /// Marker presence flag
    BooleanFlag(bool),
}

impl EntityValue {
    pub fn as_identifier(&self) -> Option<u64> {
        match self {
            Self::Identifier(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// String payload of text, enum and date values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::EnumValue(s) | Self::DateValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::BooleanFlag(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Text(s) | Self::EnumValue(s) | Self::DateValue(s) => write!(f, "{}", s),
            Self::BooleanFlag(v) => write!(f, "{}", v),
        }
    }
}

/// Entities extracted for one classification, keyed by field name
///
/// Fields that did not match are absent. Iteration follows key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap(BTreeMap<String, EntityValue>);

impl EntityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: EntityValue) {
        self.0.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&EntityValue> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn identifier(&self, field: &str) -> Option<u64> {
        self.get(field).and_then(EntityValue::as_identifier)
    }

    pub fn decimal(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(EntityValue::as_decimal)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(EntityValue::as_str)
    }

    pub fn flag(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(EntityValue::as_flag)
    }
}

impl FromIterator<(String, EntityValue)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (String, EntityValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EntityMap {
    type Item = (String, EntityValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, EntityValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
