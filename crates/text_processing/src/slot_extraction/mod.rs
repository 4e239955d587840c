//! Entity Extraction
//!
//! Runs the field extractors of a single intent against the message and
//! coerces each capture to its typed [`EntityValue`]. A field whose regexes do
//! not match, or whose capture does not coerce, is left out of the map.
//! Extraction never fails.

use chat_intent_core::{EntityMap, EntityValue, UNKNOWN_INTENT};
use chrono::NaiveDate;

use crate::catalog::{normalize_literal, CaptureKind, FieldExtractor, FieldRule, PatternCatalog};
use crate::numerals::{fullwidth_to_ascii, parse_decimal, parse_identifier};

/// Date format accepted for non-display date fields
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Extract the entities of `intent` from `text`
///
/// Returns an empty map for [`UNKNOWN_INTENT`] and for names not in the catalog.
pub fn extract(text: &str, intent: &str, catalog: &PatternCatalog) -> EntityMap {
    if intent == UNKNOWN_INTENT {
        return EntityMap::new();
    }
    let Some(spec) = catalog.get(intent) else {
        tracing::debug!(intent, "No catalog entry for intent, skipping extraction");
        return EntityMap::new();
    };

    let text_lower = text.to_lowercase();
    let mut entities = EntityMap::new();
    for field in spec.fields() {
        if let Some(value) = extract_field(text, &text_lower, field) {
            entities.insert(field.name(), value);
        }
    }
    entities
}

/// Extract a single field
///
/// For capture rules only the first regex whose group participates is used;
/// when its capture fails to coerce the field is absent.
pub fn extract_field(text: &str, text_lower: &str, field: &FieldExtractor) -> Option<EntityValue> {
    match field.rule() {
        FieldRule::Flag { markers } => Some(EntityValue::BooleanFlag(
            markers.iter().any(|m| text_lower.contains(m.as_str())),
        )),
        FieldRule::Capture { kind, patterns } => {
            let (pattern, raw) = patterns
                .iter()
                .find_map(|p| p.capture(text).map(|raw| (p, raw)))?;

            let value = coerce(kind, raw);
            if value.is_none() {
                tracing::debug!(
                    field = field.name(),
                    pattern = pattern.as_str(),
                    raw,
                    "Captured value did not coerce"
                );
            }
            value
        }
    }
}

fn coerce(kind: &CaptureKind, raw: &str) -> Option<EntityValue> {
    match kind {
        CaptureKind::Identifier => parse_identifier(raw).map(EntityValue::Identifier),
        CaptureKind::Decimal => parse_decimal(raw).map(EntityValue::Decimal),
        CaptureKind::Text => non_empty(raw).map(|s| EntityValue::Text(s.to_string())),
        CaptureKind::Enum(mapping) => mapping
            .get(&normalize_literal(raw))
            .map(|canonical| EntityValue::EnumValue(canonical.clone())),
        CaptureKind::Date { display: true } => {
            non_empty(raw).map(|s| EntityValue::DateValue(s.to_string()))
        }
        CaptureKind::Date { display: false } => {
            let normalized = fullwidth_to_ascii(raw.trim());
            NaiveDate::parse_from_str(&normalized, ISO_DATE_FORMAT)
                .ok()
                .map(|date| EntityValue::DateValue(date.format(ISO_DATE_FORMAT).to_string()))
        }
    }
}

fn non_empty(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|s| !s.is_empty())
}
