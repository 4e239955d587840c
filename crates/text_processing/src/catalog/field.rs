//! Compiled field extractors

use std::collections::HashMap;

use chat_intent_config::{ConfigError, FieldDefinition, FieldKind};
use regex::Regex;

use super::compile_regex;

/// Regex plus the capture group holding the value
#[derive(Debug, Clone)]
pub struct CapturePattern {
    regex: Regex,
    group: usize,
}

impl CapturePattern {
    /// Text of the configured group in the first match where it participates
    pub fn capture<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .captures_iter(text)
            .find_map(|caps| caps.get(self.group))
            .map(|m| m.as_str())
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn group(&self) -> usize {
        self.group
    }
}

/// How a captured value is coerced
#[derive(Debug, Clone)]
pub enum CaptureKind {
    Identifier,
    Decimal,
    Text,
    /// Normalized literal -> canonical value
    Enum(HashMap<String, String>),
    /// `display` dates pass through without calendar validation
    Date { display: bool },
}

/// Extraction rule of a field
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// Ordered regexes; the first whose group participates wins
    Capture {
        kind: CaptureKind,
        patterns: Vec<CapturePattern>,
    },
    /// True when any lowercase marker occurs in the text
    Flag { markers: Vec<String> },
}

/// Field extractor bound to one intent
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    name: String,
    kind: FieldKind,
    rule: FieldRule,
}

impl FieldExtractor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn rule(&self) -> &FieldRule {
        &self.rule
    }

    /// Compile and validate a field definition of `intent`
    pub(crate) fn compile(intent: &str, def: &FieldDefinition) -> Result<Self, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: format!("intents.{}.fields.{}", intent, def.name),
            message,
        };

        if def.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("intents.{}.fields", intent),
                message: "Field name must not be empty".to_string(),
            });
        }
        if def.display && def.kind != FieldKind::Date {
            return Err(invalid("display applies to date fields only".to_string()));
        }

        let capture_kind = match def.kind {
            FieldKind::Identifier => Some(CaptureKind::Identifier),
            FieldKind::Decimal => Some(CaptureKind::Decimal),
            FieldKind::Text => Some(CaptureKind::Text),
            FieldKind::Date => Some(CaptureKind::Date {
                display: def.display,
            }),
            FieldKind::Enum => Some(CaptureKind::Enum(
                compile_enum_mapping(def).map_err(&invalid)?,
            )),
            FieldKind::Flag => None,
        };

        let rule = match capture_kind {
            Some(kind) => FieldRule::Capture {
                kind,
                patterns: compile_patterns(intent, def, &invalid)?,
            },
            None => FieldRule::Flag {
                markers: compile_markers(def).map_err(&invalid)?,
            },
        };

        Ok(Self {
            name: def.name.trim().to_string(),
            kind: def.kind,
            rule,
        })
    }
}

fn compile_patterns(
    intent: &str,
    def: &FieldDefinition,
    invalid: impl Fn(String) -> ConfigError,
) -> Result<Vec<CapturePattern>, ConfigError> {
    if def.patterns.is_empty() {
        return Err(invalid("Field needs at least one pattern".to_string()));
    }

    let mut patterns = Vec::with_capacity(def.patterns.len());
    for rule in &def.patterns {
        let regex = compile_regex(intent, &rule.regex)?;
        // captures_len counts the implicit whole-match group
        if rule.group >= regex.captures_len() {
            return Err(invalid(format!(
                "Capture group {} out of range for {}",
                rule.group, rule.regex
            )));
        }
        patterns.push(CapturePattern {
            regex,
            group: rule.group,
        });
    }
    Ok(patterns)
}

fn compile_markers(def: &FieldDefinition) -> Result<Vec<String>, String> {
    let mut markers: Vec<String> = Vec::new();
    for marker in &def.markers {
        let marker = marker.trim().to_lowercase();
        if marker.is_empty() {
            return Err("Marker must not be empty".to_string());
        }
        if !markers.contains(&marker) {
            markers.push(marker);
        }
    }
    if markers.is_empty() {
        return Err("Flag field needs at least one marker".to_string());
    }
    Ok(markers)
}

/// Lowercase and collapse whitespace runs
pub(crate) fn normalize_literal(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn compile_enum_mapping(def: &FieldDefinition) -> Result<HashMap<String, String>, String> {
    if def.values.is_empty() {
        return Err("Enum field needs at least one value mapping".to_string());
    }

    let mut mapping: HashMap<String, String> = HashMap::new();
    for value in &def.values {
        let canonical = value.canonical.trim();
        if canonical.is_empty() {
            return Err("Canonical value must not be empty".to_string());
        }

        for literal in std::iter::once(canonical).chain(value.literals.iter().map(String::as_str)) {
            let key = normalize_literal(literal);
            if key.is_empty() {
                return Err(format!("Empty literal for {}", canonical));
            }
            if let Some(existing) = mapping.get(&key) {
                if existing != canonical {
                    return Err(format!(
                        "Literal {} maps to both {} and {}",
                        literal, existing, canonical
                    ));
                }
                continue;
            }
            mapping.insert(key, canonical.to_string());
        }
    }

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_intent_config::{EnumMapping, PatternRule};

    fn field(kind: FieldKind) -> FieldDefinition {
        FieldDefinition {
            name: "value".to_string(),
            kind,
            patterns: vec![PatternRule {
                regex: r"value\s*[:：]\s*(\S+)".to_string(),
                group: 1,
            }],
            values: Vec::new(),
            markers: Vec::new(),
            display: false,
        }
    }

    #[test]
    fn test_capture_uses_configured_group() {
        let mut def = field(FieldKind::Text);
        def.patterns = vec![PatternRule {
            regex: r"(from)\s+(\S+)".to_string(),
            group: 2,
        }];
        let extractor = FieldExtractor::compile("move", &def).unwrap();
        let FieldRule::Capture { patterns, .. } = extractor.rule() else {
            panic!("expected capture rule");
        };
        assert_eq!(patterns[0].capture("move from tokyo"), Some("tokyo"));
    }

    #[test]
    fn test_non_participating_group_skips_match() {
        let mut def = field(FieldKind::Identifier);
        def.patterns = vec![PatternRule {
            regex: r"#(\d+)|id".to_string(),
            group: 1,
        }];
        let extractor = FieldExtractor::compile("show", &def).unwrap();
        let FieldRule::Capture { patterns, .. } = extractor.rule() else {
            panic!("expected capture rule");
        };
        assert_eq!(patterns[0].capture("id first, then #7"), Some("7"));
        assert_eq!(patterns[0].capture("id only"), None);
    }

    #[test]
    fn test_group_out_of_range() {
        let mut def = field(FieldKind::Text);
        def.patterns[0].group = 2;
        assert!(matches!(
            FieldExtractor::compile("x", &def),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_invalid_field_regex() {
        let mut def = field(FieldKind::Text);
        def.patterns[0].regex = "(unclosed".to_string();
        assert!(matches!(
            FieldExtractor::compile("x", &def),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_missing_patterns() {
        let mut def = field(FieldKind::Decimal);
        def.patterns.clear();
        assert!(FieldExtractor::compile("x", &def).is_err());
    }

    #[test]
    fn test_flag_markers_normalized() {
        let mut def = field(FieldKind::Flag);
        def.markers = vec!["AUTO".to_string(), "auto".to_string(), "自動".to_string()];
        let extractor = FieldExtractor::compile("x", &def).unwrap();
        match extractor.rule() {
            FieldRule::Flag { markers } => assert_eq!(markers, &vec!["auto", "自動"]),
            other => panic!("unexpected rule {:?}", other),
        }
    }

    #[test]
    fn test_flag_without_markers() {
        assert!(FieldExtractor::compile("x", &field(FieldKind::Flag)).is_err());
    }

    #[test]
    fn test_enum_mapping() {
        let mut def = field(FieldKind::Enum);
        def.values = vec![
            EnumMapping {
                canonical: "oil_change".to_string(),
                literals: vec!["Oil  Change".to_string(), "オイル".to_string()],
            },
            EnumMapping {
                canonical: "tire".to_string(),
                literals: vec!["タイヤ".to_string()],
            },
        ];
        let extractor = FieldExtractor::compile("x", &def).unwrap();
        let FieldRule::Capture {
            kind: CaptureKind::Enum(mapping),
            ..
        } = extractor.rule()
        else {
            panic!("expected enum rule");
        };
        assert_eq!(mapping["oil change"], "oil_change");
        assert_eq!(mapping["オイル"], "oil_change");
        assert_eq!(mapping["oil_change"], "oil_change");
        assert_eq!(mapping["tire"], "tire");
    }

    #[test]
    fn test_enum_conflicting_literal() {
        let mut def = field(FieldKind::Enum);
        def.values = vec![
            EnumMapping {
                canonical: "pending".to_string(),
                literals: vec!["保留".to_string()],
            },
            EnumMapping {
                canonical: "retired".to_string(),
                literals: vec!["保留".to_string()],
            },
        ];
        assert!(matches!(
            FieldExtractor::compile("x", &def),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_enum_without_values() {
        assert!(FieldExtractor::compile("x", &field(FieldKind::Enum)).is_err());
    }

    #[test]
    fn test_display_only_on_dates() {
        let mut def = field(FieldKind::Text);
        def.display = true;
        assert!(FieldExtractor::compile("x", &def).is_err());

        let mut def = field(FieldKind::Date);
        def.display = true;
        assert!(FieldExtractor::compile("x", &def).is_ok());
    }
}
