//! Classification properties over small purpose-built catalogs

use std::sync::Arc;

use chat_intent_text_processing::{
    IntentClassifier, IntentsConfig, Language, LanguageDetector, PatternCatalog, UNKNOWN_INTENT,
};

fn classifier(yaml: &str) -> IntentClassifier {
    let config = IntentsConfig::from_yaml_str(yaml).unwrap();
    IntentClassifier::new(Arc::new(PatternCatalog::build(&config).unwrap()))
}

const STATUS: &str = r#"
intents:
  - name: by_pattern
    patterns:
      en: ['\bstatus\b']
    fields:
      - name: pattern_only
        type: identifier
        patterns:
          - regex: '#(\d+)'
  - name: by_keywords
    keywords:
      en: ["check", "state"]
    fields:
      - name: keyword_only
        type: identifier
        patterns:
          - regex: '#(\d+)'
"#;

#[test]
fn test_tie_goes_to_first_declared_both_orders() {
    let text = "check status state #9";

    let forward = classifier(STATUS).classify(text);
    assert_eq!(forward.intent, "by_pattern");
    assert_eq!(forward.score, 2);
    assert_eq!(forward.entities.identifier("pattern_only"), Some(9));
    assert!(!forward.entities.contains("keyword_only"));

    let mut config = IntentsConfig::from_yaml_str(STATUS).unwrap();
    config.intents.reverse();
    let reversed =
        IntentClassifier::new(Arc::new(PatternCatalog::build(&config).unwrap())).classify(text);
    assert_eq!(reversed.intent, "by_keywords");
    assert_eq!(reversed.score, 2);
    assert_eq!(reversed.entities.identifier("keyword_only"), Some(9));
    assert!(!reversed.entities.contains("pattern_only"));
}

#[test]
fn test_single_keyword_scores_one() {
    let result = classifier(STATUS).classify("please check");
    assert_eq!(result.intent, "by_keywords");
    assert_eq!(result.score, 1);
}

#[test]
fn test_no_overlap_is_unknown() {
    let result = classifier(STATUS).classify("nothing relevant #4");
    assert_eq!(result.intent, UNKNOWN_INTENT);
    assert_eq!(result.score, 0);
    assert!(result.entities.is_empty());
}

#[test]
fn test_language_boundary() {
    let yaml = r#"
intents:
  - name: english_side
    keywords:
      en: ["a"]
  - name: japanese_side
    keywords:
      ja: ["車"]
"#;
    let classifier = classifier(yaml);

    let at_twenty = format!("{}{}", "車".repeat(20), "a".repeat(80));
    let above = format!("{}{}", "車".repeat(21), "a".repeat(79));

    assert_eq!(LanguageDetector::new().detect(&at_twenty), Language::English);
    let result = classifier.classify(&at_twenty);
    assert_eq!(result.language, Language::English);
    assert_eq!(result.intent, "english_side");

    let result = classifier.classify(&above);
    assert_eq!(result.language, Language::Japanese);
    assert_eq!(result.intent, "japanese_side");
}

#[test]
fn test_classify_is_repeatable() {
    let classifier = IntentClassifier::builtin().unwrap();
    for text in [
        "リソース追加 タイプ:CPU 名前:server-1 容量:100",
        "fuel add vehicle:1 50000km 45.5L 175/L",
        "asdkj qwoeiru random text",
        "",
    ] {
        assert_eq!(classifier.classify(text), classifier.classify(text), "{}", text);
    }
}

#[test]
fn test_empty_message() {
    let result = IntentClassifier::builtin().unwrap().classify("");
    assert_eq!(result.language, Language::English);
    assert_eq!(result.intent, UNKNOWN_INTENT);
}

#[test]
fn test_catalog_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intents.yaml");
    std::fs::write(
        &path,
        "intents:\n  - name: ping\n    keywords:\n      en: [\"ping\"]\n",
    )
    .unwrap();

    let mut settings = chat_intent_text_processing::Settings::default();
    settings.catalog.path = Some(path);
    let classifier = IntentClassifier::from_settings(&settings).unwrap();
    assert_eq!(classifier.catalog().intent_names(), vec!["ping"]);
    assert_eq!(classifier.classify("PING").intent, "ping");
}
