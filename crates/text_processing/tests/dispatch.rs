//! Classifier and dispatcher wired together the way an agent host does

use chat_intent_text_processing::{Dispatcher, EntityMap, IntentClassifier};

fn dispatcher() -> Dispatcher {
    Dispatcher::builder()
        .on_unknown(|_: &EntityMap| "コマンドが分かりませんでした。「ヘルプ」と入力してください。".to_string())
        .on_help(|_: &EntityMap| "fuel add / vehicle list / resource list".to_string())
        .on("fuel_add", |e: &EntityMap| {
            format!(
                "vehicle {}: {} L",
                e.identifier("vehicle_id").unwrap_or_default(),
                e.decimal("liters").unwrap_or_default()
            )
        })
        .build()
        .unwrap()
}

#[test]
fn test_route_classified_messages() {
    let classifier = IntentClassifier::builtin().unwrap();
    let dispatcher = dispatcher();

    let reply = dispatcher.dispatch(&classifier.classify("fuel add vehicle:1 50000km 45.5L 175/L"));
    assert_eq!(reply, "vehicle 1: 45.5 L");

    let reply = dispatcher.dispatch(&classifier.classify("ヘルプ"));
    assert_eq!(reply, "fuel add / vehicle list / resource list");

    let reply = dispatcher.dispatch(&classifier.classify("asdkj qwoeiru random text"));
    assert!(reply.contains("ヘルプ"));

    // Recognized but unhandled intents use the fallback
    let reply = dispatcher.dispatch(&classifier.classify("show resource list"));
    assert!(reply.contains("ヘルプ"));
}
