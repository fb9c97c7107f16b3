//! JSON object commands: stamping overwrites any caller-supplied source.

use command_source::{Command, CommandSource, Reply};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

#[test]
fn trigger_adds_source() {
    let mut source = CommandSource::<Value, Value>::local("Svc");
    source.register_handler(Reply::ready);

    let delivered = source.trigger(object(json!({ "data": 9 }))).unwrap().wait();
    assert_eq!(delivered, json!({ "data": 9, "source": "Svc" }));
}

#[test]
fn caller_supplied_source_is_overridden() {
    let mut source = CommandSource::<Value, String>::local("Svc");
    source.register_handler(|cmd| Reply::ready(cmd.source().to_string()));

    let forged = object(json!({ "data": 9, "source": "Impostor" }));
    assert_eq!(source.trigger(forged).unwrap().wait(), "Svc");
}

#[test]
fn other_fields_are_kept_as_given() {
    let mut source = CommandSource::<Value, Value>::local("Modal");
    source.register_handler(Reply::ready);

    let payload = json!({
        "type": "CreateDeck",
        "payload": { "name": "Physics", "tags": ["science"] },
    });
    let delivered = source.trigger(object(payload.clone())).unwrap().wait();

    assert_eq!(delivered["type"], payload["type"]);
    assert_eq!(delivered["payload"], payload["payload"]);
    assert_eq!(delivered["source"], "Modal");
}
