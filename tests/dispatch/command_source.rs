//! CommandSource stamping and delegation.

use command_source::{
    Command, CommandSource, DispatchError, Handler, LocalTransport, Reply, Sourced, Transport,
};

use serde::Serialize;
use serde_json::{json, Value};

use crate::support::{Data, DataCommand, Recorder};

#[test]
fn trigger_stamps_source_name() {
    let recorder = Recorder::<DataCommand>::new();
    let mut transport = LocalTransport::new();
    transport.on(recorder.handler(|c| format!("v={}", c.data)));

    let source: CommandSource<DataCommand, String> = CommandSource::new("Svc", transport);
    let reply = source.trigger(Data { data: 9 }).unwrap();
    assert_eq!(reply.wait(), "v=9");

    assert_eq!(recorder.seen(), vec![Sourced::new("Svc", Data { data: 9 })]);
}

#[test]
fn every_source_stamps_its_own_name() {
    for name in ["Svc", "Modal", "", "with spaces", "ünïcödé"] {
        let recorder = Recorder::<DataCommand>::new();
        let mut source = CommandSource::<DataCommand, ()>::local(name);
        source.transport_mut().on(recorder.handler(|_| ()));

        source.trigger(Data { data: 1 }).unwrap().wait();

        let seen = recorder.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].source(), name);
        assert_eq!(seen[0].payload, Data { data: 1 });
    }
}

#[tokio::test]
async fn register_handler_delegates_to_transport() {
    let mut source = CommandSource::<DataCommand, String>::local("UnitTest");
    assert!(!source.transport().has_handler());

    source.register_handler(|cmd| {
        Reply::deferred(async move { format!("Received {} from {}", cmd.data, cmd.source) })
    });
    assert!(source.transport().has_handler());

    let result = source.trigger(Data { data: 123 }).unwrap().await;
    assert_eq!(result, "Received 123 from UnitTest");
}

#[test]
fn register_handler_replaces_previous() {
    let mut source = CommandSource::<DataCommand, &'static str>::local("Svc");
    source.register_handler(|_| Reply::ready("h1"));
    source.register_handler(|_| Reply::ready("h2"));

    assert_eq!(source.trigger(Data { data: 0 }).unwrap().wait(), "h2");
}

#[test]
fn trigger_without_handler_fails() {
    let source = CommandSource::<DataCommand, String>::local("Svc");

    assert_eq!(
        source.trigger(Data { data: 1 }).unwrap_err(),
        DispatchError::NoHandlerRegistered
    );
}

#[test]
fn works_over_boxed_transport() {
    let transport: Box<dyn Transport<DataCommand, String>> = Box::new(LocalTransport::new());
    let mut source: CommandSource<DataCommand, String, _> = CommandSource::new("Boxed", transport);
    source.register_handler(|cmd: DataCommand| Reply::ready(cmd.source.clone()));

    assert_eq!(source.trigger(Data { data: 2 }).unwrap().wait(), "Boxed");
}

#[test]
fn shared_across_threads() {
    let mut source = CommandSource::<DataCommand, u32>::local("Worker");
    source.transport_mut().on(Handler::ready(|c: DataCommand| c.data * 10));
    let source = std::sync::Arc::new(source);

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let source = std::sync::Arc::clone(&source);
            std::thread::spawn(move || source.trigger(Data { data: n }).unwrap().wait())
        })
        .collect();

    let mut results: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort();
    assert_eq!(results, vec![0, 10, 20, 30]);
}

#[derive(Serialize)]
struct Forged {
    source: String,
    data: u32,
}

#[test]
fn stamped_source_wins_in_serialized_form() {
    let mut source = CommandSource::<Sourced<Forged>, Value>::local("Svc");
    source.register_handler(|cmd| {
        Reply::ready(serde_json::to_value(&cmd).unwrap_or_default())
    });

    let delivered = source
        .trigger(Forged {
            source: "Impostor".to_string(),
            data: 9,
        })
        .unwrap()
        .wait();

    assert_eq!(delivered, json!({ "source": "Svc", "data": 9 }));
}

#[test]
fn serialized_command_has_one_source_key() {
    let cmd = Sourced::stamp(
        Forged {
            source: "Impostor".to_string(),
            data: 9,
        },
        "Svc",
    );

    let text = serde_json::to_string(&cmd).unwrap();
    assert_eq!(text.matches("\"source\"").count(), 1);
    assert_eq!(text, r#"{"source":"Svc","data":9}"#);
}
