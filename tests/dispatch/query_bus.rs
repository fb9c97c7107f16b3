//! QueryBus delegation without stamping.

use command_source::{
    DispatchError, Handler, LocalQueryTransport, QueryBus, QueryTransport, Reply,
};

use crate::support::{Recorder, Search};

#[tokio::test]
async fn triggers_query_and_gets_response() {
    let mut bus = QueryBus::<u32, String>::local();
    bus.register_handler(|value| Reply::deferred(async move { format!("Value: {}", value) }));

    let response = bus.trigger(42).unwrap().await;
    assert_eq!(response, "Value: 42");
}

#[test]
fn query_reaches_handler_unchanged() {
    let recorder = Recorder::<Search>::new();
    let mut transport = LocalQueryTransport::new();
    transport.on(recorder.handler(|q| q.term.len().min(q.limit)));

    let bus: QueryBus<Search, usize> = QueryBus::new(transport);
    let query = Search {
        term: "hello".to_string(),
        limit: 3,
    };

    assert_eq!(bus.trigger(query.clone()).unwrap().wait(), 3);
    assert_eq!(recorder.seen(), vec![query]);
}

#[test]
fn later_registration_wins() {
    let mut bus = QueryBus::<Search, &'static str>::local();
    bus.register_handler(|_| Reply::ready("h1"));
    bus.transport_mut().on(Handler::ready(|_: Search| "h2"));

    let query = Search {
        term: "x".to_string(),
        limit: 1,
    };
    assert_eq!(bus.trigger(query).unwrap().wait(), "h2");
}

#[test]
fn trigger_without_handler_fails() {
    let bus = QueryBus::<Search, usize>::local();
    assert!(!bus.transport().has_handler());

    let err = bus
        .trigger(Search {
            term: "oops".to_string(),
            limit: 0,
        })
        .unwrap_err();
    assert_eq!(err, DispatchError::NoHandlerRegistered);
}

#[test]
fn works_over_boxed_transport() {
    let transport: Box<dyn QueryTransport<u32, u32>> = Box::new(LocalQueryTransport::new());
    let mut bus: QueryBus<u32, u32, _> = QueryBus::new(transport);
    bus.register_handler(|n| Reply::ready(n + 1));

    assert_eq!(bus.trigger(1).unwrap().wait(), 2);
    assert!(bus.into_transport().send(5).is_ok());
}
