//! Query dispatch behaviour through the `Registry` facade.

use cqrs_registry::{try_map_payload, Context, Error, HandlerKind, Payload, Query, Registry};

use crate::support::{Journal, Point};

#[test]
fn unregistered_key_is_not_found() {
    let registry = Registry::new();
    let err = registry
        .dispatch_query::<Point>(&Context::background(), &Query::without_payload("point.get"))
        .unwrap_err();
    assert_eq!(err.key().map(|k| k.as_str()), Some("point.get"));
    assert!(matches!(err, Error::HandlerNotFound { kind: HandlerKind::Query, .. }));
}

#[test]
fn second_registration_replaces_first() {
    let journal = Journal::new();
    let registry = Registry::new();

    let first = journal.clone();
    registry
        .register_query_handler("k", move |_, _| {
            first.push("first");
            Ok(Payload::new(1_u8))
        })
        .unwrap();
    let second = journal.clone();
    registry
        .register_query_handler("k", move |_, _| {
            second.push("second");
            Ok(Payload::new(2_u8))
        })
        .unwrap();

    let n: u8 = registry
        .dispatch_query(&Context::background(), &Query::without_payload("k"))
        .unwrap();
    assert_eq!(n, 2);
    assert_eq!(journal.entries(), vec!["second"]);
}

#[test]
fn valid_result_is_returned() {
    let registry = Registry::new();
    registry
        .register_query_handler("point.shift", |_, query| {
            let p = try_map_payload::<Point>(query.payload())?;
            Ok(Payload::new(Point { x: p.x + 1 }))
        })
        .unwrap();

    let p: Point = registry
        .dispatch_query(
            &Context::background(),
            &Query::new("point.shift", Point { x: 41 }),
        )
        .unwrap();
    assert_eq!(p, Point { x: 42 });
}

#[test]
fn mismatched_result_fails_even_without_handler_error() {
    let registry = Registry::new();
    registry
        .register_query_handler("count", |_, _| Ok(Payload::new(3_i32)))
        .unwrap();

    let err = registry
        .dispatch_query::<i64>(&Context::background(), &Query::without_payload("count"))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TypeMismatch { expected: "i64", found: "i32" }
    ));
}

#[test]
fn absent_result_is_nil_result() {
    let registry = Registry::new();
    registry
        .register_query_handler("nothing", |_, _| Ok(Payload::none()))
        .unwrap();

    let err = registry
        .dispatch_query::<Point>(&Context::background(), &Query::without_payload("nothing"))
        .unwrap_err();
    assert!(matches!(err, Error::NilResult));
}

#[test]
fn handler_payload_error_is_propagated_as_is() {
    let registry = Registry::new();
    registry
        .register_query_handler("point.get", |_, query| {
            let p = try_map_payload::<Point>(query.payload())?;
            Ok(Payload::new(p))
        })
        .unwrap();

    // The handler's NilValue is not turned into NilResult.
    let err = registry
        .dispatch_query::<Point>(&Context::background(), &Query::without_payload("point.get"))
        .unwrap_err();
    assert!(matches!(err, Error::NilValue));
}

#[test]
fn handler_io_error_keeps_its_source() {
    let registry = Registry::new();
    registry
        .register_query_handler("file.read", |_, _| {
            Err(Error::other(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing.txt",
            )))
        })
        .unwrap();

    let err = registry
        .dispatch_query::<String>(&Context::background(), &Query::without_payload("file.read"))
        .unwrap_err();
    let source = std::error::Error::source(&err).unwrap();
    let io = source.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}
