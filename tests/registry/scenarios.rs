//! End-to-end scenarios mirroring typical application wiring.

use cqrs_registry::{
    register_command_handlers, try_map_payload, Command, Context, Error, Payload, Query, Registry,
};

use crate::support::{record_greeting, Greet, Journal, Point};

#[test]
fn greet_command_records_name() {
    let journal = Journal::new();
    let registry = Registry::new();
    registry
        .register_command_handlers("greet", [record_greeting(&journal)])
        .unwrap();

    registry
        .dispatch_command(
            &Context::background(),
            &Command::new("greet", Greet { name: "Ann".into() }),
        )
        .unwrap();
    assert_eq!(journal.entries(), vec!["Ann"]);
}

#[test]
fn echo_query_returns_payload() {
    let registry = Registry::new();
    registry
        .register_query_handler("echo", |_, query| {
            Ok(Payload::new(try_map_payload::<Point>(query.payload())?))
        })
        .unwrap();

    let ctx = Context::background();
    let echoed: Point = registry
        .dispatch_query(&ctx, &Query::new("echo", Point { x: 5 }))
        .unwrap();
    assert_eq!(echoed, Point { x: 5 });

    let err = registry
        .dispatch_query::<Point>(&ctx, &Query::without_payload("unknown"))
        .unwrap_err();
    assert!(err.is_not_found());
}

fn validate(_: &Context, cmd: &Command) -> cqrs_registry::Result<()> {
    let greet = try_map_payload::<Greet>(cmd.payload())?;
    if greet.name.is_empty() {
        return Err(Error::rejected("name is required"));
    }
    Ok(())
}

#[test]
fn validation_handler_guards_the_chain() {
    let journal = Journal::new();
    let registry = Registry::new();
    let store = journal.clone();
    register_command_handlers!(
        registry,
        "user.register",
        validate,
        move |_: &Context, cmd: &Command| {
            store.push(try_map_payload::<Greet>(cmd.payload())?.name);
            Ok(())
        },
    )
    .unwrap();

    let ctx = Context::background();
    let err = registry
        .dispatch_command(&ctx, &Command::new("user.register", Greet { name: String::new() }))
        .unwrap_err();
    assert_eq!(err.to_string(), "rejected: name is required");

    registry
        .dispatch_command(&ctx, &Command::new("user.register", Greet { name: "Cy".into() }))
        .unwrap();
    assert_eq!(journal.entries(), vec!["Cy"]);
}
