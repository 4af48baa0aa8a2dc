//! Registers one command and one query, then dispatches each.
//!
//! Run with `RUST_LOG=cqrs_registry=trace cargo run --example greeting` to
//! see the registry's diagnostics.

use cqrs_registry::{try_map_payload, Command, Context, Payload, Query, Registry};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const GREET: &str = "greet";
const LAST_NAME: &str = "last_name";

#[derive(Clone)]
struct GreetPayload {
    first_name: String,
}

#[derive(Clone)]
struct LastNameQuery {
    first_name: String,
}

struct LastNameResult {
    last_name_as_first_name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = Registry::new();

    let registered = registry
        .register_command_handler(GREET, |_ctx, cmd| {
            let payload = try_map_payload::<GreetPayload>(cmd.payload())?;
            info!(first_name = %payload.first_name, "greeting");
            Ok(())
        })
        .and_then(|()| {
            registry.register_query_handler(LAST_NAME, |_ctx, query| {
                let payload = try_map_payload::<LastNameQuery>(query.payload())?;
                Ok(Payload::new(LastNameResult {
                    last_name_as_first_name: payload.first_name,
                }))
            })
        });
    if let Err(e) = registered {
        error!(error = %e, "registration failed");
        return;
    }

    let ctx = Context::background();

    let command = Command::new(
        GREET,
        GreetPayload {
            first_name: "John".into(),
        },
    );
    if let Err(e) = registry.dispatch_command(&ctx, &command) {
        error!(error = %e, "command failed");
    }

    let query = Query::new(
        LAST_NAME,
        LastNameQuery {
            first_name: "Andrew".into(),
        },
    );
    match registry.dispatch_query::<LastNameResult>(&ctx, &query) {
        Ok(result) => println!("{}", result.last_name_as_first_name),
        Err(e) => error!(error = %e, "query failed"),
    }

    if let Err(e) = registry.dispatch_command(&ctx, &Command::without_payload("unknown")) {
        error!(error = %e, "command failed");
    }
}
