//! Shared payload types and handler helpers.

use std::sync::{Arc, Mutex};

use cqrs_registry::{command_handler, try_map_payload, CommandHandler, Error};

#[derive(Debug, Clone, PartialEq)]
pub struct Greet {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i64,
}

/// Shared log that handlers append to.
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Handler that records `name` and succeeds.
pub fn record(journal: &Journal, name: &'static str) -> CommandHandler {
    let journal = journal.clone();
    command_handler(move |_ctx, _cmd| {
        journal.push(name);
        Ok(())
    })
}

/// Handler that records `name` and then fails with `Rejected(name)`.
pub fn fail(journal: &Journal, name: &'static str) -> CommandHandler {
    let journal = journal.clone();
    command_handler(move |_ctx, _cmd| {
        journal.push(name);
        Err(Error::rejected(name))
    })
}

/// Handler that records the greeted name from a `Greet` payload.
pub fn record_greeting(journal: &Journal) -> CommandHandler {
    let journal = journal.clone();
    command_handler(move |_ctx, cmd| {
        let greet = try_map_payload::<Greet>(cmd.payload())?;
        journal.push(greet.name);
        Ok(())
    })
}
