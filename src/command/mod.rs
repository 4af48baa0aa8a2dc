//! Commands — keyed requests to perform an action.
//!
//! A command produces no result, only success or failure. Any number of
//! handlers may be bound to one key; they run as an ordered chain.

mod registry;

pub use registry::CommandRegistry;

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;
use crate::key::Key;
use crate::payload::Payload;

/// Shared command handler function.
pub type CommandHandler = Arc<dyn Fn(&Context, &Command) -> Result<()> + Send + Sync>;

/// Request to perform a side-effecting action.
#[derive(Debug)]
pub struct Command {
    key: Key,
    payload: Payload,
}

impl Command {
    /// Command carrying `value` as its payload.
    pub fn new<T: Any + Send + Sync>(key: impl Into<Key>, value: T) -> Self {
        Self::from_parts(key, Payload::new(value))
    }

    /// Command with an absent payload.
    pub fn without_payload(key: impl Into<Key>) -> Self {
        Self::from_parts(key, Payload::none())
    }

    pub fn from_parts(key: impl Into<Key>, payload: Payload) -> Self {
        Command {
            key: key.into(),
            payload,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Consume the command, keeping only its payload.
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}

/// Wrap a closure as a [`CommandHandler`].
pub fn command_handler<F>(f: F) -> CommandHandler
where
    F: Fn(&Context, &Command) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}
