use std::collections::HashMap;
use std::sync::RwLock;

use tracing::{debug, trace};

use super::{Command, CommandHandler};
use crate::context::Context;
use crate::error::{Error, HandlerKind, Result};
use crate::key::Key;

/// Maps each key to an ordered chain of command handlers.
///
/// Registration appends to the chain under a write lock. Dispatch copies the
/// chain under a read lock and runs it with the lock released, so handlers
/// may register or dispatch themselves.
#[derive(Default)]
pub struct CommandRegistry {
    handlers: RwLock<HashMap<Key, Vec<CommandHandler>>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handlers` to the chain for `key`, keeping their order.
    pub fn register<I>(&self, key: impl Into<Key>, handlers: I) -> Result<()>
    where
        I: IntoIterator<Item = CommandHandler>,
    {
        let key = key.into();
        let mut map = self
            .handlers
            .write()
            .map_err(|_| Error::LockPoisoned("command registration"))?;
        let chain = map.entry(key.clone()).or_default();
        chain.extend(handlers);
        debug!(key = %key, chain_len = chain.len(), "registered command handlers");
        Ok(())
    }

    /// Append a single closure to the chain for `key`.
    pub fn register_fn<F>(&self, key: impl Into<Key>, handler: F) -> Result<()>
    where
        F: Fn(&Context, &Command) -> Result<()> + Send + Sync + 'static,
    {
        self.register(key, [super::command_handler(handler)])
    }

    /// Run every handler bound to the command's key, in registration order.
    ///
    /// The first handler error stops the chain and is returned as-is.
    /// Handlers that already ran are not undone.
    pub fn dispatch(&self, ctx: &Context, command: &Command) -> Result<()> {
        let chain = self.chain(command.key())?;
        trace!(key = %command.key(), chain_len = chain.len(), "dispatching command");

        for (index, handler) in chain.iter().enumerate() {
            if let Err(err) = handler(ctx, command) {
                debug!(
                    key = %command.key(),
                    index,
                    chain_len = chain.len(),
                    error = %err,
                    "command handler failed"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    fn chain(&self, key: &Key) -> Result<Vec<CommandHandler>> {
        let map = self
            .handlers
            .read()
            .map_err(|_| Error::LockPoisoned("command lookup"))?;
        match map.get(key) {
            Some(chain) => Ok(chain.clone()),
            None => {
                debug!(key = %key, "no command handler registered");
                Err(Error::HandlerNotFound {
                    kind: HandlerKind::Command,
                    key: key.clone(),
                })
            }
        }
    }
}
