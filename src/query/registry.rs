use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use super::{Query, QueryHandler};
use crate::context::Context;
use crate::error::{Error, HandlerKind, Result};
use crate::key::Key;
use crate::payload::Payload;

/// Maps each key to a single query handler. Last registration wins.
#[derive(Default)]
pub struct QueryRegistry {
    handlers: RwLock<HashMap<Key, QueryHandler>>,
}

impl QueryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `key`, replacing any earlier handler.
    pub fn register<F>(&self, key: impl Into<Key>, handler: F) -> Result<()>
    where
        F: Fn(&Context, &Query) -> Result<Payload> + Send + Sync + 'static,
    {
        self.register_handler(key, Arc::new(handler))
    }

    pub fn register_handler(&self, key: impl Into<Key>, handler: QueryHandler) -> Result<()> {
        let key = key.into();
        let mut map = self
            .handlers
            .write()
            .map_err(|_| Error::LockPoisoned("query registration"))?;
        let replaced = map.insert(key.clone(), handler).is_some();
        debug!(key = %key, replaced, "registered query handler");
        Ok(())
    }

    /// Run the handler bound to the query's key and return its result as `T`.
    ///
    /// A handler error is returned unchanged. On success the result must be
    /// present (`NilResult` otherwise) and of type `T` exactly
    /// (`TypeMismatch` otherwise).
    pub fn dispatch<T: Any>(&self, ctx: &Context, query: &Query) -> Result<T> {
        let handler = self.handler(query.key())?;
        trace!(key = %query.key(), "dispatching query");

        let result = handler(ctx, query).inspect_err(|err| {
            debug!(key = %query.key(), error = %err, "query handler failed");
        })?;

        match result.downcast::<T>() {
            Err(Error::NilValue) => Err(Error::NilResult),
            other => other,
        }
    }

    fn handler(&self, key: &Key) -> Result<QueryHandler> {
        let map = self
            .handlers
            .read()
            .map_err(|_| Error::LockPoisoned("query lookup"))?;
        map.get(key).cloned().ok_or_else(|| {
            debug!(key = %key, "no query handler registered");
            Error::HandlerNotFound {
                kind: HandlerKind::Query,
                key: key.clone(),
            }
        })
    }
}
