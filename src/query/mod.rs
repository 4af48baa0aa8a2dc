//! Queries — keyed requests that return a typed result.
//!
//! Exactly one handler is bound per key. The handler returns an opaque
//! [`Payload`]; dispatch checks it against the caller's expected type.

mod registry;

pub use registry::QueryRegistry;

use std::any::Any;
use std::sync::Arc;

use crate::context::Context;
use crate::error::Result;
use crate::key::Key;
use crate::payload::Payload;

/// Shared query handler function.
pub type QueryHandler = Arc<dyn Fn(&Context, &Query) -> Result<Payload> + Send + Sync>;

/// Request to read or derive data.
#[derive(Debug)]
pub struct Query {
    key: Key,
    payload: Payload,
}

impl Query {
    /// Query carrying `value` as its payload.
    pub fn new<T: Any + Send + Sync>(key: impl Into<Key>, value: T) -> Self {
        Self::from_parts(key, Payload::new(value))
    }

    /// Query with an absent payload.
    pub fn without_payload(key: impl Into<Key>) -> Self {
        Self::from_parts(key, Payload::none())
    }

    pub fn from_parts(key: impl Into<Key>, payload: Payload) -> Self {
        Query {
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

    /// Consume the query, keeping only its payload.
    pub fn into_payload(self) -> Payload {
        self.payload
    }
}
