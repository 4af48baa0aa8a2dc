//! Error type shared by the registries, the payload adapter, and handlers.

use std::error::Error as StdError;
use std::fmt;

use crate::key::Key;

/// Which registry a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Command,
    Query,
}

impl fmt::Display for HandlerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerKind::Command => f.write_str("command"),
            HandlerKind::Query => f.write_str("query"),
        }
    }
}

/// Error returned by dispatch, payload mapping, and handler bodies.
///
/// Handler errors come back to the dispatch caller exactly as the handler
/// produced them.
#[derive(Debug)]
pub enum Error {
    /// No handler registered for the key.
    HandlerNotFound { kind: HandlerKind, key: Key },
    /// A payload or result held a different type than the one expected.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// A payload was absent where a value was required.
    NilValue,
    /// A query handler succeeded without producing a result.
    NilResult,
    /// A registry lock was poisoned by a panicking thread.
    LockPoisoned(&'static str),
    /// The dispatch context was cancelled.
    Cancelled,
    /// The dispatch context's deadline has passed.
    DeadlineExceeded,
    /// A handler rejected the request.
    Rejected(String),
    /// Any other handler error.
    Other(Box<dyn StdError + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Wrap an arbitrary handler error.
    pub fn other<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::Other(Box::new(err))
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Error::Rejected(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::HandlerNotFound { .. })
    }

    /// The key of a `HandlerNotFound` error.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Error::HandlerNotFound { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::HandlerNotFound { kind, key } => {
                write!(f, "{} handler not found for key: {}", kind, key)
            }
            Error::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {}, found {}", expected, found)
            }
            Error::NilValue => write!(f, "payload is nil"),
            Error::NilResult => write!(f, "result is nil"),
            Error::LockPoisoned(operation) => {
                write!(f, "registry lock poisoned during {}", operation)
            }
            Error::Cancelled => write!(f, "context cancelled"),
            Error::DeadlineExceeded => write!(f, "context deadline exceeded"),
            Error::Rejected(reason) => write!(f, "rejected: {}", reason),
            Error::Other(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Error {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        Error::Other(err)
    }
}
