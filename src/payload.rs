//! Opaque payload values and the exact-type mapping helpers.
//!
//! A `Payload` carries any `'static + Send + Sync` value, or nothing. Handlers
//! recover the concrete type with [`try_map_payload`] or
//! [`Payload::downcast_ref`]; both require the stored type to be exactly the
//! requested one.

use std::any::{type_name, Any};
use std::fmt;

use crate::error::{Error, Result};

struct Value {
    inner: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

/// Opaque value attached to a command or query, or returned from a query
/// handler.
#[derive(Default)]
pub struct Payload(Option<Value>);

impl Payload {
    /// Wrap a value.
    ///
    /// Passing a `Payload` here nests it; use the value itself instead.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Payload(Some(Value {
            inner: Box::new(value),
            type_name: type_name::<T>(),
        }))
    }

    /// The absent payload.
    pub fn none() -> Self {
        Payload(None)
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Type name of the stored value, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.0.as_ref().map(|v| v.type_name)
    }

    /// Borrow the stored value as `T`.
    pub fn downcast_ref<T: Any>(&self) -> Result<&T> {
        let value = self.0.as_ref().ok_or(Error::NilValue)?;
        value
            .inner
            .downcast_ref::<T>()
            .ok_or_else(|| Error::TypeMismatch {
                expected: type_name::<T>(),
                found: value.type_name,
            })
    }

    /// Take the stored value as `T`.
    pub fn downcast<T: Any>(self) -> Result<T> {
        let value = self.0.ok_or(Error::NilValue)?;
        let found = value.type_name;
        value
            .inner
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| Error::TypeMismatch {
                expected: type_name::<T>(),
                found,
            })
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "Payload<{}>", value.type_name),
            None => write!(f, "Payload::None"),
        }
    }
}

/// Map a payload to a copy of its value typed as `T`.
///
/// Fails with `NilValue` when the payload is absent and with `TypeMismatch`
/// when the stored type is not exactly `T`.
pub fn try_map_payload<T: Any + Clone>(payload: &Payload) -> Result<T> {
    payload.downcast_ref::<T>().cloned()
}
