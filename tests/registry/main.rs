//! Registry integration tests.
//!
//! Exercises the public API end to end: registration, command chains,
//! typed queries, payload mapping inside handlers, and concurrent use.

mod support;
mod queries;
mod scenarios;
