//! In-process command/query dispatch.
//!
//! Handlers are registered against a [`Key`]. Commands run every handler
//! bound to their key, in order, stopping at the first error. Queries run
//! the single handler bound to their key and return its result as the
//! caller's expected type. Handlers unpack payloads with
//! [`try_map_payload`].

mod command;
mod context;
mod error;
mod key;
mod payload;
mod query;
mod registry;

pub use command::{command_handler, Command, CommandHandler, CommandRegistry};
pub use context::{CancelHandle, Context};
pub use error::{Error, HandlerKind, Result};
pub use key::Key;
pub use payload::{try_map_payload, Payload};
pub use query::{Query, QueryHandler, QueryRegistry};
pub use registry::Registry;
