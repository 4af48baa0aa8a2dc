//! Registry — one command registry and one query registry behind a single
//! object.
//!
//! Build one at startup and share it (usually through `Arc`) with whatever
//! registers or dispatches. Tests build their own.
//!
//! ## Example
//!
//! ```
//! use cqrs_registry::{try_map_payload, Command, Context, Payload, Query, Registry};
//!
//! #[derive(Clone)]
//! struct Greet {
//!     name: String,
//! }
//!
//! let registry = Registry::new();
//! registry
//!     .register_command_handler("greet", |_ctx, cmd| {
//!         let greet = try_map_payload::<Greet>(cmd.payload())?;
//!         assert_eq!(greet.name, "Ann");
//!         Ok(())
//!     })
//!     .unwrap();
//! registry
//!     .register_query_handler("double", |_ctx, query| {
//!         let n = try_map_payload::<u32>(query.payload())?;
//!         Ok(Payload::new(n * 2))
//!     })
//!     .unwrap();
//!
//! let ctx = Context::background();
//! registry
//!     .dispatch_command(&ctx, &Command::new("greet", Greet { name: "Ann".into() }))
//!     .unwrap();
//! let doubled: u32 = registry.dispatch_query(&ctx, &Query::new("double", 21_u32)).unwrap();
//! assert_eq!(doubled, 42);
//! ```

use std::any::Any;

use crate::command::{Command, CommandHandler, CommandRegistry};
use crate::context::Context;
use crate::error::Result;
use crate::key::Key;
use crate::payload::Payload;
use crate::query::{Query, QueryRegistry};

#[derive(Default)]
pub struct Registry {
    commands: CommandRegistry,
    queries: QueryRegistry,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handlers` to the command chain for `key`.
    pub fn register_command_handlers<I>(&self, key: impl Into<Key>, handlers: I) -> Result<()>
    where
        I: IntoIterator<Item = CommandHandler>,
    {
        self.commands.register(key, handlers)
    }

    /// Append one command handler to the chain for `key`.
    pub fn register_command_handler<F>(&self, key: impl Into<Key>, handler: F) -> Result<()>
    where
        F: Fn(&Context, &Command) -> Result<()> + Send + Sync + 'static,
    {
        self.commands.register_fn(key, handler)
    }

    /// Bind the query handler for `key`, replacing any earlier one.
    pub fn register_query_handler<F>(&self, key: impl Into<Key>, handler: F) -> Result<()>
    where
        F: Fn(&Context, &Query) -> Result<Payload> + Send + Sync + 'static,
    {
        self.queries.register(key, handler)
    }

    pub fn dispatch_command(&self, ctx: &Context, command: &Command) -> Result<()> {
        self.commands.dispatch(ctx, command)
    }

    pub fn dispatch_query<T: Any>(&self, ctx: &Context, query: &Query) -> Result<T> {
        self.queries.dispatch(ctx, query)
    }

    /// The underlying command registry.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The underlying query registry.
    pub fn queries(&self) -> &QueryRegistry {
        &self.queries
    }
}

/// Register handler functions as one command chain.
///
/// Each handler must be a function or closure with the signature
/// `Fn(&Context, &Command) -> Result<()>`.
///
/// # Example
/// ```ignore
/// cqrs_registry::register_command_handlers!(
///     registry,
///     "order.create",
///     handlers::validate_order,
///     handlers::store_order,
///     handlers::notify_warehouse,
/// )?;
/// ```
#[macro_export]
macro_rules! register_command_handlers {
    ($registry:expr, $key:expr, $( $handler:expr ),+ $(,)?) => {
        $registry.register_command_handlers(
            $key,
            [ $( $crate::command_handler($handler) ),+ ],
        )
    };
}
