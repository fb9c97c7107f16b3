//! In-process command and query dispatch.
//!
//! A [`CommandSource`] is a named sender: it stamps each outgoing command
//! with its own name and forwards it through a [`Transport`] to the single
//! registered handler. A [`QueryBus`] does the same for queries, without
//! stamping. Handlers answer with a [`Reply`], which is either immediate or
//! deferred; callers consume both with `.await`.
//!
//! ```
//! use command_source::{CommandSource, QueryBus, Reply, Sourced};
//!
//! struct Payload {
//!     data: u32,
//! }
//!
//! let mut source = CommandSource::<Sourced<Payload>, String>::local("Svc");
//! source.register_handler(|cmd| Reply::ready(format!("{} from {}", cmd.data, cmd.source)));
//! assert_eq!(source.trigger(Payload { data: 9 }).unwrap().wait(), "9 from Svc");
//!
//! let mut bus = QueryBus::<u32, u32>::local();
//! bus.register_handler(|n| Reply::deferred(async move { n * 2 }));
//! assert_eq!(bus.trigger(21).unwrap().wait(), 42);
//! ```
//!
//! Sending with no handler registered fails at call time with
//! [`DispatchError::NoHandlerRegistered`]; a `Reply` never carries that
//! error. Handler-level failures belong in the response type, e.g.
//! `R = Result<T, E>`, and pass through untouched.

mod command;
mod error;
mod handler;
mod query_bus;
mod reply;
mod source;
pub mod transport;

pub use command::{Command, Sourced, SOURCE_FIELD};
pub use error::DispatchError;
pub use handler::Handler;
pub use query_bus::QueryBus;
pub use reply::Reply;
pub use source::CommandSource;
pub use transport::{LocalQueryTransport, LocalTransport, QueryTransport, Transport};

// Re-export the derive macro so `#[derive(command_source::Command)]` works
#[cfg(feature = "derive")]
pub use command_source_macros::Command;
