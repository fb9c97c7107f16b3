//! Transports - single-handler delivery for commands and queries
//!
//! A transport accepts exactly one handler and forwards each input to it,
//! handing the handler's [`Reply`](crate::Reply) back unchanged.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ CommandSource (stamps name)  │   │ QueryBus (no stamping)       │
//! │ register_handler / trigger   │   │ register_handler / trigger   │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                │                                  │
//!                ▼                                  ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ Transport<C, R>              │   │ QueryTransport<Q, R>         │
//! │ on(handler) / send(command)  │   │ on(handler) / send(query)    │
//! └──────────────────────────────┘   └──────────────────────────────┘
//!                │                                  │
//!                ▼                                  ▼
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │ LocalTransport (included)    │   │ LocalQueryTransport          │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! ## Error delivery
//!
//! `send` on a transport with no handler fails immediately with
//! [`DispatchError::NoHandlerRegistered`](crate::DispatchError). The error
//! is the `Err` of `send` itself, never the output of a deferred reply, so
//! callers always write:
//!
//! ```ignore
//! let response = transport.send(command)?.await;
//! ```

mod command_transport;
mod local;
mod local_query;
mod query_transport;

pub use command_transport::Transport;
pub use local::LocalTransport;
pub use local_query::LocalQueryTransport;
pub use query_transport::QueryTransport;
