//! In-process transport for queries.

use std::fmt;

use super::local::HandlerSlot;
use super::QueryTransport;
use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;

/// In-process query transport.
///
/// Behaves exactly like [`LocalTransport`](super::LocalTransport), on the
/// query side.
pub struct LocalQueryTransport<Q, R> {
    slot: HandlerSlot<Q, R>,
}

impl<Q, R> LocalQueryTransport<Q, R> {
    /// Create a transport with no handler registered.
    pub fn new() -> Self {
        Self {
            slot: HandlerSlot::new("local_query"),
        }
    }

    /// Returns `true` once a handler has been registered.
    pub fn has_handler(&self) -> bool {
        self.slot.is_occupied()
    }
}

impl<Q, R> Default for LocalQueryTransport<Q, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, R> QueryTransport<Q, R> for LocalQueryTransport<Q, R> {
    fn on(&mut self, handler: Handler<Q, R>) {
        self.slot.install(handler);
    }

    fn send(&self, query: Q) -> Result<Reply<R>, DispatchError> {
        self.slot.dispatch(query)
    }
}

impl<Q, R> fmt::Debug for LocalQueryTransport<Q, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalQueryTransport")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
