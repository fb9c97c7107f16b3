//! Query bus - sends queries without stamping.

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;
use crate::transport::{LocalQueryTransport, QueryTransport};

/// A sender of queries.
///
/// Wraps a [`QueryTransport`]. Unlike [`CommandSource`](crate::CommandSource)
/// it has no name and hands queries to the transport exactly as given.
///
/// ## Example
///
/// ```
/// use command_source::{QueryBus, Reply};
///
/// let mut bus = QueryBus::<u32, String>::local();
/// bus.register_handler(|value| Reply::ready(format!("Value: {}", value)));
///
/// assert_eq!(bus.trigger(42).unwrap().wait(), "Value: 42");
/// ```
pub struct QueryBus<Q, R, T = LocalQueryTransport<Q, R>> {
    transport: T,
    _marker: PhantomData<fn(Q) -> R>,
}

impl<Q, R> QueryBus<Q, R, LocalQueryTransport<Q, R>> {
    /// Create a bus backed by a fresh [`LocalQueryTransport`].
    pub fn local() -> Self {
        Self::new(LocalQueryTransport::new())
    }
}

impl<Q, R, T> QueryBus<Q, R, T>
where
    T: QueryTransport<Q, R>,
{
    /// Create a bus that sends through `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _marker: PhantomData,
        }
    }

    /// Register the handler on the underlying transport.
    ///
    /// Replaces any handler registered before.
    pub fn register_handler<F>(&mut self, handler: F)
    where
        F: Fn(Q) -> Reply<R> + Send + Sync + 'static,
    {
        self.transport.on(Handler::new(handler));
    }

    /// Send `query` unchanged and return the transport's result.
    pub fn trigger(&self, query: Q) -> Result<Reply<R>, DispatchError> {
        trace!("Triggering query");
        self.transport.send(query)
    }

    /// Get a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the bus and return its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<Q, R, T: fmt::Debug> fmt::Debug for QueryBus<Q, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBus")
            .field("transport", &self.transport)
            .finish()
    }
}
