//! Query-shaped transport capability.

use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;

/// Delivers queries to a single registered handler.
///
/// Same contract as [`Transport`](super::Transport); kept as its own trait
/// so command and query plumbing cannot be mixed up by accident.
pub trait QueryTransport<Q, R>: Send + Sync {
    /// Register `handler` as the sole handler, replacing any previous one.
    fn on(&mut self, handler: Handler<Q, R>);

    /// Deliver `query` to the registered handler.
    ///
    /// Fails with [`DispatchError::NoHandlerRegistered`] if `on` has not
    /// been called.
    fn send(&self, query: Q) -> Result<Reply<R>, DispatchError>;
}

impl<Q, R, T> QueryTransport<Q, R> for Box<T>
where
    T: QueryTransport<Q, R> + ?Sized,
{
    fn on(&mut self, handler: Handler<Q, R>) {
        (**self).on(handler)
    }

    fn send(&self, query: Q) -> Result<Reply<R>, DispatchError> {
        (**self).send(query)
    }
}
