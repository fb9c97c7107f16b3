//! Command-shaped transport capability.

use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;

/// Delivers commands to a single registered handler.
///
/// Implementations hold at most one handler. Registering a new one replaces
/// the old one without error. `send` returns the handler's reply unchanged,
/// immediate or deferred as the handler produced it.
///
/// Implementations might include:
/// - `LocalTransport` - in-process, calls the handler directly (included)
/// - network-backed transports supplied by callers
pub trait Transport<C, R>: Send + Sync {
    /// Register `handler` as the sole handler, replacing any previous one.
    fn on(&mut self, handler: Handler<C, R>);

    /// Deliver `command` to the registered handler.
    ///
    /// Fails with [`DispatchError::NoHandlerRegistered`] if `on` has not
    /// been called.
    fn send(&self, command: C) -> Result<Reply<R>, DispatchError>;
}

impl<C, R, T> Transport<C, R> for Box<T>
where
    T: Transport<C, R> + ?Sized,
{
    fn on(&mut self, handler: Handler<C, R>) {
        (**self).on(handler)
    }

    fn send(&self, command: C) -> Result<Reply<R>, DispatchError> {
        (**self).send(command)
    }
}
