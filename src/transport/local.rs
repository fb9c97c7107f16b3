//! In-process transport for commands.
//!
//! The local transport keeps its handler in memory and calls it directly on
//! the caller's thread. It is the reference implementation of transport
//! semantics; other transports are expected to behave the same way and to
//! document any unavoidable deviation.

use std::fmt;

use tracing::{debug, trace, warn};

use super::Transport;
use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;

/// The one-handler slot shared by the local transports.
pub(super) struct HandlerSlot<C, R> {
    kind: &'static str,
    handler: Option<Handler<C, R>>,
}

impl<C, R> HandlerSlot<C, R> {
    pub(super) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            handler: None,
        }
    }

    pub(super) fn install(&mut self, handler: Handler<C, R>) {
        let replaced = self.handler.replace(handler).is_some();
        debug!(transport = self.kind, replaced, "Handler registered");
    }

    pub(super) fn dispatch(&self, input: C) -> Result<Reply<R>, DispatchError> {
        match &self.handler {
            Some(handler) => {
                trace!(transport = self.kind, "Dispatching to handler");
                Ok(handler.call(input))
            }
            None => {
                warn!(transport = self.kind, "Send with no handler registered");
                Err(DispatchError::NoHandlerRegistered)
            }
        }
    }

    pub(super) fn is_occupied(&self) -> bool {
        self.handler.is_some()
    }
}

/// In-process command transport.
///
/// ## Semantics
///
/// - `on` overwrites the stored handler unconditionally.
/// - `send` calls the stored handler with the command and returns its reply
///   verbatim; no copying, wrapping or queuing.
/// - A deferred reply does not borrow the transport, so several can be in
///   flight at once and each completes independently, even if the handler
///   is replaced in between.
///
/// ## Example
///
/// ```
/// use command_source::{Handler, LocalTransport, Transport};
///
/// let mut transport = LocalTransport::new();
/// transport.on(Handler::ready(|data: u32| format!("v={}", data)));
///
/// let reply = transport.send(5).unwrap();
/// assert_eq!(reply.wait(), "v=5");
/// ```
pub struct LocalTransport<C, R> {
    slot: HandlerSlot<C, R>,
}

impl<C, R> LocalTransport<C, R> {
    /// Create a transport with no handler registered.
    pub fn new() -> Self {
        Self {
            slot: HandlerSlot::new("local"),
        }
    }

    /// Returns `true` once a handler has been registered.
    pub fn has_handler(&self) -> bool {
        self.slot.is_occupied()
    }
}

impl<C, R> Default for LocalTransport<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> Transport<C, R> for LocalTransport<C, R> {
    fn on(&mut self, handler: Handler<C, R>) {
        self.slot.install(handler);
    }

    fn send(&self, command: C) -> Result<Reply<R>, DispatchError> {
        self.slot.dispatch(command)
    }
}

impl<C, R> fmt::Debug for LocalTransport<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalTransport")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
