//! Command source - a named sender that stamps provenance onto commands.

use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use crate::command::Command;
use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;
use crate::transport::{LocalTransport, Transport};

/// A named sender of commands.
///
/// Wraps a [`Transport`] and a name. Every command sent through
/// [`trigger`](CommandSource::trigger) has its provenance field set to that
/// name, overriding anything the caller put there.
///
/// ## Example
///
/// ```
/// use command_source::{CommandSource, Reply, Sourced};
///
/// struct CreateDeck {
///     name: String,
/// }
///
/// let mut source = CommandSource::<Sourced<CreateDeck>, u64>::local("Modal");
/// source.register_handler(|cmd| {
///     assert_eq!(cmd.source, "Modal");
///     Reply::ready(cmd.name.len() as u64)
/// });
///
/// let reply = source.trigger(CreateDeck { name: "Physics".into() }).unwrap();
/// assert_eq!(reply.wait(), 7);
/// ```
pub struct CommandSource<C, R, T = LocalTransport<C, R>> {
    name: String,
    transport: T,
    _marker: PhantomData<fn(C) -> R>,
}

impl<C, R> CommandSource<C, R, LocalTransport<C, R>>
where
    C: Command,
{
    /// Create a source backed by a fresh [`LocalTransport`].
    pub fn local(name: impl Into<String>) -> Self {
        Self::new(name, LocalTransport::new())
    }
}

impl<C, R, T> CommandSource<C, R, T>
where
    C: Command,
    T: Transport<C, R>,
{
    /// Create a source that sends through `transport` under `name`.
    pub fn new(name: impl Into<String>, transport: T) -> Self {
        Self {
            name: name.into(),
            transport,
            _marker: PhantomData,
        }
    }

    /// The name stamped onto every outgoing command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the handler on the underlying transport.
    ///
    /// Replaces any handler registered before.
    pub fn register_handler<F>(&mut self, handler: F)
    where
        F: Fn(C) -> Reply<R> + Send + Sync + 'static,
    {
        self.transport.on(Handler::new(handler));
    }

    /// Stamp `command` with this source's name and send it.
    ///
    /// Returns the transport's result unchanged.
    pub fn trigger(&self, command: C::Unsourced) -> Result<Reply<R>, DispatchError> {
        trace!(source = %self.name, "Triggering command");
        let command = C::stamp(command, &self.name);
        self.transport.send(command)
    }

    /// Get a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the source and return its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<C, R, T: fmt::Debug> fmt::Debug for CommandSource<C, R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSource")
            .field("name", &self.name)
            .field("transport", &self.transport)
            .finish()
    }
}
