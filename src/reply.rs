//! The result contract shared by every dispatch operation.
//!
//! A handler may answer right away or hand back work that completes later.
//! `Reply<T>` carries either shape so transports, sources and buses never
//! have to commit to one execution model.

use std::fmt;
use std::future::{Future, IntoFuture};

use futures::future::{self, BoxFuture, Either, FutureExt};

/// A value of type `T`, available immediately or after an asynchronous
/// completion.
///
/// Both variants are consumed the same way with `.await`:
///
/// ```
/// use command_source::Reply;
///
/// # futures::executor::block_on(async {
/// let now = Reply::ready(1);
/// let later = Reply::deferred(async { 2 });
///
/// assert_eq!(now.await + later.await, 3);
/// # });
/// ```
///
/// Synchronous callers can take an immediate value with
/// [`try_into_ready`](Reply::try_into_ready), or block with
/// [`wait`](Reply::wait).
pub enum Reply<T> {
    /// The value is already available.
    Ready(T),
    /// The value is produced when the boxed future completes.
    Deferred(BoxFuture<'static, T>),
}

impl<T> Reply<T> {
    /// Wrap a value that is already available.
    pub fn ready(value: T) -> Self {
        Reply::Ready(value)
    }

    /// Wrap a future whose output becomes the value.
    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Reply::Deferred(Box::pin(future))
    }

    /// Returns `true` if the value is available without waiting.
    pub fn is_ready(&self) -> bool {
        matches!(self, Reply::Ready(_))
    }

    /// Returns `true` if the value still has to be awaited.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Reply::Deferred(_))
    }

    /// Take the value if it is immediate, otherwise give the reply back.
    pub fn try_into_ready(self) -> Result<T, Self> {
        match self {
            Reply::Ready(value) => Ok(value),
            deferred => Err(deferred),
        }
    }

    /// Transform the eventual value, keeping the immediate/deferred shape.
    pub fn map<U, F>(self, f: F) -> Reply<U>
    where
        T: 'static,
        U: 'static,
        F: FnOnce(T) -> U + Send + 'static,
    {
        match self {
            Reply::Ready(value) => Reply::Ready(f(value)),
            Reply::Deferred(future) => Reply::Deferred(future.map(f).boxed()),
        }
    }

    /// Block the current thread until the value is available.
    ///
    /// Immediate values return without blocking. Deferred values are driven
    /// on the calling thread, so this must not be called from inside an
    /// async task; `.await` the reply there instead.
    pub fn wait(self) -> T {
        match self {
            Reply::Ready(value) => value,
            Reply::Deferred(future) => futures::executor::block_on(future),
        }
    }
}

impl<T> From<T> for Reply<T> {
    fn from(value: T) -> Self {
        Reply::Ready(value)
    }
}

impl<T> IntoFuture for Reply<T> {
    type Output = T;
    type IntoFuture = Either<future::Ready<T>, BoxFuture<'static, T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Reply::Ready(value) => Either::Left(future::ready(value)),
            Reply::Deferred(future) => Either::Right(future),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Reply<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Reply::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
