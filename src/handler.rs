use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::reply::Reply;

/// The single function a transport delivers its input to.
///
/// A `Handler<C, R>` turns an input `C` into a [`Reply<R>`]. It is cheap to
/// clone and safe to share across threads.
///
/// ```
/// use command_source::{Handler, Reply};
///
/// let sync = Handler::ready(|n: u32| n + 1);
/// let deferred = Handler::deferred(|n: u32| async move { n * 2 });
/// let raw = Handler::new(|n: u32| Reply::ready(n));
///
/// assert_eq!(sync.call(1).wait(), 2);
/// assert_eq!(deferred.call(4).wait(), 8);
/// assert_eq!(raw.call(9).wait(), 9);
/// ```
pub struct Handler<C, R> {
    func: Arc<dyn Fn(C) -> Reply<R> + Send + Sync>,
}

impl<C, R> Handler<C, R> {
    /// Create a handler from a function that already returns a `Reply`.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(C) -> Reply<R> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Create a handler whose result is always immediate.
    pub fn ready<F>(func: F) -> Self
    where
        F: Fn(C) -> R + Send + Sync + 'static,
    {
        Self::new(move |input| Reply::Ready(func(input)))
    }

    /// Create a handler whose result is always deferred.
    pub fn deferred<F, Fut>(func: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        Self::new(move |input| Reply::deferred(func(input)))
    }

    /// Invoke the handler.
    pub fn call(&self, input: C) -> Reply<R> {
        (self.func)(input)
    }
}

impl<C, R> Clone for Handler<C, R> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
        }
    }
}

impl<C, R, F> From<F> for Handler<C, R>
where
    F: Fn(C) -> Reply<R> + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Self::new(func)
    }
}

impl<C, R> fmt::Debug for Handler<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
