use std::fmt;

/// Error returned when a command or query cannot be dispatched.
///
/// Raised by a transport's `send` at call time, before any [`Reply`]
/// exists, and passed through `trigger` untouched. A `Reply` never carries
/// a dispatch failure.
///
/// [`Reply`]: crate::Reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// `send` was called on a transport whose handler slot is empty.
    NoHandlerRegistered,
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoHandlerRegistered => write!(f, "no handler registered"),
        }
    }
}

impl std::error::Error for DispatchError {}
