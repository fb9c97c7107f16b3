//! Dispatch integration tests.

mod command_source;
#[cfg(feature = "json")]
mod json;
mod query_bus;
