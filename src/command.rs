//! Commands and their provenance field.
//!
//! A command is a payload that carries a mandatory `source` naming its
//! sender. Callers hand a [`CommandSource`](crate::CommandSource) the payload
//! *without* that field (the command's [`Command::Unsourced`] form) and the
//! source fills it in with its own name.
//!
//! Three representations are supported out of the box:
//!
//! - [`Sourced<P>`]: a generic envelope; the unsourced form is `P`.
//! - `serde_json::Value` (feature `json`): the unsourced form is a JSON
//!   object map and stamping inserts a `"source"` key.
//! - Structs deriving `Command` (feature `derive`), which get a generated
//!   `<Name>Payload` struct holding every field except the source.

use std::ops::{Deref, DerefMut};

use serde::ser::{Error as _, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the provenance field on every command.
pub const SOURCE_FIELD: &str = "source";

/// A payload type that carries a sender provenance field.
///
/// `stamp` builds the full command from its source-less form. The resulting
/// `source()` must always equal the `source` argument, whatever the
/// unsourced payload contained.
pub trait Command: Sized {
    /// The command minus its provenance field.
    type Unsourced;

    /// Build the full command, setting the provenance field to `source`.
    fn stamp(unsourced: Self::Unsourced, source: &str) -> Self;

    /// The sender that produced this command.
    fn source(&self) -> &str;
}

/// A payload `P` stamped with the name of the source that sent it.
///
/// Serializes flat, with the payload's fields next to `source`. The stamped
/// name always wins: a `source` field inside the payload is left out of the
/// output.
///
/// ```
/// use command_source::{Command, Sourced};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Rename {
///     name: String,
/// }
///
/// let cmd = Sourced::stamp(Rename { name: "Physics".into() }, "Modal");
/// assert_eq!(cmd.source(), "Modal");
/// assert_eq!(cmd.name, "Physics");
/// assert_eq!(
///     serde_json::to_string(&cmd).unwrap(),
///     r#"{"source":"Modal","name":"Physics"}"#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Sourced<P> {
    /// Name of the sender.
    pub source: String,
    /// The command payload.
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Sourced<P> {
    /// Wrap `payload` with the given source name.
    pub fn new(source: impl Into<String>, payload: P) -> Self {
        Self {
            source: source.into(),
            payload,
        }
    }

    /// Drop the provenance and return the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> Command for Sourced<P> {
    type Unsourced = P;

    fn stamp(unsourced: P, source: &str) -> Self {
        Self::new(source, unsourced)
    }

    fn source(&self) -> &str {
        &self.source
    }
}

impl<P: Serialize> Serialize for Sourced<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = match serde_json::to_value(&self.payload).map_err(S::Error::custom)? {
            Value::Object(fields) => fields,
            Value::Null => Map::new(),
            _ => {
                return Err(S::Error::custom(
                    "Sourced payload must serialize as a struct or map",
                ))
            }
        };

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(SOURCE_FIELD, &self.source)?;
        for (key, value) in fields.iter().filter(|(key, _)| key.as_str() != SOURCE_FIELD) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<P> Deref for Sourced<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.payload
    }
}

impl<P> DerefMut for Sourced<P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut self.payload
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Value};

    use super::{Command, SOURCE_FIELD};

    /// JSON commands are objects; stamping inserts `"source"` into the
    /// caller's map, replacing any value already under that key.
    impl Command for Value {
        type Unsourced = Map<String, Value>;

        fn stamp(mut unsourced: Map<String, Value>, source: &str) -> Self {
            unsourced.insert(SOURCE_FIELD.to_string(), Value::String(source.to_string()));
            Value::Object(unsourced)
        }

        /// Returns `""` when the value has no string `"source"` key, which
        /// only happens for values that did not come from `stamp`.
        fn source(&self) -> &str {
            self.get(SOURCE_FIELD)
                .and_then(Value::as_str)
                .unwrap_or_default()
        }
    }
}
