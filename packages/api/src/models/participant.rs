//! # Participant entries
//!
//! The backend lists participants either as bare identifiers (usually an email
//! address) or as small records with optional `name` / `email` fields. Both shapes
//! are folded into [`Participant`] at the deserialization boundary so the rest of
//! the workspace never inspects raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One occupant of an activity slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Participant {
    /// A bare identifier: `"alice@example.com"`.
    PlainIdentifier(String),
    /// A record: `{"name": "Bo", "email": "bo@example.com"}`.
    NamedParticipant {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

impl Participant {
    pub fn plain(id: impl Into<String>) -> Self {
        Participant::PlainIdentifier(id.into())
    }

    pub fn named(name: Option<&str>, email: Option<&str>) -> Self {
        Participant::NamedParticipant {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    /// The email address this entry can be unregistered with, if any.
    ///
    /// Plain identifiers count only when they look like an address.
    pub fn email(&self) -> Option<&str> {
        match self {
            Participant::PlainIdentifier(id) if id.find('@').is_some_and(|at| at > 0) => {
                Some(id.as_str())
            }
            Participant::PlainIdentifier(_) => None,
            Participant::NamedParticipant { email, .. } => {
                email.as_deref().filter(|e| !e.is_empty())
            }
        }
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(s) => Participant::PlainIdentifier(s),
            Value::Object(mut map) => {
                let mut take = |key: &str| match map.remove(key) {
                    Some(Value::String(s)) => Some(s),
                    _ => None,
                };
                let name = take("name");
                let email = take("email");
                Participant::NamedParticipant { name, email }
            }
            // Falsy scalars carry no identity, like null.
            Value::Null | Value::Bool(false) => Participant::named(None, None),
            Value::Number(n) if n.as_f64() == Some(0.0) => Participant::named(None, None),
            other => Participant::PlainIdentifier(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Participant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Participant::from_value)
    }
}

/// Deserialize a participant list, treating anything that is not an array as empty.
pub(crate) fn participants_or_empty<'de, D>(deserializer: D) -> Result<Vec<Participant>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().map(Participant::from_value).collect()),
        _ => Ok(Vec::new()),
    }
}
