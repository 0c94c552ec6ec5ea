//! # Wire models for the activities backend
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Activity`] | One entry of `GET /activities`: description, schedule, capacity, participants. |
//! | [`Activities`] | The whole collection, kept in the backend's serialization order. |
//! | [`Participant`] | A participant given either as a bare identifier or as a name/email record. |
//! | [`SignupRequest`] | Activity name + email, built from the signup form. |
//! | [`ServerReply`] | Body of a signup/unregister response (`message` on success, `detail` on failure). |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

mod activity;
mod participant;

pub use activity::{Activities, Activity};
pub use participant::Participant;

/// A signup (or unregister) for one activity, keyed by email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

/// JSON body returned by the signup and unregister endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerReply {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_none")]
    pub message: Option<String>,
    /// Validation failures may carry a structured `detail`; only text is kept.
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "string_or_none")]
    pub detail: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl ServerReply {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            detail: None,
        }
    }

    pub fn with_detail(detail: impl Into<String>) -> Self {
        Self {
            message: None,
            detail: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_with_structured_detail() {
        let body = r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#;
        let reply: ServerReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply, ServerReply::default());
    }

    #[test]
    fn test_reply_message_and_detail() {
        let reply: ServerReply = serde_json::from_str(r#"{"message": "Signed up!"}"#).unwrap();
        assert_eq!(reply, ServerReply::with_message("Signed up!"));

        let reply: ServerReply = serde_json::from_str(r#"{"detail": "Activity full"}"#).unwrap();
        assert_eq!(reply, ServerReply::with_detail("Activity full"));
    }
}
