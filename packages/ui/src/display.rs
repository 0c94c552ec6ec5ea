//! Formatting helpers shared by the activity cards.

use api::Participant;

/// Shown for a participant with nothing displayable.
pub const UNKNOWN_PARTICIPANT: &str = "Unknown";

/// Display name for an optional participant entry. `None` renders as "Unknown".
pub fn display_name(participant: Option<&Participant>) -> String {
    participant
        .map(Participant::display_name)
        .unwrap_or_else(|| UNKNOWN_PARTICIPANT.to_string())
}

/// Local part of an email-like identifier.
///
/// Only an `@` after the first character splits; `"@handle"` is returned as-is.
pub fn email_prefix(id: &str) -> &str {
    match id.find('@') {
        Some(at) if at > 0 => &id[..at],
        _ => id,
    }
}

/// Single upper-case initial for an avatar badge, or `"?"`.
pub fn initials(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .map(String::from)
        .unwrap_or_else(|| "?".to_string())
}

/// Escape text for insertion into HTML markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Name-first, email-second display rules for participants.
pub trait DisplayName {
    fn display_name(&self) -> String;
}

impl DisplayName for Participant {
    fn display_name(&self) -> String {
        match self {
            Participant::PlainIdentifier(id) if id.is_empty() => UNKNOWN_PARTICIPANT.to_string(),
            Participant::PlainIdentifier(id) => email_prefix(id).to_string(),
            Participant::NamedParticipant {
                name: Some(name), ..
            } if !name.is_empty() => name.clone(),
            Participant::NamedParticipant {
                email: Some(email), ..
            } if !email.is_empty() => email_prefix(email).to_string(),
            Participant::NamedParticipant { .. } => UNKNOWN_PARTICIPANT.to_string(),
        }
    }
}
