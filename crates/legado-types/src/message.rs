//! Conversation messages and sender roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Who authored a message.
///
/// The store is only trusted to mark assistant turns explicitly: any wire
/// value other than `"assistant"` is normalized to [`Sender::User`].
/// `System` never comes off the wire; it marks bubbles generated locally
/// by the client (send failures, history-load errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    System,
}

impl Sender {
    /// Normalize a raw wire value into a sender role.
    pub fn from_wire(raw: &str) -> Self {
        if raw == "assistant" {
            Sender::Assistant
        } else {
            Sender::User
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Assistant => write!(f, "assistant"),
            Sender::System => write!(f, "system"),
        }
    }
}

/// One turn in a chat, authored by the user, the assistant, or the client
/// itself.
///
/// Messages synthesized locally (greeting, error bubbles, the optimistic
/// echo of an outgoing message) are stamped with the local clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// A user message stamped now.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    /// An assistant message stamped now.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Assistant,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }

    /// A locally generated error bubble stamped now.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::System,
            text: text.into(),
            sent_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_normalization() {
        assert_eq!(Sender::from_wire("assistant"), Sender::Assistant);
        assert_eq!(Sender::from_wire("user"), Sender::User);
        // Anything unexpected counts as the user side.
        assert_eq!(Sender::from_wire("bot"), Sender::User);
        assert_eq!(Sender::from_wire("usuario"), Sender::User);
        assert_eq!(Sender::from_wire(""), Sender::User);
        // System is local-only and never parsed off the wire.
        assert_eq!(Sender::from_wire("system"), Sender::User);
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Sender = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Sender::User);
    }

    #[test]
    fn test_message_constructors() {
        let m = Message::user("hola");
        assert_eq!(m.sender, Sender::User);
        assert_eq!(m.text, "hola");

        let m = Message::assistant("buenas");
        assert_eq!(m.sender, Sender::Assistant);

        let m = Message::system("sin conexión");
        assert_eq!(m.sender, Sender::System);
    }
}
