//! Chat identifiers and session summaries.
//!
//! Identifiers are owned by the backend and opaque to this client. The
//! store serializes them inconsistently (strings in some deployments,
//! integers in others), so deserialization accepts both and normalizes
//! to a string.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use std::fmt;

/// Opaque backend identifier for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserId(pub String);

/// Opaque backend identifier for a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChatId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        ChatId(s.to_string())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_opaque_id(deserializer).map(UserId)
    }
}

impl<'de> Deserialize<'de> for ChatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_opaque_id(deserializer).map(ChatId)
    }
}

/// Accept a JSON string or number and normalize to a string.
fn deserialize_opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// A chat session as listed by the store.
///
/// Field names follow the wire contract of the backend (`nombre_chat`,
/// `fecha_creacion`). The creation timestamp is best-effort: the backend
/// is not strict about its date format, so an unparseable value becomes
/// `None` instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSummary {
    pub id: ChatId,
    #[serde(rename = "nombre_chat", default)]
    pub name: String,
    #[serde(
        rename = "fecha_creacion",
        default,
        deserialize_with = "lenient_datetime"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 timestamp, tolerating absent or malformed values.
pub fn lenient_datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_id_from_string() {
        let summary: ChatSummary = serde_json::from_str(
            r#"{"id": "abc-123", "nombre_chat": "Primer chat legal", "fecha_creacion": "2025-03-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(summary.id, ChatId::from("abc-123"));
        assert_eq!(summary.name, "Primer chat legal");
        assert!(summary.created_at.is_some());
    }

    #[test]
    fn test_chat_id_from_number() {
        let summary: ChatSummary =
            serde_json::from_str(r#"{"id": 42, "nombre_chat": "Chat 2"}"#).unwrap();
        assert_eq!(summary.id.as_str(), "42");
        assert!(summary.created_at.is_none());
    }

    #[test]
    fn test_malformed_date_becomes_none() {
        let summary: ChatSummary = serde_json::from_str(
            r#"{"id": 1, "nombre_chat": "x", "fecha_creacion": "yesterday"}"#,
        )
        .unwrap();
        assert!(summary.created_at.is_none());
    }

    #[test]
    fn test_rejects_non_scalar_id() {
        let result: Result<ChatSummary, _> =
            serde_json::from_str(r#"{"id": {"inner": 1}, "nombre_chat": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from("u-9").to_string(), "u-9");
    }
}
