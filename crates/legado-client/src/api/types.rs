//! Request and response bodies for the chat store REST API.
//!
//! Field names are the wire contract and stay in Spanish. Responses are
//! deserialized leniently: collection fields default to empty, unknown
//! fields are ignored, and timestamps fall back to the local clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use legado_types::chat::{lenient_datetime, ChatSummary, UserId};
use legado_types::message::{Message, Sender};

/// `POST /chats` body. With `user_id: null` the backend provisions a
/// guest user in the same call (the null must be present, not omitted).
#[derive(Debug, Serialize)]
pub struct CreateChatRequest<'a> {
    pub user_id: Option<&'a UserId>,
    pub nombre: &'a str,
    pub email: &'a str,
    pub nombre_chat: &'a str,
    pub contexto: &'a str,
}

/// `GET /chats?user_id=...` response.
#[derive(Debug, Deserialize)]
pub struct ListChatsResponse {
    #[serde(default)]
    pub chats: Vec<ChatSummary>,
}

/// `POST /chats` response.
#[derive(Debug, Deserialize)]
pub struct CreateChatResponse {
    pub chat: ChatSummary,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// One stored message as returned by `GET /chats/{id}/messages`.
#[derive(Debug, Deserialize)]
pub struct WireMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub contenido: String,
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub fecha_envio: Option<DateTime<Utc>>,
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        Message {
            sender: Sender::from_wire(&wire.sender),
            text: wire.contenido,
            // The store occasionally omits the send timestamp.
            sent_at: wire.fecha_envio.unwrap_or_else(Utc::now),
        }
    }
}

/// `GET /chats/{id}/messages` response.
#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<WireMessage>,
}

/// `POST /chats/{id}/messages` body.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

/// `PATCH /chats/{id}` body.
#[derive(Debug, Serialize)]
pub struct RenameChatRequest<'a> {
    pub nombre_chat: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_serializes_null_user_id() {
        let request = CreateChatRequest {
            user_id: None,
            nombre: "Invitado",
            email: "inv@ejemplo.com",
            nombre_chat: "Primer chat legal",
            contexto: "herencia",
        };
        let value = serde_json::to_value(&request).unwrap();
        // The backend distinguishes "null" from "absent".
        assert!(value.get("user_id").unwrap().is_null());
        assert_eq!(value["nombre_chat"], "Primer chat legal");
        assert_eq!(value["contexto"], "herencia");
    }

    #[test]
    fn test_list_response_defaults_missing_chats() {
        let parsed: ListChatsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.chats.is_empty());
    }

    #[test]
    fn test_list_response_with_numeric_ids() {
        let parsed: ListChatsResponse = serde_json::from_str(
            r#"{"chats": [{"id": 7, "nombre_chat": "Herencia", "fecha_creacion": "2025-01-15T09:30:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.chats.len(), 1);
        assert_eq!(parsed.chats[0].id.as_str(), "7");
        assert!(parsed.chats[0].created_at.is_some());
    }

    #[test]
    fn test_create_response_without_user_id() {
        let parsed: CreateChatResponse =
            serde_json::from_str(r#"{"chat": {"id": "c1", "nombre_chat": "Chat 2"}}"#).unwrap();
        assert!(parsed.user_id.is_none());
        assert_eq!(parsed.chat.name, "Chat 2");
    }

    #[test]
    fn test_wire_message_normalizes_sender() {
        let parsed: MessagesResponse = serde_json::from_str(
            r#"{"messages": [
                {"sender": "assistant", "contenido": "Buenas", "fecha_envio": "2025-01-15T09:31:00Z"},
                {"sender": "bot", "contenido": "también usuario"},
                {"contenido": "sin sender"}
            ]}"#,
        )
        .unwrap();

        let messages: Vec<Message> = parsed.messages.into_iter().map(Message::from).collect();
        assert_eq!(messages[0].sender, Sender::Assistant);
        // Anything but "assistant" is a user message.
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[2].sender, Sender::User);
        assert_eq!(messages[2].text, "sin sender");
    }

    #[test]
    fn test_send_and_rename_bodies() {
        let send = serde_json::to_value(SendMessageRequest { message: "hola" }).unwrap();
        assert_eq!(send, serde_json::json!({"message": "hola"}));

        let rename = serde_json::to_value(RenameChatRequest {
            nombre_chat: "Sucesión",
        })
        .unwrap();
        assert_eq!(rename, serde_json::json!({"nombre_chat": "Sucesión"}));
    }
}
