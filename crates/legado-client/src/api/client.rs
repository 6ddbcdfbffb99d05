//! HttpChatStore -- concrete [`ChatStore`] implementation over reqwest.
//!
//! Speaks the JSON surface of the chat store backend. Every trait method
//! is exactly one request; failures map onto the [`StoreError`] taxonomy:
//! no response at all is `Transport`, a non-2xx status is `Http` with any
//! server-provided `detail`, and an unreadable 2xx body is `Decode` --
//! except on the send path, where a garbled success body degrades to
//! "no usable reply" the way the original product behaved.

use std::time::Duration;

use legado_core::store::{ChatStore, CreatedChat};
use legado_types::chat::{ChatId, ChatSummary, UserId};
use legado_types::config::ClientConfig;
use legado_types::error::StoreError;
use legado_types::message::Message;

use super::types::{
    CreateChatRequest, CreateChatResponse, ListChatsResponse, MessagesResponse,
    RenameChatRequest, SendMessageRequest,
};

/// HTTP implementation of the chat store.
pub struct HttpChatStore {
    client: reqwest::Client,
    base_url: String,
    guest_name: String,
    guest_email: String,
    contexto: String,
}

impl HttpChatStore {
    /// Request timeout. Assistant replies go through an LLM on the server
    /// side, so this is generous.
    const TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(config: &ClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            guest_name: config.guest_name.clone(),
            guest_email: config.guest_email.clone(),
            contexto: config.contexto.clone(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport(err: reqwest::Error) -> StoreError {
        StoreError::Transport(err.to_string())
    }

    fn decode(err: impl std::fmt::Display) -> StoreError {
        StoreError::Decode(err.to_string())
    }

    /// Turn a non-2xx response into `StoreError::Http`, pulling out the
    /// backend's `detail` string when the error body carries one.
    async fn http_error(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StoreError::Http {
            status,
            detail: extract_detail(&body),
        }
    }
}

/// Best-effort extraction of `{"detail": "..."}` from an error body.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(String::from)
}

impl ChatStore for HttpChatStore {
    async fn list_chats(&self, user_id: &UserId) -> Result<Vec<ChatSummary>, StoreError> {
        let response = self
            .client
            .get(self.url("/chats"))
            .query(&[("user_id", user_id.as_str())])
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        let parsed: ListChatsResponse = response.json().await.map_err(Self::decode)?;
        Ok(parsed.chats)
    }

    async fn create_chat(
        &self,
        user_id: Option<&UserId>,
        chat_name: &str,
    ) -> Result<CreatedChat, StoreError> {
        let body = CreateChatRequest {
            user_id,
            nombre: &self.guest_name,
            email: &self.guest_email,
            nombre_chat: chat_name,
            contexto: &self.contexto,
        };

        let response = self
            .client
            .post(self.url("/chats"))
            .json(&body)
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        let parsed: CreateChatResponse = response.json().await.map_err(Self::decode)?;
        Ok(CreatedChat {
            chat: parsed.chat,
            user_id: parsed.user_id,
        })
    }

    async fn get_messages(&self, chat_id: &ChatId) -> Result<Vec<Message>, StoreError> {
        let response = self
            .client
            .get(self.url(&format!("/chats/{chat_id}/messages")))
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        let parsed: MessagesResponse = response.json().await.map_err(Self::decode)?;
        Ok(parsed.messages.into_iter().map(Message::from).collect())
    }

    async fn send_message(
        &self,
        chat_id: &ChatId,
        text: &str,
    ) -> Result<Option<String>, StoreError> {
        let response = self
            .client
            .post(self.url(&format!("/chats/{chat_id}/messages")))
            .json(&SendMessageRequest { message: text })
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }

        // A 2xx with an unreadable body is "no usable reply", not an error;
        // the controller substitutes its fallback string.
        let body = response.text().await.map_err(Self::transport)?;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap_or_default();
        Ok(value
            .get("respuesta")
            .and_then(|r| r.as_str())
            .map(String::from))
    }

    async fn rename_chat(&self, chat_id: &ChatId, name: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.url(&format!("/chats/{chat_id}")))
            .json(&RenameChatRequest { nombre_chat: name })
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }
        Ok(())
    }

    async fn delete_chat(&self, chat_id: &ChatId) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.url(&format!("/chats/{chat_id}")))
            .send()
            .await
            .map_err(Self::transport)?;

        if !response.status().is_success() {
            return Err(Self::http_error(response).await);
        }
        Ok(())
    }
}
