//! ChatStore and IdentityStore trait definitions.
//!
//! The chat store is the remote HTTP backend that owns all persistence;
//! the identity store is the single locally cached user id. Implementations
//! live in `legado-client`. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use legado_types::chat::{ChatId, ChatSummary, UserId};
use legado_types::error::{IdentityError, StoreError};
use legado_types::message::Message;

/// Result of creating a chat.
///
/// When no `user_id` was supplied, the backend provisions a user in the
/// same call and returns its id alongside the new chat.
#[derive(Debug, Clone)]
pub struct CreatedChat {
    pub chat: ChatSummary,
    pub user_id: Option<UserId>,
}

/// Remote chat/message store.
///
/// Each method is exactly one request attempt: no retries, no queueing.
pub trait ChatStore: Send + Sync {
    /// List chats for a user, most recent first.
    fn list_chats(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSummary>, StoreError>> + Send;

    /// Create a chat. With `user_id = None` the backend also provisions
    /// a guest user and returns its id.
    fn create_chat(
        &self,
        user_id: Option<&UserId>,
        chat_name: &str,
    ) -> impl std::future::Future<Output = Result<CreatedChat, StoreError>> + Send;

    /// Fetch the full message history of a chat, oldest first.
    fn get_messages(
        &self,
        chat_id: &ChatId,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, StoreError>> + Send;

    /// Send a user message and return the assistant reply.
    ///
    /// `Ok(None)` means the server answered 2xx but the reply field was
    /// missing or not a string; the caller substitutes its own fallback.
    fn send_message(
        &self,
        chat_id: &ChatId,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Persist a new display name for a chat.
    fn rename_chat(
        &self,
        chat_id: &ChatId,
        name: &str,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete a chat and its messages.
    fn delete_chat(
        &self,
        chat_id: &ChatId,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}

/// Local persistent store for the single cached user id.
///
/// Read once at bootstrap, written once when the backend first returns
/// a user id.
pub trait IdentityStore: Send + Sync {
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<UserId>, IdentityError>> + Send;

    fn save(
        &self,
        user_id: &UserId,
    ) -> impl std::future::Future<Output = Result<(), IdentityError>> + Send;
}
