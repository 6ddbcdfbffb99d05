//! Session controller reconciling local UI state with the remote chat store.
//!
//! The controller owns the chat list, the current chat, and the message
//! list shown to the user, and orchestrates bootstrap, selection, creation,
//! rename, deletion, and sends against a [`ChatStore`]. Every failure
//! degrades to a visible fallback bubble; nothing here panics or retries.
//!
//! All operations take `&mut self`, so callers cannot overlap two store
//! round trips on the same controller: a second select cannot start before
//! the first settles, which makes the displayed message list always match
//! the most recently settled fetch. The busy flag is advisory and only
//! gates UI affordances.

use legado_types::chat::{ChatId, ChatSummary, UserId};
use legado_types::error::StoreError;
use legado_types::message::Message;
use tracing::{error, warn};

use crate::store::{ChatStore, IdentityStore};

/// Name given to the chat created during first-run provisioning.
pub const FIRST_CHAT_NAME: &str = "Primer chat legal";

/// Name given to a chat created implicitly by sending with none selected.
pub const DEFAULT_CHAT_NAME: &str = "Nuevo chat";

/// Greeting shown when a chat has no stored history.
pub const GREETING: &str = "¡Hola! Soy tu asistente legal para consultas sobre herencia en Perú. \
     ¿En qué puedo ayudarte hoy?";

/// Shown when the chat list itself cannot be fetched at bootstrap.
pub const CHATS_LOAD_FAILED: &str =
    "No pude cargar tu historial de chats, pero igual puedes hacer consultas 🙂";

/// Shown when first-run provisioning fails.
pub const BOOTSTRAP_FAILED: &str =
    "No pude iniciar tu sesión de chat, intenta de nuevo más tarde.";

/// Shown in place of history when the fetch for a chat fails.
pub const HISTORY_LOAD_FAILED: &str = "No pude cargar los mensajes de este chat.";

/// Shown after the last chat is deleted.
pub const NO_CHATS: &str =
    "¡Hola! Crea un nuevo chat para empezar a hacer tus consultas sobre herencia.";

/// Substituted when the server answers 2xx without a usable reply field.
pub const REPLY_FALLBACK: &str = "No pude responder ahora.";

/// Error bubble for a non-2xx send; `Detalle: ...` is appended when the
/// server included one.
pub const SEND_SERVER_ERROR: &str = "⚠️ El servidor respondió con un error.";

/// Error bubble for a send that never reached the server.
pub const SEND_CONNECTION_ERROR: &str = "⚠️ Error al conectar con el servidor.";

/// The currently selected chat.
#[derive(Debug, Clone)]
pub struct CurrentChat {
    pub id: ChatId,
    pub name: String,
}

/// Client-side chat session controller.
///
/// Generic over the store traits so tests can drive it with in-memory
/// fakes; production pins it to the HTTP and file implementations in
/// `legado-client`.
pub struct SessionController<S: ChatStore, I: IdentityStore> {
    store: S,
    identity: I,
    user_id: Option<UserId>,
    chats: Vec<ChatSummary>,
    current: Option<CurrentChat>,
    messages: Vec<Message>,
    busy: bool,
    rename_draft: Option<String>,
}

impl<S: ChatStore, I: IdentityStore> SessionController<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self {
            store,
            identity,
            user_id: None,
            chats: Vec::new(),
            current: None,
            messages: Vec::new(),
            busy: false,
            rename_draft: None,
        }
    }

    // --- Accessors ---

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn chats(&self) -> &[ChatSummary] {
        &self.chats
    }

    pub fn current_chat(&self) -> Option<&CurrentChat> {
        self.current.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_renaming(&self) -> bool {
        self.rename_draft.is_some()
    }

    // --- Bootstrap ---

    /// One-time startup sequence.
    ///
    /// With a cached user id, fetches that user's chats and selects the
    /// first; an empty list falls through to first-run provisioning. With
    /// no cached id, provisions a guest user and an initial chat in one
    /// remote call. Network failures degrade to a fallback bubble.
    pub async fn bootstrap(&mut self) {
        let stored = match self.identity.load().await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "could not read cached user id, treating as first run");
                None
            }
        };

        match stored {
            Some(user_id) => {
                self.user_id = Some(user_id);
                self.load_chats().await;
            }
            None => {
                self.provision().await;
            }
        }
    }

    /// Fetch the chat list for the known user and select the first entry.
    async fn load_chats(&mut self) {
        let user_id = match &self.user_id {
            Some(id) => id.clone(),
            None => return,
        };

        match self.store.list_chats(&user_id).await {
            Ok(chats) if !chats.is_empty() => {
                self.chats = chats;
                let first = self.chats[0].clone();
                self.select_chat(first.id, first.name).await;
            }
            Ok(_) => {
                self.provision().await;
            }
            Err(err) => {
                error!(error = %err, "chat list fetch failed");
                self.messages = vec![Message::assistant(CHATS_LOAD_FAILED)];
            }
        }
    }

    /// Create a guest user and an initial chat in one remote call, cache
    /// the returned user id, and select the new chat.
    async fn provision(&mut self) -> Option<ChatId> {
        self.busy = true;

        let result = self.store.create_chat(None, FIRST_CHAT_NAME).await;
        let created = match result {
            Ok(created) => created,
            Err(err) => {
                error!(error = %err, "first-run provisioning failed");
                self.messages = vec![Message::assistant(BOOTSTRAP_FAILED)];
                self.busy = false;
                return None;
            }
        };

        if let Some(user_id) = created.user_id {
            if let Err(err) = self.identity.save(&user_id).await {
                warn!(error = %err, "could not persist user id, next run will provision again");
            }
            self.user_id = Some(user_id);
        }

        let chat = created.chat;
        let chat_id = chat.id.clone();
        let chat_name = chat.name.clone();
        self.chats = vec![chat];
        self.select_chat(chat_id.clone(), chat_name).await;

        self.busy = false;
        Some(chat_id)
    }

    // --- Selection ---

    /// Make a chat current and replace the message list with its history.
    ///
    /// An empty history is rendered as a single synthetic greeting; a
    /// failed fetch as a single local error bubble. Cancels any rename in
    /// progress. Busy is cleared on every path out of this call.
    pub async fn select_chat(&mut self, id: ChatId, name: String) {
        self.rename_draft = None;
        self.busy = true;
        self.current = Some(CurrentChat {
            id: id.clone(),
            name,
        });

        match self.store.get_messages(&id).await {
            Ok(history) if history.is_empty() => {
                self.messages = vec![Message::assistant(GREETING)];
            }
            Ok(history) => {
                self.messages = history;
            }
            Err(err) => {
                warn!(chat_id = %id, error = %err, "history fetch failed");
                self.messages = vec![Message::system(HISTORY_LOAD_FAILED)];
            }
        }

        self.busy = false;
    }

    // --- Creation ---

    /// Create a chat for the known user, prepend it to the list, and
    /// select it. Falls back to full provisioning when no user id exists
    /// yet. Returns `None` on failure with prior state untouched.
    pub async fn create_chat(&mut self, name: &str) -> Option<ChatId> {
        let user_id = match &self.user_id {
            Some(id) => id.clone(),
            None => return self.provision().await,
        };

        self.busy = true;
        let result = self.store.create_chat(Some(&user_id), name).await;
        let created = match result {
            Ok(created) => created,
            Err(err) => {
                error!(error = %err, "chat creation failed");
                self.busy = false;
                return None;
            }
        };

        let chat = created.chat;
        let chat_id = chat.id.clone();
        let chat_name = chat.name.clone();
        self.chats.insert(0, chat);
        self.select_chat(chat_id.clone(), chat_name).await;

        self.busy = false;
        Some(chat_id)
    }

    // --- Deletion ---

    /// Delete a chat. The caller is responsible for confirming the action
    /// with the user first.
    ///
    /// The local list only changes after the remote delete succeeds. When
    /// the current chat is deleted, the first remaining chat is selected;
    /// with none left, the view resets to the "create a chat" fallback
    /// without any further remote call. Returns whether the delete took
    /// effect.
    pub async fn delete_chat(&mut self, id: &ChatId) -> bool {
        if let Err(err) = self.store.delete_chat(id).await {
            warn!(chat_id = %id, error = %err, "chat delete failed");
            return false;
        }

        self.chats.retain(|c| c.id != *id);

        let was_current = self
            .current
            .as_ref()
            .is_some_and(|current| current.id == *id);
        if was_current {
            match self.chats.first().cloned() {
                Some(next) => {
                    self.select_chat(next.id, next.name).await;
                }
                None => {
                    self.current = None;
                    self.rename_draft = None;
                    self.messages = vec![Message::assistant(NO_CHATS)];
                }
            }
        }

        true
    }

    // --- Rename ---

    /// Enter rename mode, seeding the draft with the current name.
    pub fn begin_rename(&mut self) {
        if let Some(current) = &self.current {
            self.rename_draft = Some(current.name.clone());
        }
    }

    /// Replace the in-progress rename draft.
    pub fn set_rename_draft(&mut self, draft: impl Into<String>) {
        if self.rename_draft.is_some() {
            self.rename_draft = Some(draft.into());
        }
    }

    /// Leave rename mode without persisting anything.
    pub fn cancel_rename(&mut self) {
        self.rename_draft = None;
    }

    /// Persist the rename draft. A blank draft or missing current chat is
    /// a silent no-op; a store failure leaves the displayed name as it
    /// was. Edit mode exits on every path.
    pub async fn commit_rename(&mut self) {
        let Some(draft) = self.rename_draft.take() else {
            return;
        };
        let trimmed = draft.trim();
        let Some(current) = &self.current else {
            return;
        };
        if trimmed.is_empty() {
            return;
        }

        let chat_id = current.id.clone();
        match self.store.rename_chat(&chat_id, trimmed).await {
            Ok(()) => {
                if let Some(current) = &mut self.current {
                    current.name = trimmed.to_string();
                }
                if let Some(entry) = self.chats.iter_mut().find(|c| c.id == chat_id) {
                    entry.name = trimmed.to_string();
                }
            }
            Err(err) => {
                warn!(chat_id = %chat_id, error = %err, "chat rename failed");
            }
        }
    }

    // --- Send ---

    /// Send a user message to the current chat.
    ///
    /// With no current chat, one is created first ("Nuevo chat"); the send
    /// is silently dropped if that fails. The user's message is echoed
    /// locally before the round trip. Exactly one request attempt: an HTTP
    /// error appends one error bubble carrying any server `detail`, a
    /// transport error appends a distinct bubble, and a success appends
    /// the assistant reply (or a fixed fallback when the reply field is
    /// unusable). Busy is cleared in all outcomes.
    pub async fn send_message(&mut self, text: &str) {
        let chat_id = match &self.current {
            Some(current) => current.id.clone(),
            None => match self.create_chat(DEFAULT_CHAT_NAME).await {
                Some(id) => id,
                None => return,
            },
        };

        self.messages.push(Message::user(text));
        self.busy = true;

        match self.store.send_message(&chat_id, text).await {
            Ok(Some(reply)) => {
                self.messages.push(Message::assistant(reply));
            }
            Ok(None) => {
                self.messages.push(Message::assistant(REPLY_FALLBACK));
            }
            Err(StoreError::Http { status, detail }) => {
                warn!(chat_id = %chat_id, status, "send rejected by server");
                let bubble = match detail {
                    Some(detail) => format!("{SEND_SERVER_ERROR}\nDetalle: {detail}"),
                    None => SEND_SERVER_ERROR.to_string(),
                };
                self.messages.push(Message::system(bubble));
            }
            Err(err) => {
                error!(chat_id = %chat_id, error = %err, "send failed");
                self.messages.push(Message::system(SEND_CONNECTION_ERROR));
            }
        }

        self.busy = false;
    }
}
