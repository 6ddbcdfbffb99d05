//! Application state shared by the CLI commands.
//!
//! The controller is generic over its store traits; AppState pins it to
//! the HTTP chat store and the file identity store from `legado-client`.

use std::path::PathBuf;

use legado_client::{resolve_data_dir, FileIdentityStore, HttpChatStore};
use legado_core::controller::SessionController;
use legado_types::config::ClientConfig;

/// Controller pinned to the production store implementations.
pub type ConcreteController = SessionController<HttpChatStore, FileIdentityStore>;

pub struct AppState {
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory and load configuration.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;
        let config = legado_client::config::load_config(&data_dir).await;
        Ok(Self { config, data_dir })
    }

    /// Build a fresh controller wired to the configured backend.
    pub fn controller(&self) -> ConcreteController {
        SessionController::new(self.store(), self.identity())
    }

    pub fn store(&self) -> HttpChatStore {
        HttpChatStore::new(&self.config)
    }

    pub fn identity(&self) -> FileIdentityStore {
        FileIdentityStore::new(&self.data_dir)
    }
}
