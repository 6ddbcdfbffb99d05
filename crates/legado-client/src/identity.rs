//! Single-file local identity store.
//!
//! The backend provisions a user on first use and the client caches the
//! returned id in `{data_dir}/user_id`: read once at startup, written
//! once when the id is first obtained.

use std::path::{Path, PathBuf};

use legado_core::store::IdentityStore;
use legado_types::chat::UserId;
use legado_types::error::IdentityError;

/// File-backed implementation of the identity store.
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("user_id"),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityStore for FileIdentityStore {
    async fn load(&self) -> Result<Option<UserId>, IdentityError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let trimmed = content.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(UserId::from(trimmed)))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, user_id: &UserId) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, user_id.as_str()).await?;
        Ok(())
    }
}

/// Resolve the Legado data directory.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LEGADO_DATA_DIR") {
        return PathBuf::from(dir);
    }

    // Home directory fallback: ~/.legado
    if let Some(home) = dirs::home_dir() {
        return home.join(".legado");
    }

    // Last resort: current directory
    PathBuf::from(".legado")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let tmp = tempdir().unwrap();
        let store = FileIdentityStore::new(tmp.path());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let tmp = tempdir().unwrap();
        let store = FileIdentityStore::new(tmp.path());

        store.save(&UserId::from("u-42")).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, Some(UserId::from("u-42")));
    }

    #[tokio::test]
    async fn test_save_creates_missing_data_dir() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("nested").join("dir");
        let store = FileIdentityStore::new(&nested);

        store.save(&UserId::from("u-1")).await.unwrap();
        assert!(nested.join("user_id").exists());
    }

    #[tokio::test]
    async fn test_load_trims_whitespace() {
        let tmp = tempdir().unwrap();
        let store = FileIdentityStore::new(tmp.path());
        tokio::fs::write(store.path(), "  u-9\n").await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(UserId::from("u-9")));
    }

    #[tokio::test]
    async fn test_load_blank_file_is_none() {
        let tmp = tempdir().unwrap();
        let store = FileIdentityStore::new(tmp.path());
        tokio::fs::write(store.path(), "\n").await.unwrap();

        assert!(store.load().await.unwrap().is_none());
    }
}
