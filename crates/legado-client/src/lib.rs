//! Infrastructure adapters for Legado.
//!
//! Implements the store traits from `legado-core` against the real world:
//! the REST chat store over HTTP and the single-file local identity store.
//! Also owns data-dir resolution and `config.toml` loading.

pub mod api;
pub mod config;
pub mod identity;

pub use api::HttpChatStore;
pub use identity::{resolve_data_dir, FileIdentityStore};
