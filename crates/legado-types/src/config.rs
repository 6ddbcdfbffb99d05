//! Client configuration types for Legado.
//!
//! `ClientConfig` represents the `config.toml` that points the client at a
//! chat store deployment and supplies the guest profile sent when a user is
//! provisioned on first run.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Legado client.
///
/// Loaded from `~/.legado/config.toml`. All fields have defaults matching
/// the reference deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the chat store API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Display name used when provisioning a guest user.
    #[serde(default = "default_guest_name")]
    pub guest_name: String,

    /// Email used when provisioning a guest user.
    #[serde(default = "default_guest_email")]
    pub guest_email: String,

    /// Legal domain the backend scopes its answers to.
    #[serde(default = "default_contexto")]
    pub contexto: String,
}

fn default_api_base() -> String {
    "http://localhost:5000".to_string()
}

fn default_guest_name() -> String {
    "Invitado".to_string()
}

fn default_guest_email() -> String {
    "inv@ejemplo.com".to_string()
}

fn default_contexto() -> String {
    "herencia".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            guest_name: default_guest_name(),
            guest_email: default_guest_email(),
            contexto: default_contexto(),
        }
    }
}
