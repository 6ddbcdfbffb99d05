//! HTTP client for the chat store REST API.

pub mod client;
pub mod types;

pub use client::HttpChatStore;
