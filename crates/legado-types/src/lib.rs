//! Shared domain types for Legado.
//!
//! This crate contains the types used across the Legado terminal client:
//! chats, messages, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod message;
