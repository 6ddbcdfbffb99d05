//! Session controller and store trait definitions for Legado.
//!
//! This crate defines the "ports" (store traits) that the infrastructure
//! layer implements, and the [`controller::SessionController`] that drives
//! them. It depends only on `legado-types` -- never on `legado-client` or
//! any HTTP/IO crate.

pub mod controller;
pub mod store;
