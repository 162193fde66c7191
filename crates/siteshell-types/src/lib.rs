//! Shared types and adapter traits for the Siteshell page server.
//!
//! The server crate composes per-request page contexts out of collaborators
//! it does not own: a settings store, a session store, a translation URL
//! resolver, and a template renderer. Those collaborators live here as
//! traits so adapter crates can implement them without depending on the
//! server itself.

pub mod error;
pub mod i18n_adapter;
pub mod render;
pub mod session_adapter;
pub mod settings_adapter;
pub mod types;

pub use error::{Error, ShResult};

// vim: ts=4
