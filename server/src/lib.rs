//! Siteshell is the shared page-composition layer of a themed site server.
//!
//! Every page request goes through the same pipeline:
//!
//! - a role gate decides whether the request may proceed, redirecting to the
//!   login page or the site root when it may not
//! - a [`context::PageContext`] is assembled from the settings store, the
//!   session-derived user, and the theme resolved for the granted role
//! - the page handler mutates the context through chained calls (titles,
//!   extra assets) and hands the final bundle to the template renderer
//!
//! Nothing composed here outlives the request. The settings store, session
//! store, translation resolver, and renderer are adapter traits defined in
//! `siteshell-types`; concrete implementations live in the adapter crates.

#![forbid(unsafe_code)]

pub mod assets;
pub mod context;
pub mod core;
pub mod error;
pub mod page;
pub mod pages;
pub mod prelude;
pub mod routes;
pub mod settings;
pub mod theme;

pub use crate::core::app::{Adapters, App, AppBuilder, AppState, VERSION};
pub use crate::core::config::SiteConfig;
pub use crate::core::gate::Role;

// vim: ts=4
