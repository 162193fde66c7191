//! Per-request settings snapshot.

pub mod snapshot;

pub use snapshot::SettingsSnapshot;

// vim: ts=4
