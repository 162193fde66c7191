//! Settings store adapter trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ShResult;

/// A single persisted site setting.
///
/// Names are unique within the store; lookups against the flattened
/// snapshot are case-sensitive exact matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
	pub name: Box<str>,
	pub value: Box<str>,
}

impl Setting {
	pub fn new(name: &str, value: &str) -> Setting {
		Setting { name: Box::from(name), value: Box::from(value) }
	}
}

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// Read all settings. A store failure here aborts request
	/// initialization; there is no partial snapshot.
	async fn read_settings(&self) -> ShResult<Vec<Setting>>;

	/// Upsert a single setting.
	async fn update_setting(&self, name: &str, value: &str) -> ShResult<()>;
}

// vim: ts=4
