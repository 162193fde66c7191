//! Session store adapter trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::ShResult;
use crate::types::SessionId;

/// Per-visitor key/value session storage.
///
/// Each request owns its own session slot; the server reads the user record
/// at gate time and conditionally writes the redirect target. No locking
/// contract is required above the adapter.
#[async_trait]
pub trait SessionAdapter: Debug + Send + Sync {
	/// Allocate a fresh session and return its id.
	async fn create(&self) -> ShResult<SessionId>;

	async fn read(&self, sid: &SessionId, key: &str) -> ShResult<Option<Box<str>>>;

	async fn write(&self, sid: &SessionId, key: &str, value: &str) -> ShResult<()>;

	async fn delete(&self, sid: &SessionId, key: &str) -> ShResult<()>;
}

// vim: ts=4
