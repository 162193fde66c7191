//! In-process session store.
//!
//! Sessions are nested maps behind a single RwLock: session id to a
//! key/value slot. Suitable for single-node deployments and tests; a
//! multi-node site wants a shared store behind the same trait.

use parking_lot::RwLock;
use std::collections::HashMap;

use async_trait::async_trait;
use siteshell::error::ShResult;
use siteshell::session_adapter::SessionAdapter;
use siteshell::types::SessionId;

type SessionSlot = HashMap<Box<str>, Box<str>>;

#[derive(Debug, Default)]
pub struct SessionAdapterMemory {
	sessions: RwLock<HashMap<Box<str>, SessionSlot>>,
}

impl SessionAdapterMemory {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl SessionAdapter for SessionAdapterMemory {
	async fn create(&self) -> ShResult<SessionId> {
		let sid: Box<str> = uuid::Uuid::new_v4().to_string().into();
		self.sessions.write().insert(sid.clone(), SessionSlot::new());
		Ok(SessionId(sid))
	}

	async fn read(&self, sid: &SessionId, key: &str) -> ShResult<Option<Box<str>>> {
		Ok(self.sessions.read().get(sid.as_str()).and_then(|slot| slot.get(key)).cloned())
	}

	// Writing to an unknown session id creates its slot; cookies can
	// outlive a restarted process.
	async fn write(&self, sid: &SessionId, key: &str, value: &str) -> ShResult<()> {
		self.sessions
			.write()
			.entry(Box::from(sid.as_str()))
			.or_default()
			.insert(Box::from(key), Box::from(value));
		Ok(())
	}

	async fn delete(&self, sid: &SessionId, key: &str) -> ShResult<()> {
		if let Some(slot) = self.sessions.write().get_mut(sid.as_str()) {
			slot.remove(key);
		}
		Ok(())
	}
}


// vim: ts=4
