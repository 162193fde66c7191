//! Common types shared between the server and adapter crates.

use serde::{Deserialize, Serialize};

// SessionId //
//***********//
/// Opaque session identifier, carried in the `sid` cookie.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(pub Box<str>);

impl SessionId {
	pub fn new(sid: &str) -> SessionId {
		SessionId(Box::from(sid))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for SessionId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// User //
//******//
/// Logged-in user record, as stored in the session under [`SESSION_USER_KEY`].
///
/// Ownership of the record lives in the session store; the server only reads
/// it, once per request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
	#[serde(rename = "userId")]
	pub user_id: u32,
	pub name: Box<str>,
	#[serde(rename = "isAdmin")]
	pub is_admin: bool,
}

/// Session key the login flow stores the serialized [`User`] under.
pub const SESSION_USER_KEY: &str = "logged_in";

/// Session key holding the originally requested path, written when an
/// unauthenticated request hits a protected route so the user can be sent
/// back there after login.
pub const SESSION_REDIRECT_KEY: &str = "redirect";

// vim: ts=4
