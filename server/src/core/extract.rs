//! Axum extractors bridging the gates and the page context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::context::PageContext;
use crate::core::gate::RoleGrant;
use crate::prelude::*;

// Grant //
//*******//
/// Role grant recorded by the gate middleware. Requesting it on a route
/// without a gate layer is a wiring bug and rejects the request.
#[derive(Clone, Debug)]
pub struct Grant(pub RoleGrant);

impl<S> FromRequestParts<S> for Grant
where
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
		parts.extensions.get::<RoleGrant>().cloned().map(Grant).ok_or(Error::PermissionDenied)
	}
}

// PageContext //
//*************//
impl FromRequestParts<App> for PageContext {
	type Rejection = Error;

	async fn from_request_parts(parts: &mut Parts, state: &App) -> Result<Self, Self::Rejection> {
		let grant =
			parts.extensions.get::<RoleGrant>().cloned().ok_or(Error::PermissionDenied)?;
		let current_uri =
			parts.uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| parts.uri.path());

		PageContext::build(state, grant, current_uri).await
	}
}

// vim: ts=4
