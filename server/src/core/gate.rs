//! Role gates: per-section access checks run before any page handler.
//!
//! Each routed section of the site is layered with exactly one gate. A gate
//! either records a [`RoleGrant`] in the request extensions and lets the
//! request through, or short-circuits with a redirect — nothing after a
//! failed gate executes in that request.

use axum::{
	body::Body,
	extract::State,
	http::{HeaderMap, HeaderValue, Request, Uri, header, response::Response},
	middleware::Next,
	response::{IntoResponse, Redirect},
};

use siteshell_types::types::{SESSION_REDIRECT_KEY, SESSION_USER_KEY, SessionId, User};

use crate::prelude::*;

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "sid";

/// Access-control variant of a routed section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
	/// Anyone may proceed; a logged-in user is attached when present.
	Public,
	/// Requires a logged-in user.
	Authenticated,
	/// Requires a logged-in user with the admin flag.
	Admin,
	/// Machine clients: base context only, no theming, no redirects.
	Api,
}

/// Outcome of a passed gate, consumed by the page-context extractor.
#[derive(Clone, Debug)]
pub struct RoleGrant {
	pub role: Role,
	pub user: Option<User>,
	pub sid: Option<SessionId>,
}

fn session_id(headers: &HeaderMap) -> Option<SessionId> {
	let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
	cookies.split(';').find_map(|pair| {
		let (name, value) = pair.split_once('=')?;
		if name.trim() == SESSION_COOKIE { Some(SessionId::new(value.trim())) } else { None }
	})
}

/// Re-fetch the logged-in user from the session store. A malformed session
/// record is treated as logged-out, not as a request failure.
async fn current_user(app: &App, sid: Option<&SessionId>) -> ShResult<Option<User>> {
	let Some(sid) = sid else { return Ok(None) };
	let Some(raw) = app.session_adapter.read(sid, SESSION_USER_KEY).await? else {
		return Ok(None);
	};
	match serde_json::from_str::<User>(&raw) {
		Ok(user) => Ok(Some(user)),
		Err(err) => {
			warn!("Discarding malformed session user record for {}: {}", sid, err);
			Ok(None)
		}
	}
}

async fn resolve(app: &App, headers: &HeaderMap) -> ShResult<(Option<SessionId>, Option<User>)> {
	let sid = session_id(headers);
	let user = current_user(app, sid.as_ref()).await?;
	Ok((sid, user))
}

/// Remember the originally requested path so the login flow can resume it,
/// then redirect to the login page. The site root is never remembered. A
/// visitor arriving without a session gets one allocated here, with the
/// cookie issued on the redirect response, so the target survives the
/// login round trip.
async fn redirect_to_login(
	app: &App,
	sid: Option<&SessionId>,
	uri: &Uri,
) -> ShResult<Response<Body>> {
	let requested = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or_else(|| uri.path());

	let mut response = Redirect::to(&app.config.login_path).into_response();

	if uri.path() != "/" {
		let sid = match sid {
			Some(sid) => sid.clone(),
			None => {
				let sid = app.session_adapter.create().await?;
				let cookie = format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, sid);
				response.headers_mut().append(
					header::SET_COOKIE,
					HeaderValue::from_str(&cookie).map_err(|_| Error::SessionError)?,
				);
				sid
			}
		};
		app.session_adapter.write(&sid, SESSION_REDIRECT_KEY, requested).await?;
	}

	debug!("Unauthenticated access to {}, redirecting to login", requested);
	Ok(response)
}

pub async fn gate_public(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ShResult<Response<Body>> {
	let (sid, user) = resolve(&app, req.headers()).await?;
	req.extensions_mut().insert(RoleGrant { role: Role::Public, user, sid });
	Ok(next.run(req).await)
}

pub async fn gate_authenticated(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ShResult<Response<Body>> {
	let (sid, user) = resolve(&app, req.headers()).await?;
	let Some(user) = user else {
		return redirect_to_login(&app, sid.as_ref(), req.uri()).await;
	};

	req.extensions_mut().insert(RoleGrant { role: Role::Authenticated, user: Some(user), sid });
	Ok(next.run(req).await)
}

pub async fn gate_admin(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ShResult<Response<Body>> {
	let (sid, user) = resolve(&app, req.headers()).await?;
	let Some(user) = user else {
		return redirect_to_login(&app, sid.as_ref(), req.uri()).await;
	};

	// Logged in but not an admin: back to the site root, no message, and no
	// redirect target recorded.
	if !user.is_admin {
		debug!("Non-admin user {} denied on {}", user.user_id, req.uri().path());
		return Ok(Redirect::to("/").into_response());
	}

	req.extensions_mut().insert(RoleGrant { role: Role::Admin, user: Some(user), sid });
	Ok(next.run(req).await)
}

pub async fn gate_api(
	State(app): State<App>,
	mut req: Request<Body>,
	next: Next,
) -> ShResult<Response<Body>> {
	let (sid, user) = resolve(&app, req.headers()).await?;
	req.extensions_mut().insert(RoleGrant { role: Role::Api, user, sid });
	Ok(next.run(req).await)
}


// vim: ts=4
