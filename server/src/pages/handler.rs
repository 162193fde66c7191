//! Page handlers.
//!
//! Each handler receives the ready-made [`PageContext`], mutates it through
//! chained calls, and hands the result to the renderer. The gates have
//! already run; a handler never checks access itself.

use axum::{Json, extract::State, response::Html};
use serde::Serialize;

use siteshell_types::types::SESSION_REDIRECT_KEY;

use crate::context::PageContext;
use crate::core::extract::Grant;
use crate::prelude::*;

/// GET / - public landing page
pub async fn home(State(app): State<App>, mut ctx: PageContext) -> ShResult<Html<String>> {
	let title = ctx.settings.get_opt("site_name").unwrap_or("Welcome").to_owned();
	ctx.set_title(&title).add_css("home.css").add_js_i18n("home_i18n.js");
	ctx.render(&app).await
}

/// GET /login - login page stub; the login flow itself lives elsewhere.
/// Shows where a pending redirect target would take the user afterwards.
pub async fn login(
	State(app): State<App>,
	Grant(grant): Grant,
	mut ctx: PageContext,
) -> ShResult<Html<String>> {
	if let Some(sid) = &grant.sid
		&& let Some(target) = app.session_adapter.read(sid, SESSION_REDIRECT_KEY).await?
	{
		debug!("Login page with pending redirect target {}", target);
	}

	ctx.set_title("Login");
	ctx.render(&app).await
}

/// GET /dashboard - private landing page
pub async fn dashboard(State(app): State<App>, mut ctx: PageContext) -> ShResult<Html<String>> {
	ctx.set_title("Dashboard").add_css("dashboard.css").add_js_i18n("dashboard_i18n.js");
	ctx.render(&app).await
}

/// GET /admin - admin landing page
pub async fn admin_home(State(app): State<App>, mut ctx: PageContext) -> ShResult<Html<String>> {
	ctx.set_title("Administration")
		.set_header("Site administration")
		.add_css("admin.css")
		.add_js("admin.js, charts.js");
	ctx.render(&app).await
}

#[derive(Serialize)]
pub struct StatusResponse {
	pub version: Box<str>,
	pub user: Option<Box<str>>,
	#[serde(rename = "serverTime")]
	pub server_time: Box<str>,
}

/// GET /api/status - machine endpoint on the base context: no theme, no
/// assets consumed, but the same settings snapshot and user resolution.
pub async fn api_status(ctx: PageContext) -> ShResult<Json<StatusResponse>> {
	let server_time = chrono::Utc::now().with_timezone(&ctx.settings.tz).to_rfc3339();

	Ok(Json(StatusResponse {
		version: ctx.settings.site_version.clone(),
		user: ctx.user.map(|u| u.name),
		server_time: server_time.into(),
	}))
}

// vim: ts=4
