//! Page-context composition through the full router: the bundle handed to
//! the renderer after the gates, the theme defaults, and the handler's
//! chained mutations.

mod common;

use axum::{
	body::Body,
	http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use siteshell_types::settings_adapter::Setting;
use siteshell_types::types::SessionId;

use common::*;

fn request(uri: &str, sid: Option<&SessionId>) -> Request<Body> {
	let mut builder = Request::builder().uri(uri);
	if let Some(sid) = sid {
		builder = builder.header(header::COOKIE, format!("sid={}", sid));
	}
	builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	serde_json::from_slice(&bytes).unwrap()
}

fn urls(bundle: &serde_json::Value, field: &str) -> Vec<String> {
	bundle[field]
		.as_array()
		.unwrap()
		.iter()
		.map(|v| v.as_str().unwrap().to_string())
		.collect()
}

#[tokio::test]
async fn test_public_page_bundle() {
	let (app, _session) = test_app();
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let bundle = body_json(response).await;

	assert_eq!(bundle["theme"], "frontend");
	assert_eq!(bundle["user"], serde_json::Value::Null);
	assert_eq!(bundle["currentUri"], "/");
	assert_eq!(bundle["template"], "htdocs/themes/frontend/template.html");

	// Site name drives title and, untouched, the header.
	assert_eq!(bundle["pageTitle"], "Example");
	assert_eq!(bundle["pageHeader"], "Example");

	let css = urls(&bundle, "cssFiles");
	// Core bundle first, then the theme default, then the handler's add.
	assert!(css[0].starts_with("//maxcdn"));
	assert!(css.iter().any(|u| u.ends_with("/themes/frontend/css/frontend.css")));
	assert!(css.iter().any(|u| u.ends_with("/themes/frontend/css/home.css")));

	let js_i18n = urls(&bundle, "jsFilesI18n");
	assert!(js_i18n.contains(&"/i18n/themes/core/js/core_i18n.js".to_string()));
	assert!(js_i18n.contains(&"/i18n/themes/frontend/js/frontend_i18n.js".to_string()));
	assert!(js_i18n.contains(&"/i18n/themes/frontend/js/home_i18n.js".to_string()));
}

#[tokio::test]
async fn test_admin_page_bundle_includes_editor_assets() {
	let (app, session) = test_app();
	let sid = login_user(&session, true).await;
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/admin", Some(&sid))).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let bundle = body_json(response).await;

	assert_eq!(bundle["theme"], "backend");
	assert_eq!(bundle["pageTitle"], "Administration");
	assert_eq!(bundle["pageHeader"], "Site administration");
	assert_eq!(bundle["user"]["name"], "alice");
	assert_eq!(bundle["user"]["isAdmin"], true);

	let css = urls(&bundle, "cssFiles");
	let theme_pos = css.iter().position(|u| u.ends_with("/backend.css")).unwrap();
	let editor_pos = css.iter().position(|u| u.ends_with("/summernote-bs3.css")).unwrap();
	assert!(theme_pos < editor_pos);

	let js = urls(&bundle, "jsFiles");
	assert!(js.iter().any(|u| u.ends_with("/themes/backend/js/summernote.min.js")));

	let js_i18n = urls(&bundle, "jsFilesI18n");
	assert!(js_i18n.contains(&"/i18n/themes/backend/js/backend_i18n.js".to_string()));
}

#[tokio::test]
async fn test_non_admin_never_gets_admin_bundle() {
	let (app, session) = test_app();
	let sid = login_user(&session, false).await;
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/admin", Some(&sid))).await.unwrap();

	// Redirected away; no admin assets were composed for this response.
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	let bytes = response.into_body().collect().await.unwrap().to_bytes();
	assert!(!String::from_utf8_lossy(&bytes).contains("summernote"));
}

#[tokio::test]
async fn test_dashboard_bundle_carries_user_and_settings() {
	let (app, session) = test_app();
	let sid = login_user(&session, false).await;
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/dashboard", Some(&sid))).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let bundle = body_json(response).await;

	assert_eq!(bundle["user"]["name"], "alice");
	assert_eq!(bundle["user"]["isAdmin"], false);
	assert_eq!(bundle["settings"]["site_name"], "Example");
	assert_eq!(bundle["siteVersion"], siteshell::VERSION);
	assert_eq!(bundle["currentUri"], "/dashboard");
}

#[tokio::test]
async fn test_api_status_has_no_theme() {
	let (app, session) = test_app();
	let sid = login_user(&session, false).await;
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/api/status", Some(&sid))).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;

	assert_eq!(body["version"], siteshell::VERSION);
	assert_eq!(body["user"], "alice");
	// Server time is rendered in the zone the settings snapshot resolved
	// (UM5 -> America/New_York).
	let server_time = body["serverTime"].as_str().unwrap();
	assert!(server_time.ends_with("-05:00") || server_time.ends_with("-04:00"));
}

#[tokio::test]
async fn test_api_status_without_user() {
	let (app, _session) = test_app();
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/api/status", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
	let body = body_json(response).await;
	assert_eq!(body["user"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_settings_store_failure_is_fatal() {
	let (app, _session) = test_app_with(Arc::new(FailingSettingsAdapter));
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unknown_timezone_key_is_fatal() {
	let settings =
		vec![Setting::new("site_name", "Example"), Setting::new("timezones", "UM99")];
	let (app, _session) = test_app_with(Arc::new(MockSettingsAdapter::new(settings)));
	let router = siteshell::routes::init(app);

	let response = router.oneshot(request("/", None)).await.unwrap();
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// vim: ts=4
