//! Static site configuration.
//!
//! Everything here is fixed for the lifetime of the process. Per-deployment
//! values that change at runtime belong in the settings store instead.

use std::collections::HashMap;

/// Static configuration consumed during page-context construction.
#[derive(Debug)]
pub struct SiteConfig {
	/// Address the server listens on.
	pub listen: Box<str>,
	/// Base URL used when resolving theme-relative asset paths,
	/// without a trailing slash.
	pub base_url: Box<str>,
	/// Path unauthenticated requests are redirected to.
	pub login_path: Box<str>,
	/// Theme name for public and private page sections.
	pub public_theme: Box<str>,
	/// Theme name for the admin section.
	pub admin_theme: Box<str>,
	/// Maps the value of the `timezones` setting to an IANA zone name.
	pub timezones: HashMap<Box<str>, Box<str>>,
	/// Site-wide stylesheet URLs included on every themed page, before any
	/// theme or handler assets.
	pub core_css: Box<[Box<str>]>,
	/// Site-wide script URLs included on every themed page.
	pub core_js: Box<[Box<str>]>,
	/// Site-wide translatable script paths, resolved through the
	/// translation service.
	pub core_js_i18n: Box<[Box<str>]>,
	/// Directory the theme template files live under.
	pub htdocs_dir: Box<str>,
	/// Enable per-request tracing of the HTTP layer.
	pub profiler: bool,
}

impl Default for SiteConfig {
	fn default() -> Self {
		SiteConfig {
			listen: "127.0.0.1:3000".into(),
			base_url: "http://localhost:3000".into(),
			login_path: "/login".into(),
			public_theme: "Frontend".into(),
			admin_theme: "Backend".into(),
			timezones: default_timezones(),
			core_css: Box::new([
				"//maxcdn.bootstrapcdn.com/bootstrap/3.3.2/css/bootstrap.min.css".into(),
				"//maxcdn.bootstrapcdn.com/bootstrap/3.3.2/css/bootstrap-theme.min.css".into(),
				"//maxcdn.bootstrapcdn.com/font-awesome/4.3.0/css/font-awesome.min.css".into(),
				"/themes/core/css/core.css".into(),
			]),
			core_js: Box::new([
				"//ajax.googleapis.com/ajax/libs/jquery/1.11.2/jquery.min.js".into(),
				"//maxcdn.bootstrapcdn.com/bootstrap/3.3.2/js/bootstrap.min.js".into(),
			]),
			core_js_i18n: Box::new(["/themes/core/js/core_i18n.js".into()]),
			htdocs_dir: "htdocs".into(),
			profiler: false,
		}
	}
}

fn default_timezones() -> HashMap<Box<str>, Box<str>> {
	[
		("UTC", "UTC"),
		("UM8", "America/Los_Angeles"),
		("UM7", "America/Denver"),
		("UM6", "America/Chicago"),
		("UM5", "America/New_York"),
		("UP0", "Europe/London"),
		("UP1", "Europe/Berlin"),
		("UP2", "Europe/Helsinki"),
		("UP9", "Asia/Tokyo"),
	]
	.into_iter()
	.map(|(k, v)| (Box::from(k), Box::from(v)))
	.collect()
}

// vim: ts=4
