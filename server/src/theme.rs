//! Role to theme resolution.
//!
//! A theme is a named bundle of default assets plus a template file. The
//! mapping is pure: the same role and config always produce the same spec.

use crate::core::config::SiteConfig;
use crate::core::gate::Role;

/// Theme name used for site-wide assets before any role theme applies.
pub const CORE_THEME: &str = "core";

/// Stylesheet of the rich-text editor bundled with the admin theme.
const EDITOR_CSS: &str = "summernote-bs3.css";
/// Script of the rich-text editor bundled with the admin theme.
const EDITOR_JS: &str = "summernote.min.js";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeSpec {
	pub name: Box<str>,
	pub default_css: Box<[Box<str>]>,
	pub default_js: Box<[Box<str>]>,
	pub default_js_i18n: Box<[Box<str>]>,
	/// Template file path: a fixed traversal into the themes directory,
	/// keyed by theme name.
	pub template: Box<str>,
}

fn template_path(config: &SiteConfig, name: &str) -> Box<str> {
	format!("{}/themes/{}/template.html", config.htdocs_dir, name).into()
}

/// Resolve the theme bundle for a role. `Api` has no theme.
pub fn resolve(role: Role, config: &SiteConfig) -> Option<ThemeSpec> {
	match role {
		Role::Public | Role::Authenticated => {
			let name = config.public_theme.to_lowercase();
			Some(ThemeSpec {
				default_css: Box::new([format!("{}.css", name).into()]),
				default_js: Box::new([]),
				default_js_i18n: Box::new([format!("{}_i18n.js", name).into()]),
				template: template_path(config, &name),
				name: name.into(),
			})
		}
		Role::Admin => {
			let name = config.admin_theme.to_lowercase();
			Some(ThemeSpec {
				// The editor pair loads with the theme defaults, before the
				// theme's own i18n script.
				default_css: Box::new([format!("{}.css", name).into(), EDITOR_CSS.into()]),
				default_js: Box::new([EDITOR_JS.into()]),
				default_js_i18n: Box::new([format!("{}_i18n.js", name).into()]),
				template: template_path(config, &name),
				name: name.into(),
			})
		}
		Role::Api => None,
	}
}


// vim: ts=4
