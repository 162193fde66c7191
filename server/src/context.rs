//! Per-request page context.
//!
//! One value composing everything a page handler may touch: the settings
//! snapshot, the asset registry, the page metadata, the session-derived
//! user, and the theme resolved for the granted role. Built fresh for each
//! request by the extractor in [`crate::core::extract`], mutated through
//! chained calls, consumed by the renderer, gone with the response.

use axum::response::Html;

use siteshell_types::render::RenderData;
use siteshell_types::types::User;

use crate::assets::{AssetNames, AssetRegistry};
use crate::core::app::AppState;
use crate::core::gate::{Role, RoleGrant};
use crate::page::PageMetadata;
use crate::prelude::*;
use crate::settings::SettingsSnapshot;
use crate::theme::{self, ThemeSpec};

pub struct PageContext {
	pub settings: SettingsSnapshot,
	pub assets: AssetRegistry,
	pub page: PageMetadata,
	pub user: Option<User>,
	pub current_uri: Box<str>,
	pub role: Role,
	pub theme: Option<ThemeSpec>,
}

impl PageContext {
	/// Shared construction for every role variant: load the settings
	/// snapshot, resolve the theme, seed the core bundle plus the role's
	/// default theme assets.
	pub async fn build(app: &AppState, grant: RoleGrant, current_uri: &str) -> ShResult<Self> {
		let settings = SettingsSnapshot::load(app).await?;
		let theme = theme::resolve(grant.role, &app.config);
		let theme_name = theme.as_ref().map_or(theme::CORE_THEME, |spec| &*spec.name);

		let mut assets =
			AssetRegistry::new(&app.config.base_url, theme_name, app.i18n_adapter.clone());
		assets.seed_core(&app.config);
		if let Some(spec) = &theme {
			assets
				.add_css(&*spec.default_css)
				.add_js(&*spec.default_js)
				.add_js_i18n(&*spec.default_js_i18n);
		}

		Ok(PageContext {
			settings,
			assets,
			page: PageMetadata::new(),
			user: grant.user,
			current_uri: Box::from(current_uri),
			role: grant.role,
			theme,
		})
	}

	pub fn set_title(&mut self, title: &str) -> &mut Self {
		self.page.set_title(title);
		self
	}

	pub fn set_header(&mut self, header: &str) -> &mut Self {
		self.page.set_header(header);
		self
	}

	pub fn add_css(&mut self, names: impl AssetNames) -> &mut Self {
		self.assets.add_css(names);
		self
	}

	pub fn add_js(&mut self, names: impl AssetNames) -> &mut Self {
		self.assets.add_js(names);
		self
	}

	pub fn add_js_i18n(&mut self, names: impl AssetNames) -> &mut Self {
		self.assets.add_js_i18n(names);
		self
	}

	/// Path of the template selected for this request, `None` for API
	/// contexts.
	pub fn template(&self) -> Option<&str> {
		self.theme.as_ref().map(|spec| &*spec.template)
	}

	/// Produce the bundle the template renderer consumes.
	pub fn into_render_data(self) -> RenderData {
		RenderData {
			settings: self.settings.values().clone(),
			site_version: self.settings.site_version.clone(),
			theme: self.theme.as_ref().map(|spec| spec.name.clone()),
			css_files: self.assets.css.urls(),
			js_files: self.assets.js.urls(),
			js_files_i18n: self.assets.js_i18n.urls(),
			page_title: Box::from(self.page.title()),
			page_header: Box::from(self.page.header()),
			user: self.user,
			current_uri: self.current_uri,
			template: self.theme.map(|spec| spec.template),
		}
	}

	/// Render the page through the configured template renderer.
	pub async fn render(self, app: &AppState) -> ShResult<Html<String>> {
		let data = self.into_render_data();
		let html = app.renderer.render(&data).await?;
		Ok(Html(html.into_string()))
	}
}

// vim: ts=4
