//! App state type and builder

use std::sync::Arc;

use siteshell_types::i18n_adapter::{I18nAdapter, NullI18n};
use siteshell_types::render::TemplateRenderer;
use siteshell_types::session_adapter::SessionAdapter;
use siteshell_types::settings_adapter::SettingsAdapter;

use crate::core::config::SiteConfig;
use crate::prelude::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub config: SiteConfig,

	pub settings_adapter: Arc<dyn SettingsAdapter>,
	pub session_adapter: Arc<dyn SessionAdapter>,
	pub i18n_adapter: Arc<dyn I18nAdapter>,
	pub renderer: Arc<dyn TemplateRenderer>,
}

pub type App = Arc<AppState>;

pub struct Adapters {
	pub settings_adapter: Option<Arc<dyn SettingsAdapter>>,
	pub session_adapter: Option<Arc<dyn SessionAdapter>>,
	pub i18n_adapter: Option<Arc<dyn I18nAdapter>>,
	pub renderer: Option<Arc<dyn TemplateRenderer>>,
}

/// Fluent builder assembling the app state and running the server.
pub struct AppBuilder {
	config: SiteConfig,
	adapters: Adapters,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			config: SiteConfig::default(),
			adapters: Adapters {
				settings_adapter: None,
				session_adapter: None,
				i18n_adapter: None,
				renderer: None,
			},
		}
	}

	pub fn config(mut self, config: SiteConfig) -> Self {
		self.config = config;
		self
	}

	pub fn settings_adapter(mut self, adapter: Arc<dyn SettingsAdapter>) -> Self {
		self.adapters.settings_adapter = Some(adapter);
		self
	}

	pub fn session_adapter(mut self, adapter: Arc<dyn SessionAdapter>) -> Self {
		self.adapters.session_adapter = Some(adapter);
		self
	}

	pub fn i18n_adapter(mut self, adapter: Arc<dyn I18nAdapter>) -> Self {
		self.adapters.i18n_adapter = Some(adapter);
		self
	}

	pub fn renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
		self.adapters.renderer = Some(renderer);
		self
	}

	/// Build the shared app state without starting a server.
	pub fn build(self) -> ShResult<App> {
		let settings_adapter = self
			.adapters
			.settings_adapter
			.ok_or(Error::ConfigError("no settings adapter configured".into()))?;
		let session_adapter = self
			.adapters
			.session_adapter
			.ok_or(Error::ConfigError("no session adapter configured".into()))?;
		let renderer =
			self.adapters.renderer.ok_or(Error::ConfigError("no renderer configured".into()))?;
		let i18n_adapter = self.adapters.i18n_adapter.unwrap_or_else(|| Arc::new(NullI18n));

		Ok(Arc::new(AppState {
			config: self.config,
			settings_adapter,
			session_adapter,
			i18n_adapter,
			renderer,
		}))
	}

	pub async fn run(self) -> ShResult<()> {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();

		let app = self.build()?;
		info!("Siteshell v{}", VERSION);

		let router = crate::routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(&*app.config.listen).await?;
		info!("Listening on {}", app.config.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
