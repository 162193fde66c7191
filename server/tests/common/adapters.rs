use async_trait::async_trait;
use std::sync::Arc;

use siteshell::{App, AppBuilder, SiteConfig};
use siteshell_session_adapter_memory::SessionAdapterMemory;
use siteshell_types::error::{Error, ShResult};
use siteshell_types::i18n_adapter::I18nAdapter;
use siteshell_types::render::{RenderData, TemplateRenderer};
use siteshell_types::session_adapter::SessionAdapter;
use siteshell_types::settings_adapter::{Setting, SettingsAdapter};
use siteshell_types::types::{SESSION_USER_KEY, SessionId, User};

/// Settings store serving a fixed list.
#[derive(Debug)]
pub struct MockSettingsAdapter {
	settings: Vec<Setting>,
}

impl MockSettingsAdapter {
	pub fn new(settings: Vec<Setting>) -> Self {
		Self { settings }
	}
}

#[async_trait]
impl SettingsAdapter for MockSettingsAdapter {
	async fn read_settings(&self) -> ShResult<Vec<Setting>> {
		Ok(self.settings.clone())
	}

	async fn update_setting(&self, _name: &str, _value: &str) -> ShResult<()> {
		Ok(())
	}
}

/// Settings store that is always unreachable.
#[derive(Debug)]
pub struct FailingSettingsAdapter;

#[async_trait]
impl SettingsAdapter for FailingSettingsAdapter {
	async fn read_settings(&self) -> ShResult<Vec<Setting>> {
		Err(Error::DbError)
	}

	async fn update_setting(&self, _name: &str, _value: &str) -> ShResult<()> {
		Err(Error::DbError)
	}
}

/// Translator that prefixes paths, so tests can see it was applied.
#[derive(Debug)]
pub struct TagI18n;

impl I18nAdapter for TagI18n {
	fn translate(&self, path: &str) -> Box<str> {
		format!("/i18n{}", path).into()
	}
}

/// Renderer that emits the render data as JSON so tests can inspect the
/// full bundle handed over by the context.
#[derive(Debug)]
pub struct JsonRenderer;

#[async_trait]
impl TemplateRenderer for JsonRenderer {
	async fn render(&self, data: &RenderData) -> ShResult<Box<str>> {
		serde_json::to_string(data)
			.map(Into::into)
			.map_err(|err| Error::RenderError(format!("{}", err).into()))
	}
}

pub fn base_settings() -> Vec<Setting> {
	vec![Setting::new("site_name", "Example"), Setting::new("timezones", "UM5")]
}

pub fn test_app_with(settings_adapter: Arc<dyn SettingsAdapter>) -> (App, Arc<SessionAdapterMemory>) {
	let session = Arc::new(SessionAdapterMemory::new());
	#[allow(clippy::unwrap_used)]
	let app = AppBuilder::new()
		.config(SiteConfig::default())
		.settings_adapter(settings_adapter)
		.session_adapter(session.clone())
		.i18n_adapter(Arc::new(TagI18n))
		.renderer(Arc::new(JsonRenderer))
		.build()
		.unwrap();
	(app, session)
}

pub fn test_app() -> (App, Arc<SessionAdapterMemory>) {
	test_app_with(Arc::new(MockSettingsAdapter::new(base_settings())))
}

/// Create a session holding a logged-in user and return its id.
pub async fn login_user(session: &SessionAdapterMemory, is_admin: bool) -> SessionId {
	let user = User { user_id: 42, name: "alice".into(), is_admin };
	let sid = session.create().await.unwrap();
	session
		.write(&sid, SESSION_USER_KEY, &serde_json::to_string(&user).unwrap())
		.await
		.unwrap();
	sid
}
