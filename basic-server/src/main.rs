#![allow(clippy::unwrap_used)]

use std::{env, path, sync::Arc};

use siteshell_render_adapter_handlebars::RenderAdapterHandlebars;
use siteshell_session_adapter_memory::SessionAdapterMemory;
use siteshell_settings_adapter_sqlite::SettingsAdapterSqlite;

#[tokio::main(flavor = "current_thread")]
async fn main() {
	let db_dir = path::PathBuf::from(env::var("DB_DIR").unwrap_or("./data".to_string()));

	let settings_adapter =
		Arc::new(SettingsAdapterSqlite::new(db_dir.join("settings.db")).await.unwrap());

	siteshell::AppBuilder::new()
		.settings_adapter(settings_adapter)
		.session_adapter(Arc::new(SessionAdapterMemory::new()))
		.renderer(Arc::new(RenderAdapterHandlebars::new()))
		.run()
		.await
		.unwrap();
}

// vim: ts=4
