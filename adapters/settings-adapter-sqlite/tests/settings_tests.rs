use tempfile::TempDir;

use siteshell::settings_adapter::{Setting, SettingsAdapter};
use siteshell_settings_adapter_sqlite::SettingsAdapterSqlite;

async fn create_test_adapter() -> (SettingsAdapterSqlite, TempDir) {
	let dir = TempDir::new().unwrap();
	let adapter = SettingsAdapterSqlite::new(dir.path().join("settings.db")).await.unwrap();
	(adapter, dir)
}

#[tokio::test]
async fn test_empty_store() {
	let (adapter, _dir) = create_test_adapter().await;
	assert!(adapter.read_settings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_write_and_read_back() {
	let (adapter, _dir) = create_test_adapter().await;
	adapter.update_setting("site_name", "Example").await.unwrap();
	adapter.update_setting("timezones", "UM5").await.unwrap();

	let settings = adapter.read_settings().await.unwrap();
	assert_eq!(
		settings,
		vec![Setting::new("site_name", "Example"), Setting::new("timezones", "UM5")]
	);
}

#[tokio::test]
async fn test_upsert_overwrites() {
	let (adapter, _dir) = create_test_adapter().await;
	adapter.update_setting("site_name", "Old").await.unwrap();
	adapter.update_setting("site_name", "New").await.unwrap();

	let settings = adapter.read_settings().await.unwrap();
	assert_eq!(settings, vec![Setting::new("site_name", "New")]);
}

#[tokio::test]
async fn test_reopen_persists() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("settings.db");

	let adapter = SettingsAdapterSqlite::new(&path).await.unwrap();
	adapter.update_setting("site_name", "Example").await.unwrap();
	drop(adapter);

	let adapter = SettingsAdapterSqlite::new(&path).await.unwrap();
	assert_eq!(adapter.read_settings().await.unwrap(), vec![Setting::new("site_name", "Example")]);
}

// vim: ts=4
