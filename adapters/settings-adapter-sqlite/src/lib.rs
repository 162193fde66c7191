//! SQLite-backed settings store.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use tracing::warn;

use siteshell::error::{Error, ShResult};
use siteshell::settings_adapter::{Setting, SettingsAdapter};

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> ShResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.or(Err(Error::DbError))?;

		init_db(&db).await.inspect_err(inspect).or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
			name TEXT PRIMARY KEY,
			value TEXT NOT NULL
		)",
	)
	.execute(db)
	.await?;
	Ok(())
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn read_settings(&self) -> ShResult<Vec<Setting>> {
		let rows = sqlx::query_as::<_, (String, String)>(
			"SELECT name, value FROM settings ORDER BY name",
		)
		.fetch_all(&self.db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

		Ok(rows.into_iter().map(|(name, value)| Setting::new(&name, &value)).collect())
	}

	async fn update_setting(&self, name: &str, value: &str) -> ShResult<()> {
		sqlx::query(
			"INSERT INTO settings (name, value) VALUES (?1, ?2)
			ON CONFLICT(name) DO UPDATE SET value = excluded.value",
		)
		.bind(name)
		.bind(value)
		.execute(&self.db)
		.await
		.inspect_err(inspect)
		.or(Err(Error::DbError))?;

		Ok(())
	}
}

// vim: ts=4
