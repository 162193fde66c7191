//! Settings snapshot: one read of the settings store per request.

use std::collections::HashMap;

use siteshell_types::settings_adapter::Setting;

use crate::core::app::{AppState, VERSION};
use crate::core::config::SiteConfig;
use crate::prelude::*;

/// Name of the setting selecting the site time zone, keying into the
/// static timezone table of [`SiteConfig`].
pub const TIMEZONE_SETTING: &str = "timezones";

/// Flattened read of the persisted site settings, plus the derived site
/// version and the resolved time zone. Built fresh for every request and
/// discarded with it; cross-request caching belongs to the store.
#[derive(Clone, Debug)]
pub struct SettingsSnapshot {
	values: HashMap<Box<str>, Box<str>>,
	pub site_version: Box<str>,
	pub tz: chrono_tz::Tz,
}

impl SettingsSnapshot {
	/// Read all settings from the store and flatten them. A store failure
	/// or an unresolvable time zone aborts request initialization.
	pub async fn load(app: &AppState) -> ShResult<Self> {
		let settings = app.settings_adapter.read_settings().await?;
		Self::from_settings(settings, &app.config)
	}

	pub fn from_settings(settings: Vec<Setting>, config: &SiteConfig) -> ShResult<Self> {
		let mut values = HashMap::with_capacity(settings.len());
		for Setting { name, value } in settings {
			values.insert(name, value);
		}

		let tz = resolve_timezone(&values, config)?;

		Ok(SettingsSnapshot { values, site_version: Box::from(VERSION), tz })
	}

	/// Validated lookup: case-sensitive exact match, unknown names are an
	/// explicit error rather than a silent default.
	pub fn get(&self, name: &str) -> ShResult<&str> {
		self.values.get(name).map(|v| &**v).ok_or(Error::NotFound)
	}

	pub fn get_opt(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(|v| &**v)
	}

	pub fn values(&self) -> &HashMap<Box<str>, Box<str>> {
		&self.values
	}
}

/// No fallback on purpose: a deployment with a broken timezone setting
/// fails loudly instead of rendering times in a wrong zone.
fn resolve_timezone(
	values: &HashMap<Box<str>, Box<str>>,
	config: &SiteConfig,
) -> ShResult<chrono_tz::Tz> {
	let key = values
		.get(TIMEZONE_SETTING)
		.ok_or(Error::ConfigError("the 'timezones' setting is not configured".into()))?;

	let zone_name = config
		.timezones
		.get(key)
		.ok_or_else(|| Error::ConfigError(format!("unknown timezone key '{}'", key).into()))?;

	zone_name
		.parse::<chrono_tz::Tz>()
		.map_err(|_| Error::ConfigError(format!("invalid timezone name '{}'", zone_name).into()))
}


// vim: ts=4
