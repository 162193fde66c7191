//! Per-request asset registry.
//!
//! Three ordered buckets (stylesheets, scripts, translated scripts), each
//! deduplicated by a content hash of the raw trimmed asset *name*. Hashing
//! the name rather than the resolved URL means re-theming changes every URL
//! but never an asset's dedup identity: two calls for the same logical asset
//! always collapse to one entry. Entries are never removed within a request.

use base64::Engine;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

use siteshell_types::i18n_adapter::I18nAdapter;

use crate::core::config::SiteConfig;

/// Stable dedup key for an asset name.
pub fn asset_key(name: &str) -> Box<str> {
	base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(Sha256::digest(name.as_bytes())).into()
}

// AssetNames //
//************//
/// Asset name input: either one comma-separated string or an explicit list.
/// Whitespace around each name is trimmed; empty names are skipped.
pub trait AssetNames {
	fn into_names(self) -> Vec<Box<str>>;
}

fn clean<'a>(names: impl Iterator<Item = &'a str>) -> Vec<Box<str>> {
	names.map(str::trim).filter(|n| !n.is_empty()).map(Box::from).collect()
}

impl AssetNames for &str {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.split(','))
	}
}

impl AssetNames for String {
	fn into_names(self) -> Vec<Box<str>> {
		self.as_str().into_names()
	}
}

impl AssetNames for &[&str] {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.iter().copied())
	}
}

impl<const N: usize> AssetNames for [&str; N] {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.iter().copied())
	}
}

impl AssetNames for Vec<&str> {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.iter().copied())
	}
}

impl AssetNames for Vec<String> {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.iter().map(String::as_str))
	}
}

impl AssetNames for &[Box<str>] {
	fn into_names(self) -> Vec<Box<str>> {
		clean(self.iter().map(|n| &**n))
	}
}

// AssetSet //
//**********//
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetEntry {
	pub key: Box<str>,
	pub url: Box<str>,
}

/// Insertion-ordered, hash-keyed collection. Upserting an existing key
/// replaces the URL in place without disturbing the order.
#[derive(Clone, Debug, Default)]
pub struct AssetSet {
	entries: Vec<AssetEntry>,
	index: HashMap<Box<str>, usize>,
}

impl AssetSet {
	fn upsert(&mut self, key: Box<str>, url: Box<str>) {
		if let Some(&pos) = self.index.get(&key) {
			self.entries[pos].url = url;
		} else {
			self.index.insert(key.clone(), self.entries.len());
			self.entries.push(AssetEntry { key, url });
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
		self.entries.iter()
	}

	pub fn urls(&self) -> Vec<Box<str>> {
		self.entries.iter().map(|e| e.url.clone()).collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains_name(&self, name: &str) -> bool {
		self.index.contains_key(&asset_key(name.trim()))
	}
}

// AssetRegistry //
//***************//
/// The CSS/JS include lists assembled for one page render.
#[derive(Clone, Debug)]
pub struct AssetRegistry {
	base_url: Box<str>,
	theme: Box<str>,
	i18n: Arc<dyn I18nAdapter>,
	pub css: AssetSet,
	pub js: AssetSet,
	pub js_i18n: AssetSet,
}

impl AssetRegistry {
	pub fn new(base_url: &str, theme: &str, i18n: Arc<dyn I18nAdapter>) -> Self {
		AssetRegistry {
			base_url: Box::from(base_url),
			theme: Box::from(theme),
			i18n,
			css: AssetSet::default(),
			js: AssetSet::default(),
			js_i18n: AssetSet::default(),
		}
	}

	pub fn theme(&self) -> &str {
		&self.theme
	}

	/// Seed the site-wide core bundle from static configuration. Called
	/// once during context construction, before any theme assets.
	pub fn seed_core(&mut self, config: &SiteConfig) -> &mut Self {
		for url in &config.core_css {
			self.css.upsert(asset_key(url), url.clone());
		}
		for url in &config.core_js {
			self.js.upsert(asset_key(url), url.clone());
		}
		for path in &config.core_js_i18n {
			self.js_i18n.upsert(asset_key(path), self.i18n.translate(path));
		}
		self
	}

	/// Add stylesheets from the active theme folder.
	pub fn add_css(&mut self, names: impl AssetNames) -> &mut Self {
		for name in names.into_names() {
			let url = format!("{}/themes/{}/css/{}", self.base_url, self.theme, name).into();
			self.css.upsert(asset_key(&name), url);
		}
		self
	}

	/// Add scripts from the active theme folder.
	pub fn add_js(&mut self, names: impl AssetNames) -> &mut Self {
		for name in names.into_names() {
			let url = format!("{}/themes/{}/js/{}", self.base_url, self.theme, name).into();
			self.js.upsert(asset_key(&name), url);
		}
		self
	}

	/// Add translatable scripts from the active theme folder. The theme
	/// path is resolved through the translation service, not concatenated.
	pub fn add_js_i18n(&mut self, names: impl AssetNames) -> &mut Self {
		for name in names.into_names() {
			let path = format!("/themes/{}/js/{}", self.theme, name);
			self.js_i18n.upsert(asset_key(&name), self.i18n.translate(&path));
		}
		self
	}

	/// Add stylesheet URLs as given (CDN links and the like), still
	/// deduplicated by hash of the URL string.
	pub fn add_css_url(&mut self, urls: impl AssetNames) -> &mut Self {
		for url in urls.into_names() {
			self.css.upsert(asset_key(&url), url);
		}
		self
	}

	/// Add script URLs as given.
	pub fn add_js_url(&mut self, urls: impl AssetNames) -> &mut Self {
		for url in urls.into_names() {
			self.js.upsert(asset_key(&url), url);
		}
		self
	}
}


// vim: ts=4
