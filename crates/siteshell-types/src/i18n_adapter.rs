//! Translation URL resolver trait.

use std::fmt::Debug;

/// Rewrites the path of a translatable script so it is served through the
/// translation service instead of as a static file.
pub trait I18nAdapter: Debug + Send + Sync {
	fn translate(&self, path: &str) -> Box<str>;
}

/// Pass-through resolver for deployments without a translation service.
#[derive(Debug, Default)]
pub struct NullI18n;

impl I18nAdapter for NullI18n {
	fn translate(&self, path: &str) -> Box<str> {
		Box::from(path)
	}
}

// vim: ts=4
