//! Handlebars template renderer.
//!
//! Loads the theme's template file named by the render data and renders the
//! serialized bundle into it. Templates see the flattened settings, the
//! asset URL lists, the page metadata, and the user record.

use async_trait::async_trait;
use handlebars::Handlebars;

use siteshell::error::{Error, ShResult};
use siteshell::render::{RenderData, TemplateRenderer};

pub struct RenderAdapterHandlebars {
	handlebars: Handlebars<'static>,
}

impl RenderAdapterHandlebars {
	pub fn new() -> Self {
		let mut handlebars = Handlebars::new();
		handlebars.set_strict_mode(false);
		Self { handlebars }
	}
}

impl Default for RenderAdapterHandlebars {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for RenderAdapterHandlebars {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderAdapterHandlebars").finish()
	}
}

#[async_trait]
impl TemplateRenderer for RenderAdapterHandlebars {
	async fn render(&self, data: &RenderData) -> ShResult<Box<str>> {
		let template =
			data.template.as_deref().ok_or(Error::RenderError("no template selected".into()))?;

		let source = tokio::fs::read_to_string(template).await.map_err(|err| {
			Error::ConfigError(format!("failed to load template '{}': {}", template, err).into())
		})?;

		let vars = serde_json::to_value(data)
			.map_err(|err| Error::RenderError(format!("{}", err).into()))?;

		self.handlebars
			.render_template(&source, &vars)
			.map(Into::into)
			.map_err(|err| Error::RenderError(format!("{}", err).into()))
	}
}


// vim: ts=4
