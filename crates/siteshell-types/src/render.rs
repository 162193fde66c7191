//! Template renderer trait and the data bundle handed to it.

use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::error::ShResult;
use crate::types::User;

/// Everything the template renderer needs to produce a page: the flattened
/// settings, the de-duplicated asset lists in insertion order, the page
/// metadata, the current user, and the template to render.
///
/// This is the end of the request-scoped composition pipeline; nothing in
/// it survives the response.
#[derive(Clone, Debug, Serialize)]
pub struct RenderData {
	pub settings: HashMap<Box<str>, Box<str>>,
	#[serde(rename = "siteVersion")]
	pub site_version: Box<str>,
	pub theme: Option<Box<str>>,
	#[serde(rename = "cssFiles")]
	pub css_files: Vec<Box<str>>,
	#[serde(rename = "jsFiles")]
	pub js_files: Vec<Box<str>>,
	#[serde(rename = "jsFilesI18n")]
	pub js_files_i18n: Vec<Box<str>>,
	#[serde(rename = "pageTitle")]
	pub page_title: Box<str>,
	#[serde(rename = "pageHeader")]
	pub page_header: Box<str>,
	pub user: Option<User>,
	#[serde(rename = "currentUri")]
	pub current_uri: Box<str>,
	/// Path of the theme's template file, `None` for API contexts.
	pub template: Option<Box<str>>,
}

#[async_trait]
pub trait TemplateRenderer: Debug + Send + Sync {
	/// Render the page. Implementations load `data.template` themselves;
	/// a missing template is a configuration error.
	async fn render(&self, data: &RenderData) -> ShResult<Box<str>>;
}

// vim: ts=4
