//! Tera implementation of the filter renderer

use crate::templates::BUILTIN;
use reinhardt_admin_filters_core::render::template_name;
use reinhardt_admin_filters_core::{
	FilterError, FilterRenderer, FilterResult, FilterSettings, RenderPayload,
};
use std::collections::HashSet;
use std::error::Error as _;
use std::path::Path;
use tera::{Context, Tera};

/// Flatten a Tera error and its sources into one message
fn describe(error: &tera::Error) -> String {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

/// Renders filter widgets with Tera
///
/// Ships a template for every built-in filter component. Templates loaded
/// from a directory replace the built-in of the same name.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_adapters::TeraRenderer;
/// use reinhardt_admin_filters_core::{Filter, MakeFilter, TextFilter};
///
/// let renderer = TeraRenderer::new().unwrap();
/// let html = TextFilter::make("First Name", None).render(&renderer).unwrap();
///
/// assert!(html.contains(r#"name="first_name""#));
/// assert!(html.contains("First Name"));
/// ```
#[derive(Debug)]
pub struct TeraRenderer {
	tera: Tera,
}

impl TeraRenderer {
	/// Renderer with the built-in templates only
	pub fn new() -> FilterResult<Self> {
		let mut renderer = Self {
			tera: Tera::default(),
		};
		renderer.register_builtins()?;
		Ok(renderer)
	}

	/// Renderer loading `<dir>/**/*.html` on top of the built-ins
	///
	/// Template names are relative to `dir`, so an override for the text
	/// widget lives at `<dir>/admin/filters/text.html`.
	pub fn from_dir(dir: &Path) -> FilterResult<Self> {
		let pattern = format!("{}/**/*.html", dir.display());
		let tera = Tera::new(&pattern).map_err(|e| FilterError::render(&pattern, describe(&e)))?;
		tracing::debug!(
			dir = %dir.display(),
			templates = tera.get_template_names().count(),
			"loaded filter templates"
		);
		let mut renderer = Self { tera };
		renderer.register_builtins()?;
		Ok(renderer)
	}

	pub fn from_settings(settings: &FilterSettings) -> FilterResult<Self> {
		match &settings.template_dir {
			Some(dir) => Self::from_dir(dir),
			None => Self::new(),
		}
	}

	/// Register or replace a single template
	pub fn add_template(&mut self, name: &str, source: &str) -> FilterResult<()> {
		self.tera
			.add_raw_template(name, source)
			.map_err(|e| FilterError::render(name, describe(&e)))
	}

	pub fn tera(&self) -> &Tera {
		&self.tera
	}

	fn register_builtins(&mut self) -> FilterResult<()> {
		let existing: HashSet<String> = self
			.tera
			.get_template_names()
			.map(str::to_string)
			.collect();
		let missing: Vec<(String, &str)> = BUILTIN
			.iter()
			.map(|(component, source)| (template_name(component), *source))
			.filter(|(name, _)| !existing.contains(name))
			.collect();

		self.tera
			.add_raw_templates(missing)
			.map_err(|e| FilterError::render("built-in filter templates", describe(&e)))
	}
}

impl FilterRenderer for TeraRenderer {
	fn render(&self, template: &str, payload: &RenderPayload) -> FilterResult<String> {
		let context =
			Context::from_serialize(payload).map_err(|e| FilterError::render(template, describe(&e)))?;
		self.tera.render(template, &context).map_err(|e| {
			tracing::warn!(template, error = %e, "filter template failed to render");
			FilterError::render(template, describe(&e))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("text")]
	#[case("select")]
	#[case("boolean")]
	#[case("number")]
	#[case("daterange")]
	fn test_builtin_registered(#[case] component: &str) {
		let renderer = TeraRenderer::new().unwrap();
		let name = template_name(component);
		assert!(renderer.tera().get_template_names().any(|n| n == name));
	}

	#[test]
	fn test_unknown_template_is_render_error() {
		let renderer = TeraRenderer::new().unwrap();
		let result = renderer.render("admin/filters/missing.html", &RenderPayload::new());
		assert!(matches!(
			result,
			Err(FilterError::Render { template, .. }) if template == "admin/filters/missing.html"
		));
	}

	#[test]
	fn test_add_template_replaces_builtin() {
		let mut renderer = TeraRenderer::new().unwrap();
		renderer
			.add_template("admin/filters/text.html", "custom {{ field.id }}")
			.unwrap();

		let mut payload = RenderPayload::new();
		payload.insert("field".to_string(), json!({"id": "name"}));
		let html = renderer.render("admin/filters/text.html", &payload).unwrap();

		assert_eq!(html, "custom name");
	}

	#[test]
	fn test_invalid_template_source() {
		let mut renderer = TeraRenderer::new().unwrap();
		let result = renderer.add_template("broken.html", "{% if %}");
		assert!(matches!(result, Err(FilterError::Render { .. })));
	}
}
