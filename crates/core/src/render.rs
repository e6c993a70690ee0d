//! Render contract between filters and a template renderer

use crate::error::FilterResult;
use crate::filter::Filter;
use serde_json::{Map, Value, json};

/// Template namespace shared by all filter widgets
pub const TEMPLATE_NAMESPACE: &str = "admin/filters";

/// Key under which the filter itself is exposed to its template
pub const FIELD_KEY: &str = "field";

/// Data handed to a template
pub type RenderPayload = Map<String, Value>;

/// Renders a named template with a payload
///
/// Injected into [`Filter::render`] instead of relying on a global registry.
pub trait FilterRenderer {
	fn render(&self, template: &str, payload: &RenderPayload) -> FilterResult<String>;
}

/// Template name for a filter component
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::render::template_name;
///
/// assert_eq!(template_name("daterange"), "admin/filters/daterange.html");
/// ```
pub fn template_name(component: &str) -> String {
	format!("{}/{}.html", TEMPLATE_NAMESPACE, component)
}

/// Serializable view of a filter placed under [`FIELD_KEY`]
pub fn field_payload<F>(filter: &F) -> Value
where
	F: Filter + ?Sized,
{
	let mut field = json!({
		"id": filter.id(),
		"name": filter.name(),
		"title": filter.title(),
		"component": filter.component(),
		"applied": filter.is_applied(),
	});
	if let (Some(value), Some(object)) = (filter.value(), field.as_object_mut()) {
		object.insert("value".to_string(), value.clone());
	}
	field
}

/// Merge `render_with()` with the filter's own `field` entry
///
/// The filter's own entry always wins, so a `field` key returned by
/// `render_with()` is replaced.
pub(crate) fn build_payload<F>(filter: &F) -> RenderPayload
where
	F: Filter + ?Sized,
{
	let mut payload = filter.render_with();
	if payload.contains_key(FIELD_KEY) {
		tracing::debug!(
			filter = %filter.id(),
			"render_with() supplied a `field` entry; replacing it"
		);
	}
	payload.insert(FIELD_KEY.to_string(), field_payload(filter));
	payload
}
