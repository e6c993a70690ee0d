//! Filter identity: id derivation, form-field names and the stored state
//! shared by every filter variant.

use crate::inflection::{humanize, to_identifier_case};
use serde_json::Value;

/// Derive a filter id from its (already humanized) title and an optional explicit id
///
/// A non-empty explicit id is returned verbatim. Otherwise the title is
/// converted to identifier case.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::derive_id;
///
/// assert_eq!(derive_id("First Name", None), "first_name");
/// assert_eq!(derive_id("City", Some("address.city")), "address.city");
/// assert_eq!(derive_id("City", Some("")), "city");
/// ```
pub fn derive_id(title: &str, explicit_id: Option<&str>) -> String {
	match explicit_id {
		Some(id) if !id.is_empty() => id.to_string(),
		_ => to_identifier_case(title),
	}
}

/// Resolve the form-field name for an id
///
/// Dotted ids expand into nested bracket notation so the filter binds to a
/// nested attribute while staying a single form control. Empty segments are
/// expanded as-is (`"a..b"` becomes `"a[][b]"`).
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::resolve_name;
///
/// assert_eq!(resolve_name("status"), "status");
/// assert_eq!(resolve_name("profile.address.city"), "profile[address][city]");
/// ```
pub fn resolve_name(id: &str) -> String {
	let mut segments = id.split('.');
	// `split` always yields at least one segment
	let mut name = segments.next().unwrap_or_default().to_string();
	for segment in segments {
		name.push('[');
		name.push_str(segment);
		name.push(']');
	}
	name
}

/// State owned by every filter: identity, display title and the bound value
///
/// `id` and `title` are fixed at construction; `name` is recomputed from `id`
/// on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBase {
	id: String,
	title: String,
	value: Option<Value>,
}

impl FilterBase {
	/// Build the state for a filter titled `title`
	///
	/// The title is humanized first and the id is derived from the humanized
	/// title unless `id` is a non-empty string.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_admin_filters_core::FilterBase;
	///
	/// let base = FilterBase::new("first_name", None);
	/// assert_eq!(base.title(), "First Name");
	/// assert_eq!(base.id(), "first_name");
	/// assert!(base.value().is_none());
	/// ```
	pub fn new(title: &str, id: Option<&str>) -> Self {
		let title = humanize(title);
		let id = derive_id(&title, id);

		if id.is_empty() {
			tracing::warn!(title = %title, "filter constructed with an empty id");
		} else if id.split('.').any(str::is_empty) {
			tracing::warn!(id = %id, "filter id contains empty segments");
		}

		Self {
			id,
			title,
			value: None,
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn title(&self) -> &str {
		&self.title
	}

	/// Form-field name derived from [`FilterBase::id`]
	pub fn name(&self) -> String {
		resolve_name(&self.id)
	}

	pub fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	/// Bind a value; no validation is performed
	pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
		self.value = Some(value.into());
		self
	}

	/// Replace the bound value, `None` meaning "not set"
	pub fn replace_value(&mut self, value: Option<Value>) -> Option<Value> {
		std::mem::replace(&mut self.value, value)
	}

	pub fn clear_value(&mut self) -> &mut Self {
		self.value = None;
		self
	}
}
