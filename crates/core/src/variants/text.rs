use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, MakeFilter};
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::RenderPayload;
use crate::value::RawInput;
use serde_json::{Value, json};

/// Free-text filter matching a substring of the attribute
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{Filter, Lookup, MakeFilter, TextFilter};
///
/// let filter = TextFilter::make_with("Email", None, |f| {
///     f.placeholder("name@example.com");
/// });
/// assert_eq!(filter.lookup(), Lookup::Contains);
/// assert_eq!(filter.render_with()["placeholder"], "name@example.com");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextFilter {
	base: FilterBase,
	placeholder: Option<String>,
}

impl TextFilter {
	pub fn placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
		self.placeholder = Some(placeholder.into());
		self
	}
}

impl Filter for TextFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut FilterBase {
		&mut self.base
	}

	fn component(&self) -> &str {
		"text"
	}

	fn lookup(&self) -> Lookup {
		Lookup::Contains
	}

	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		match input {
			RawInput::Scalar(text) => {
				let text = text.trim();
				Ok((!text.is_empty()).then(|| Value::String(text.to_string())))
			}
			_ => Err(FilterError::invalid_value(self.id(), "expected a single value")),
		}
	}

	fn render_with(&self) -> RenderPayload {
		let mut extra = RenderPayload::new();
		extra.insert(
			"placeholder".to_string(),
			json!(self.placeholder.as_deref().unwrap_or_default()),
		);
		extra
	}
}

impl MakeFilter for TextFilter {
	fn from_base(base: FilterBase) -> Self {
		Self {
			base,
			placeholder: None,
		}
	}
}
