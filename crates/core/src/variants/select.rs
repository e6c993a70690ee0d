use super::display_value;
use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, MakeFilter};
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::RenderPayload;
use crate::value::RawInput;
use indexmap::IndexMap;
use serde_json::{Value, json};

/// Filter restricted to a predefined set of options
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{Filter, Lookup, MakeFilter, SelectFilter};
///
/// let filter = SelectFilter::make_with("Status", None, |f| {
///     f.option("draft", "Draft")
///         .option("published", "Published")
///         .multiple(true);
/// });
///
/// assert_eq!(filter.options().len(), 2);
/// assert_eq!(filter.lookup(), Lookup::In);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SelectFilter {
	base: FilterBase,
	options: IndexMap<String, String>,
	multiple: bool,
}

impl SelectFilter {
	/// Add an option (value, label)
	pub fn option(&mut self, value: impl Into<String>, label: impl Into<String>) -> &mut Self {
		self.options.insert(value.into(), label.into());
		self
	}

	/// Replace all options
	pub fn options_from<I, K, V>(&mut self, options: I) -> &mut Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		self.options = options
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self
	}

	/// Allow selecting several options at once
	pub fn multiple(&mut self, multiple: bool) -> &mut Self {
		self.multiple = multiple;
		self
	}

	pub fn options(&self) -> &IndexMap<String, String> {
		&self.options
	}

	pub fn is_multiple(&self) -> bool {
		self.multiple
	}

	fn check_option(&self, value: &str) -> FilterResult<()> {
		// An empty option list means options are resolved elsewhere
		if self.options.is_empty() || self.options.contains_key(value) {
			Ok(())
		} else {
			Err(FilterError::invalid_value(
				self.id(),
				format!("unknown option '{}'", value),
			))
		}
	}

	fn is_selected(&self, option: &str) -> bool {
		match self.value() {
			Some(Value::Array(items)) => items.iter().any(|item| display_value(item) == option),
			Some(value) => display_value(value) == option,
			None => false,
		}
	}
}

impl Filter for SelectFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut FilterBase {
		&mut self.base
	}

	fn component(&self) -> &str {
		"select"
	}

	fn lookup(&self) -> Lookup {
		if self.multiple {
			Lookup::In
		} else {
			Lookup::Exact
		}
	}

	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		let selected: Vec<String> = match input {
			RawInput::Scalar(value) => vec![value],
			RawInput::List(values) => values,
			RawInput::Map(_) => {
				return Err(FilterError::invalid_value(self.id(), "unexpected nested input"));
			}
		}
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect();

		for value in &selected {
			self.check_option(value)?;
		}

		match (self.multiple, selected.len()) {
			(_, 0) => Ok(None),
			(true, _) => Ok(Some(json!(selected))),
			(false, 1) => Ok(selected.into_iter().next().map(Value::String)),
			(false, _) => Err(FilterError::invalid_value(
				self.id(),
				"multiple values given to a single-choice filter",
			)),
		}
	}

	fn render_with(&self) -> RenderPayload {
		let options: Vec<Value> = self
			.options
			.iter()
			.map(|(value, label)| {
				json!({
					"value": value,
					"label": label,
					"selected": self.is_selected(value),
				})
			})
			.collect();

		let mut extra = RenderPayload::new();
		extra.insert("options".to_string(), Value::Array(options));
		extra.insert("multiple".to_string(), json!(self.multiple));
		extra
	}
}

impl MakeFilter for SelectFilter {
	fn from_base(base: FilterBase) -> Self {
		Self {
			base,
			options: IndexMap::new(),
			multiple: false,
		}
	}
}
