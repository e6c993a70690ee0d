use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, MakeFilter};
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::RenderPayload;
use crate::value::RawInput;
use serde_json::{Value, json};

/// Yes / No / Any filter on a boolean attribute
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{BooleanFilter, Filter, MakeFilter, RawInput};
/// use serde_json::json;
///
/// let filter = BooleanFilter::make("Is Active", None);
/// let parsed = filter.parse_input(RawInput::Scalar("yes".into())).unwrap();
/// assert_eq!(parsed, Some(json!(true)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanFilter {
	base: FilterBase,
	true_label: String,
	false_label: String,
	any_label: String,
}

impl BooleanFilter {
	pub fn labels(&mut self, yes: impl Into<String>, no: impl Into<String>) -> &mut Self {
		self.true_label = yes.into();
		self.false_label = no.into();
		self
	}

	pub fn any_label(&mut self, any: impl Into<String>) -> &mut Self {
		self.any_label = any.into();
		self
	}

	fn current(&self) -> Option<bool> {
		match self.value() {
			Some(Value::Bool(flag)) => Some(*flag),
			Some(Value::String(raw)) => parse_flag(raw),
			_ => None,
		}
	}
}

fn parse_flag(raw: &str) -> Option<bool> {
	match raw.trim().to_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Some(true),
		"0" | "false" | "no" | "off" => Some(false),
		_ => None,
	}
}

impl Filter for BooleanFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut FilterBase {
		&mut self.base
	}

	fn component(&self) -> &str {
		"boolean"
	}

	fn lookup(&self) -> Lookup {
		Lookup::Exact
	}

	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		let RawInput::Scalar(raw) = input else {
			return Err(FilterError::invalid_value(self.id(), "expected a single value"));
		};
		if raw.trim().is_empty() {
			return Ok(None);
		}
		parse_flag(&raw).map(|flag| Some(Value::Bool(flag))).ok_or_else(|| {
			FilterError::invalid_value(self.id(), format!("'{}' is not a boolean", raw))
		})
	}

	fn render_with(&self) -> RenderPayload {
		let current = self.current();
		let mut extra = RenderPayload::new();
		extra.insert(
			"options".to_string(),
			json!([
				{"value": "", "label": self.any_label, "selected": current.is_none()},
				{"value": "1", "label": self.true_label, "selected": current == Some(true)},
				{"value": "0", "label": self.false_label, "selected": current == Some(false)},
			]),
		);
		extra
	}
}

impl MakeFilter for BooleanFilter {
	fn from_base(base: FilterBase) -> Self {
		Self {
			base,
			true_label: "Yes".to_string(),
			false_label: "No".to_string(),
			any_label: "Any".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("1", Some(true))]
	#[case("TRUE", Some(true))]
	#[case("on", Some(true))]
	#[case("0", Some(false))]
	#[case("No", Some(false))]
	#[case("", None)]
	fn test_parse(#[case] raw: &str, #[case] expected: Option<bool>) {
		let filter = BooleanFilter::make("Active", None);
		let parsed = filter.parse_input(RawInput::Scalar(raw.to_string())).unwrap();
		assert_eq!(parsed, expected.map(Value::Bool));
	}

	#[test]
	fn test_parse_rejects_garbage() {
		let filter = BooleanFilter::make("Active", None);
		let result = filter.parse_input(RawInput::Scalar("perhaps".to_string()));
		assert!(matches!(result, Err(FilterError::InvalidValue { .. })));
	}

	#[test]
	fn test_render_with_labels_and_selection() {
		let filter = BooleanFilter::make_with("Active", None, |f| {
			f.labels("Enabled", "Disabled").set_value(false);
		});
		let options = filter.render_with()["options"].clone();

		assert_eq!(options[1]["label"], json!("Enabled"));
		assert_eq!(options[2]["label"], json!("Disabled"));
		assert_eq!(options[0]["selected"], json!(false));
		assert_eq!(options[2]["selected"], json!(true));
	}

	#[test]
	fn test_render_with_unset_selects_any() {
		let filter = BooleanFilter::make("Active", None);
		assert_eq!(filter.render_with()["options"][0]["selected"], json!(true));
	}
}
