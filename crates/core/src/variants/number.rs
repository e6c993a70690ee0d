use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, MakeFilter};
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::RenderPayload;
use crate::value::RawInput;
use serde_json::{Number, Value, json};

/// Exact match on a numeric attribute, optionally bounded
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFilter {
	base: FilterBase,
	min: Option<f64>,
	max: Option<f64>,
	step: Option<f64>,
}

impl NumberFilter {
	pub fn min(&mut self, min: f64) -> &mut Self {
		self.min = Some(min);
		self
	}

	pub fn max(&mut self, max: f64) -> &mut Self {
		self.max = Some(max);
		self
	}

	pub fn step(&mut self, step: f64) -> &mut Self {
		self.step = Some(step);
		self
	}

	fn parse_number(&self, raw: &str) -> FilterResult<Number> {
		let not_a_number =
			|| FilterError::invalid_value(self.id(), format!("'{}' is not a number", raw));

		let number = if let Ok(int) = raw.parse::<i64>() {
			Number::from(int)
		} else if let Ok(uint) = raw.parse::<u64>() {
			Number::from(uint)
		} else {
			raw.parse::<f64>()
				.ok()
				.and_then(Number::from_f64)
				.ok_or_else(not_a_number)?
		};

		// Number::as_f64 always succeeds without arbitrary_precision
		let as_float = number.as_f64().unwrap_or_default();
		if self.min.is_some_and(|min| as_float < min) || self.max.is_some_and(|max| as_float > max) {
			return Err(FilterError::invalid_value(
				self.id(),
				format!("{} is out of range", raw),
			));
		}
		Ok(number)
	}
}

impl Filter for NumberFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut FilterBase {
		&mut self.base
	}

	fn component(&self) -> &str {
		"number"
	}

	fn lookup(&self) -> Lookup {
		Lookup::Exact
	}

	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		let RawInput::Scalar(raw) = input else {
			return Err(FilterError::invalid_value(self.id(), "expected a single value"));
		};
		let raw = raw.trim();
		if raw.is_empty() {
			return Ok(None);
		}
		self.parse_number(raw).map(|number| Some(Value::Number(number)))
	}

	fn render_with(&self) -> RenderPayload {
		let mut extra = RenderPayload::new();
		extra.insert("min".to_string(), json!(self.min));
		extra.insert("max".to_string(), json!(self.max));
		extra.insert("step".to_string(), json!(self.step));
		extra
	}
}

impl MakeFilter for NumberFilter {
	fn from_base(base: FilterBase) -> Self {
		Self {
			base,
			min: None,
			max: None,
			step: None,
		}
	}
}
