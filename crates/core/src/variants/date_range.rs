use crate::error::{FilterError, FilterResult};
use crate::filter::{Filter, MakeFilter};
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::RenderPayload;
use crate::settings::FilterSettings;
use crate::value::RawInput;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde_json::{Map, Value, json};

/// Default `chrono` format for submitted dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates are stored in the bound value in this format regardless of input format
const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Separator used by date-range pickers submitting a single field
const RANGE_SEPARATOR: &str = " - ";

/// Inclusive date range on a date or timestamp attribute
///
/// Accepts `name[from]` / `name[to]` inputs or a single `"<from> - <to>"`
/// value, and binds `{"from": "YYYY-MM-DD", "to": "YYYY-MM-DD"}` with either
/// bound optional. Both bounds are inclusive: on a timestamp attribute the
/// `to` day is matched up to its end.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use reinhardt_admin_filters_core::{DateRangeFilter, Filter, MakeFilter, RawInput};
/// use serde_json::json;
///
/// let filter = DateRangeFilter::make_with("Created At", None, |f| {
///     f.with_format("%d.%m.%Y");
/// });
///
/// let mut input = IndexMap::new();
/// input.insert("from".to_string(), "01.02.2024".to_string());
/// let parsed = filter.parse_input(RawInput::Map(input)).unwrap();
///
/// assert_eq!(parsed, Some(json!({"from": "2024-02-01"})));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DateRangeFilter {
	base: FilterBase,
	format: String,
}

impl DateRangeFilter {
	/// Set the `chrono` format submitted dates are parsed with
	pub fn with_format(&mut self, format: impl Into<String>) -> &mut Self {
		self.format = format.into();
		self
	}

	/// Take the submitted-date format from `settings`
	pub fn apply_settings(&mut self, settings: &FilterSettings) -> &mut Self {
		self.with_format(settings.date_format.as_str())
	}

	pub fn format(&self) -> &str {
		&self.format
	}

	fn parse_date(&self, raw: &str) -> FilterResult<Option<NaiveDate>> {
		let raw = raw.trim();
		if raw.is_empty() {
			return Ok(None);
		}
		NaiveDate::parse_from_str(raw, &self.format)
			.map(Some)
			.map_err(|e| FilterError::invalid_value(self.id(), format!("'{}': {}", raw, e)))
	}

	/// Bound currently stored under `key`, formatted for display
	fn bound(&self, key: &str) -> String {
		self.value()
			.and_then(|value| value.get(key))
			.and_then(Value::as_str)
			.and_then(|stored| NaiveDate::parse_from_str(stored, STORAGE_FORMAT).ok())
			.map(|date| date.format(&self.format).to_string())
			.unwrap_or_default()
	}

	fn presets(&self) -> Vec<Value> {
		let today = Local::now().date_naive();
		let week_start = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
		let month_start = today.with_day(1).unwrap_or(today);
		let year_start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);

		[
			("Today", today),
			("This week", week_start),
			("This month", month_start),
			("This year", year_start),
			("Last 7 days", today - Duration::days(7)),
			("Last 30 days", today - Duration::days(30)),
		]
		.into_iter()
		.map(|(label, from)| {
			json!({
				"label": label,
				"from": from.format(&self.format).to_string(),
				"to": today.format(&self.format).to_string(),
			})
		})
		.collect()
	}
}

impl Filter for DateRangeFilter {
	fn base(&self) -> &FilterBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut FilterBase {
		&mut self.base
	}

	fn component(&self) -> &str {
		"daterange"
	}

	fn lookup(&self) -> Lookup {
		Lookup::Range
	}

	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		let (from, to) = match input {
			RawInput::Map(mut entries) => (
				entries.shift_remove("from").unwrap_or_default(),
				entries.shift_remove("to").unwrap_or_default(),
			),
			RawInput::Scalar(raw) => match raw.split_once(RANGE_SEPARATOR) {
				Some((from, to)) => (from.to_string(), to.to_string()),
				None => (raw, String::new()),
			},
			RawInput::List(_) => {
				return Err(FilterError::invalid_value(self.id(), "unexpected list input"));
			}
		};

		let from = self.parse_date(&from)?;
		let to = self.parse_date(&to)?;
		if matches!((from, to), (Some(from), Some(to)) if from > to) {
			return Err(FilterError::invalid_value(
				self.id(),
				"range start is after its end",
			));
		}

		let mut range = Map::new();
		if let Some(from) = from {
			range.insert("from".to_string(), json!(from.format(STORAGE_FORMAT).to_string()));
		}
		if let Some(to) = to {
			range.insert("to".to_string(), json!(to.format(STORAGE_FORMAT).to_string()));
		}
		Ok((!range.is_empty()).then_some(Value::Object(range)))
	}

	fn render_with(&self) -> RenderPayload {
		let mut extra = RenderPayload::new();
		extra.insert("from".to_string(), json!(self.bound("from")));
		extra.insert("to".to_string(), json!(self.bound("to")));
		extra.insert("format".to_string(), json!(self.format));
		extra.insert("presets".to_string(), Value::Array(self.presets()));
		extra
	}
}

impl MakeFilter for DateRangeFilter {
	fn from_base(base: FilterBase) -> Self {
		Self {
			base,
			format: DEFAULT_DATE_FORMAT.to_string(),
		}
	}
}
