//! Built-in filter variants

mod boolean;
mod date_range;
mod number;
mod select;
mod text;

pub use boolean::BooleanFilter;
pub use date_range::{DEFAULT_DATE_FORMAT, DateRangeFilter};
pub use number::NumberFilter;
pub use select::SelectFilter;
pub use text::TextFilter;

use serde_json::Value;

/// String form of a scalar value as it would appear in a form field
pub(crate) fn display_value(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
