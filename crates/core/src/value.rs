//! Raw user input and blank-value detection

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Input submitted for a single filter, grouped by its form-field name
///
/// - `name=v` gives [`RawInput::Scalar`]
/// - `name[]=a&name[]=b` gives [`RawInput::List`]
/// - `name[from]=x&name[to]=y` gives [`RawInput::Map`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
	Scalar(String),
	List(Vec<String>),
	Map(IndexMap<String, String>),
}

impl RawInput {
	/// Convert into a JSON value without any interpretation
	pub fn into_value(self) -> Value {
		match self {
			RawInput::Scalar(s) => Value::String(s),
			RawInput::List(items) => Value::Array(items.into_iter().map(Value::String).collect()),
			RawInput::Map(entries) => Value::Object(
				entries
					.into_iter()
					.map(|(k, v)| (k, Value::String(v)))
					.collect::<Map<String, Value>>(),
			),
		}
	}
}

/// Whether a bound value should be treated as "not applied"
///
/// Null, whitespace-only strings, empty arrays and objects whose members are
/// all blank count as blank.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::is_blank;
/// use serde_json::json;
///
/// assert!(is_blank(&json!(null)));
/// assert!(is_blank(&json!("  ")));
/// assert!(is_blank(&json!({"from": "", "to": null})));
/// assert!(!is_blank(&json!(false)));
/// assert!(!is_blank(&json!(0)));
/// ```
pub fn is_blank(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.trim().is_empty(),
		Value::Array(items) => items.iter().all(is_blank),
		Value::Object(members) => members.values().all(is_blank),
		Value::Bool(_) | Value::Number(_) => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!(""), true)]
	#[case(json!(" \t"), true)]
	#[case(json!([]), true)]
	#[case(json!(["", null]), true)]
	#[case(json!({}), true)]
	#[case(json!("a"), false)]
	#[case(json!(["", "a"]), false)]
	#[case(json!({"from": "2024-01-01", "to": ""}), false)]
	#[case(json!(false), false)]
	#[case(json!(0), false)]
	fn test_is_blank(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(is_blank(&value), expected);
	}

	#[test]
	fn test_raw_input_into_value() {
		let mut entries = IndexMap::new();
		entries.insert("from".to_string(), "2024-01-01".to_string());
		assert_eq!(
			RawInput::Map(entries).into_value(),
			json!({"from": "2024-01-01"})
		);
		assert_eq!(
			RawInput::List(vec!["a".into(), "b".into()]).into_value(),
			json!(["a", "b"])
		);
		assert_eq!(RawInput::Scalar("x".into()).into_value(), json!("x"));
	}
}
