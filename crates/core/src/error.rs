//! Error types for admin filters

use thiserror::Error;

/// Errors raised while binding, applying or rendering admin filters
///
/// Construction of a filter never fails; these errors come from user input,
/// filter sets and the query/render collaborators.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FilterError {
	#[error("Invalid value for filter '{filter}': {reason}")]
	InvalidValue { filter: String, reason: String },

	#[error("Duplicate filter id: {0}")]
	DuplicateId(String),

	#[error("Unknown filter: {0}")]
	UnknownFilter(String),

	#[error("Invalid query string: {0}")]
	InvalidQueryString(#[from] serde_urlencoded::de::Error),

	#[error("Failed to render template '{template}': {message}")]
	Render { template: String, message: String },

	#[error("Query error: {0}")]
	Query(String),

	#[error("Settings error: {0}")]
	Settings(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl FilterError {
	/// Shorthand for [`FilterError::InvalidValue`]
	pub fn invalid_value(filter: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::InvalidValue {
			filter: filter.into(),
			reason: reason.into(),
		}
	}

	/// Shorthand for [`FilterError::Render`]
	pub fn render(template: impl Into<String>, message: impl ToString) -> Self {
		Self::Render {
			template: template.into(),
			message: message.to_string(),
		}
	}
}

pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_invalid_value_message() {
		let err = FilterError::invalid_value("status", "unknown option 'x'");
		assert_eq!(
			err.to_string(),
			"Invalid value for filter 'status': unknown option 'x'"
		);
	}

	#[test]
	fn test_query_string_error_converts() {
		let parse: Result<Vec<(String, i32)>, _> = serde_urlencoded::from_str("a=b");
		let err: FilterError = parse.unwrap_err().into();
		assert!(matches!(err, FilterError::InvalidQueryString(_)));
	}
}
