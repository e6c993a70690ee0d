//! Settings for filter collaborators
//!
//! Layered the same way as the framework settings: defaults, then an optional
//! TOML file, then environment variables with a prefix.

use crate::error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Prefix of environment variables read by [`FilterSettings::load`]
pub const ENV_PREFIX: &str = "REINHARDT_FILTERS_";

/// SQL dialect used when rendering queries to text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
	#[default]
	Postgres,
	Mysql,
	Sqlite,
}

impl FromStr for SqlDialect {
	type Err = FilterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"postgres" | "postgresql" => Ok(Self::Postgres),
			"mysql" => Ok(Self::Mysql),
			"sqlite" => Ok(Self::Sqlite),
			other => Err(FilterError::Settings(format!("unknown SQL dialect: {}", other))),
		}
	}
}

impl fmt::Display for SqlDialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Postgres => "postgres",
			Self::Mysql => "mysql",
			Self::Sqlite => "sqlite",
		};
		f.write_str(name)
	}
}

/// Filter settings
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{FilterSettings, SqlDialect};
///
/// let settings = FilterSettings::from_toml_str(r#"
/// locale = "fr"
/// backend = "sqlite"
/// "#).unwrap();
///
/// assert_eq!(settings.locale.as_deref(), Some("fr"));
/// assert_eq!(settings.backend, SqlDialect::Sqlite);
/// assert_eq!(settings.date_format, "%Y-%m-%d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	/// `chrono` format of submitted dates
	pub date_format: String,
	/// Compare text filters lower-cased
	pub case_insensitive_search: bool,
	/// Restrict translated-attribute constraints to this locale
	pub locale: Option<String>,
	/// Directory of templates overriding the built-in widgets
	pub template_dir: Option<PathBuf>,
	pub backend: SqlDialect,
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			date_format: crate::variants::DEFAULT_DATE_FORMAT.to_string(),
			case_insensitive_search: true,
			locale: None,
			template_dir: None,
			backend: SqlDialect::default(),
		}
	}
}

impl FilterSettings {
	pub fn from_toml_str(source: &str) -> FilterResult<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn from_file(path: impl AsRef<Path>) -> FilterResult<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&source)
	}

	/// Defaults, then `path` if given, then `REINHARDT_FILTERS_*` variables
	pub fn load(path: Option<&Path>) -> FilterResult<Self> {
		let settings = match path {
			Some(path) => Self::from_file(path)?,
			None => Self::default(),
		};
		settings.with_env_overrides(ENV_PREFIX)
	}

	/// Override fields from environment variables named `<prefix><FIELD>`
	pub fn with_env_overrides(self, prefix: &str) -> FilterResult<Self> {
		self.with_overrides(|key| std::env::var(format!("{}{}", prefix, key)).ok())
	}

	/// Override fields from a key lookup; keys are upper-case field names
	pub fn with_overrides<F>(mut self, lookup: F) -> FilterResult<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(format) = lookup("DATE_FORMAT") {
			self.date_format = format;
		}
		if let Some(flag) = lookup("CASE_INSENSITIVE_SEARCH") {
			self.case_insensitive_search = parse_flag(&flag)?;
		}
		if let Some(locale) = lookup("LOCALE") {
			self.locale = (!locale.trim().is_empty()).then(|| locale.trim().to_string());
		}
		if let Some(dir) = lookup("TEMPLATE_DIR") {
			self.template_dir = (!dir.trim().is_empty()).then(|| PathBuf::from(dir.trim()));
		}
		if let Some(backend) = lookup("BACKEND") {
			self.backend = backend.parse()?;
		}
		Ok(self)
	}
}

fn parse_flag(raw: &str) -> FilterResult<bool> {
	match raw.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		other => Err(FilterError::Settings(format!("invalid boolean: {}", other))),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::collections::HashMap;
	use std::io::Write;

	fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
		let map: HashMap<String, String> = pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |key| map.get(key).cloned()
	}

	#[test]
	fn test_defaults() {
		let settings = FilterSettings::default();
		assert_eq!(settings.date_format, "%Y-%m-%d");
		assert!(settings.case_insensitive_search);
		assert!(settings.locale.is_none());
		assert!(settings.template_dir.is_none());
		assert_eq!(settings.backend, SqlDialect::Postgres);
	}

	#[test]
	fn test_partial_toml_keeps_defaults() {
		let settings = FilterSettings::from_toml_str("case_insensitive_search = false").unwrap();
		assert!(!settings.case_insensitive_search);
		assert_eq!(settings.date_format, "%Y-%m-%d");
	}

	#[test]
	fn test_invalid_toml() {
		let result = FilterSettings::from_toml_str("backend = \"oracle\"");
		assert!(matches!(result, Err(FilterError::Toml(_))));
	}

	#[test]
	fn test_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "date_format = \"%d/%m/%Y\"").unwrap();
		writeln!(file, "template_dir = \"/srv/templates\"").unwrap();

		let settings = FilterSettings::load(Some(file.path())).unwrap();

		assert_eq!(settings.date_format, "%d/%m/%Y");
		assert_eq!(settings.template_dir, Some(PathBuf::from("/srv/templates")));
	}

	#[test]
	fn test_missing_file() {
		let result = FilterSettings::from_file("/definitely/not/here.toml");
		assert!(matches!(result, Err(FilterError::Io(_))));
	}

	#[test]
	fn test_overrides() {
		let settings = FilterSettings::default()
			.with_overrides(lookup_from(&[
				("LOCALE", " de "),
				("CASE_INSENSITIVE_SEARCH", "off"),
				("BACKEND", "MySQL"),
			]))
			.unwrap();

		assert_eq!(settings.locale.as_deref(), Some("de"));
		assert!(!settings.case_insensitive_search);
		assert_eq!(settings.backend, SqlDialect::Mysql);
	}

	#[test]
	fn test_blank_override_unsets_locale() {
		let settings = FilterSettings {
			locale: Some("en".to_string()),
			..FilterSettings::default()
		}
		.with_overrides(lookup_from(&[("LOCALE", "")]))
		.unwrap();
		assert!(settings.locale.is_none());
	}

	#[rstest]
	#[case("CASE_INSENSITIVE_SEARCH", "maybe")]
	#[case("BACKEND", "oracle")]
	fn test_invalid_override(#[case] key: &str, #[case] value: &str) {
		let result = FilterSettings::default().with_overrides(lookup_from(&[(key, value)]));
		assert!(matches!(result, Err(FilterError::Settings(_))));
	}

	#[rstest]
	#[case("postgresql", SqlDialect::Postgres)]
	#[case("sqlite", SqlDialect::Sqlite)]
	fn test_dialect_from_str(#[case] raw: &str, #[case] expected: SqlDialect) {
		assert_eq!(raw.parse::<SqlDialect>().unwrap(), expected);
		assert_eq!(expected.to_string().parse::<SqlDialect>().unwrap(), expected);
	}
}
