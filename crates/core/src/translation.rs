//! Record-type capabilities consulted while binding filters to a query
//!
//! A model may expose localized attributes stored in a separate translation
//! table. Filters on those attributes must be constrained against the
//! translation table instead of the primary one.

/// Record type a filter set is evaluated against
pub trait FilterModel {
	/// Primary table of the record type
	fn table_name(&self) -> &str;

	/// Primary key column, `id` by default
	fn primary_key(&self) -> &str {
		"id"
	}

	/// Localization capability, if the record type has one
	fn as_translatable(&self) -> Option<&dyn Translatable> {
		None
	}
}

/// Localization capability of a record type
pub trait Translatable {
	fn is_translatable(&self) -> bool {
		true
	}

	/// Attribute names whose values vary by locale
	fn translated_attributes(&self) -> &[String];

	/// Table storing one row per record and locale
	fn translation_table(&self) -> &str;

	/// Column of the translation table referencing the primary key
	fn translation_foreign_key(&self) -> &str;

	fn locale_column(&self) -> &str {
		"locale"
	}
}

/// Whether a filter named `name` should be searched in `model`'s translations
///
/// True only when the model has the localization capability, reports itself
/// as translatable and lists `name` among its translated attributes.
pub fn should_search_in_translations(name: &str, model: &dyn FilterModel) -> bool {
	model.as_translatable().is_some_and(|translatable| {
		translatable.is_translatable()
			&& translatable
				.translated_attributes()
				.iter()
				.any(|attribute| attribute == name)
	})
}

/// Translation metadata for a [`ModelMeta`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationMeta {
	table: String,
	foreign_key: String,
	locale_column: String,
	attributes: Vec<String>,
}

impl TranslationMeta {
	/// Describe a translation table
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_admin_filters_core::{TranslationMeta, Translatable};
	///
	/// let meta = TranslationMeta::new("post_translations", "post_id", ["title", "body"]);
	/// assert_eq!(meta.translated_attributes(), ["title", "body"]);
	/// assert_eq!(meta.locale_column(), "locale");
	/// ```
	pub fn new<I, S>(table: impl Into<String>, foreign_key: impl Into<String>, attributes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			table: table.into(),
			foreign_key: foreign_key.into(),
			locale_column: "locale".to_string(),
			attributes: attributes.into_iter().map(Into::into).collect(),
		}
	}

	pub fn with_locale_column(mut self, column: impl Into<String>) -> Self {
		self.locale_column = column.into();
		self
	}
}

impl Translatable for TranslationMeta {
	fn translated_attributes(&self) -> &[String] {
		&self.attributes
	}

	fn translation_table(&self) -> &str {
		&self.table
	}

	fn translation_foreign_key(&self) -> &str {
		&self.foreign_key
	}

	fn locale_column(&self) -> &str {
		&self.locale_column
	}
}

/// Runtime description of a record type
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{FilterModel, ModelMeta, TranslationMeta};
///
/// let posts = ModelMeta::new("posts")
///     .with_translations(TranslationMeta::new("post_translations", "post_id", ["title"]));
/// assert_eq!(posts.table_name(), "posts");
/// assert!(posts.as_translatable().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelMeta {
	table: String,
	primary_key: String,
	translations: Option<TranslationMeta>,
}

impl ModelMeta {
	pub fn new(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			primary_key: "id".to_string(),
			translations: None,
		}
	}

	pub fn with_primary_key(mut self, column: impl Into<String>) -> Self {
		self.primary_key = column.into();
		self
	}

	pub fn with_translations(mut self, translations: TranslationMeta) -> Self {
		self.translations = Some(translations);
		self
	}
}

impl FilterModel for ModelMeta {
	fn table_name(&self) -> &str {
		&self.table
	}

	fn primary_key(&self) -> &str {
		&self.primary_key
	}

	fn as_translatable(&self) -> Option<&dyn Translatable> {
		self.translations
			.as_ref()
			.map(|meta| meta as &dyn Translatable)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	struct DisabledTranslations {
		attributes: Vec<String>,
	}

	impl Translatable for DisabledTranslations {
		fn is_translatable(&self) -> bool {
			false
		}

		fn translated_attributes(&self) -> &[String] {
			&self.attributes
		}

		fn translation_table(&self) -> &str {
			"unused"
		}

		fn translation_foreign_key(&self) -> &str {
			"unused_id"
		}
	}

	struct DisabledModel(DisabledTranslations);

	impl FilterModel for DisabledModel {
		fn table_name(&self) -> &str {
			"pages"
		}

		fn as_translatable(&self) -> Option<&dyn Translatable> {
			Some(&self.0)
		}
	}

	#[fixture]
	fn posts() -> ModelMeta {
		ModelMeta::new("posts").with_translations(TranslationMeta::new(
			"post_translations",
			"post_id",
			["title", "body"],
		))
	}

	#[rstest]
	#[case("title", true)]
	#[case("body", true)]
	#[case("author", false)]
	#[case("Title", false)]
	fn test_translatable_model(posts: ModelMeta, #[case] name: &str, #[case] expected: bool) {
		assert_eq!(should_search_in_translations(name, &posts), expected);
	}

	#[rstest]
	#[case("title")]
	#[case("author")]
	fn test_model_without_capability(#[case] name: &str) {
		let users = ModelMeta::new("users");
		assert!(!should_search_in_translations(name, &users));
	}

	#[test]
	fn test_model_reporting_not_translatable() {
		let model = DisabledModel(DisabledTranslations {
			attributes: vec!["title".to_string()],
		});
		assert!(!should_search_in_translations("title", &model));
	}

	#[test]
	fn test_model_meta_defaults() {
		let meta = ModelMeta::new("users").with_primary_key("uuid");
		assert_eq!(meta.primary_key(), "uuid");
		assert!(meta.as_translatable().is_none());
	}
}
