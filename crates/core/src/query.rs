//! Query binding contract between filters and a query executor
//!
//! A filter contributes its identity, lookup and bound value as a
//! [`FilterClause`]; the executor owns the mechanics of turning that into a
//! constraint on its query type.

use crate::error::FilterResult;
use crate::filter::Filter;
use crate::translation::FilterModel;
use crate::value::is_blank;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a filter's value constrains the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lookup {
	/// Equality; an array value is treated as membership
	Exact,
	/// Substring match
	Contains,
	/// Membership in an array value
	In,
	/// Object value with optional `from` and `to` bounds, both inclusive; a
	/// date `to` covers the whole day
	Range,
}

/// Everything an executor needs to constrain a query for one filter
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause<'a> {
	pub id: &'a str,
	/// Form-field name, see [`crate::resolve_name`]
	pub name: String,
	pub lookup: Lookup,
	/// Bound value, never blank
	pub value: &'a Value,
	/// Constrain the model's translation table instead of its primary table
	pub translated: bool,
}

impl FilterClause<'_> {
	/// Dot-separated segments of the id
	pub fn path(&self) -> Vec<&str> {
		self.id.split('.').collect()
	}

	/// Attribute the clause constrains: the last id segment
	pub fn attribute(&self) -> &str {
		self.id.rsplit('.').next().unwrap_or(self.id)
	}

	/// Relation qualifying the attribute for dotted ids
	pub fn relation(&self) -> Option<&str> {
		let path = self.path();
		(path.len() > 1).then(|| path[path.len() - 2])
	}
}

/// Applies filter clauses to a query
///
/// Implementations must be monotonic: they may add constraints but never
/// remove unrelated ones.
pub trait ExecutesQuery {
	type Query;

	fn apply(
		&self,
		query: Self::Query,
		clause: &FilterClause<'_>,
		model: &dyn FilterModel,
	) -> FilterResult<Self::Query>;
}

/// Filters that can constrain a query through an [`ExecutesQuery`] collaborator
pub trait Queryable {
	/// Constrain `query` with this filter, or return it untouched when the
	/// filter has no applicable value
	fn apply_query<E>(
		&self,
		executor: &E,
		query: E::Query,
		model: &dyn FilterModel,
	) -> FilterResult<E::Query>
	where
		E: ExecutesQuery + ?Sized;
}

impl<F> Queryable for F
where
	F: Filter + ?Sized,
{
	fn apply_query<E>(
		&self,
		executor: &E,
		query: E::Query,
		model: &dyn FilterModel,
	) -> FilterResult<E::Query>
	where
		E: ExecutesQuery + ?Sized,
	{
		let value = match self.value() {
			Some(value) if !is_blank(value) => value,
			_ => {
				tracing::trace!(filter = %self.id(), "filter not applied: no value");
				return Ok(query);
			}
		};

		let clause = FilterClause {
			id: self.id(),
			name: self.name(),
			lookup: self.lookup(),
			value,
			translated: self.should_search_in_translations(model),
		};

		executor.apply(query, &clause, model)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::translation::{ModelMeta, TranslationMeta};
	use crate::variants::TextFilter;
	use crate::MakeFilter;
	use rstest::{fixture, rstest};
	use serde_json::json;
	use std::cell::Cell;

	/// Records each clause as a string instead of building SQL
	#[derive(Default)]
	struct RecordingExecutor {
		calls: Cell<usize>,
	}

	impl ExecutesQuery for RecordingExecutor {
		type Query = Vec<String>;

		fn apply(
			&self,
			mut query: Vec<String>,
			clause: &FilterClause<'_>,
			_model: &dyn FilterModel,
		) -> FilterResult<Vec<String>> {
			self.calls.set(self.calls.get() + 1);
			query.push(format!(
				"{}:{:?}:{}:{}",
				clause.name, clause.lookup, clause.value, clause.translated
			));
			Ok(query)
		}
	}

	#[fixture]
	fn posts() -> ModelMeta {
		ModelMeta::new("posts")
			.with_translations(TranslationMeta::new("post_translations", "post_id", ["title"]))
	}

	#[rstest]
	fn test_unset_value_leaves_query_untouched(posts: ModelMeta) {
		let executor = RecordingExecutor::default();
		let filter = TextFilter::make("Title", None);
		let query = vec!["base".to_string()];

		let result = filter.apply_query(&executor, query.clone(), &posts).unwrap();

		assert_eq!(result, query);
		assert_eq!(executor.calls.get(), 0);
	}

	#[rstest]
	#[case(json!(""))]
	#[case(json!(null))]
	#[case(json!([]))]
	fn test_blank_value_leaves_query_untouched(posts: ModelMeta, #[case] value: Value) {
		let executor = RecordingExecutor::default();
		let filter = TextFilter::make_with("Title", None, |f| {
			f.set_value(value);
		});

		let result = filter.apply_query(&executor, Vec::new(), &posts).unwrap();

		assert!(result.is_empty());
		assert_eq!(executor.calls.get(), 0);
	}

	#[rstest]
	fn test_applied_value_reaches_executor(posts: ModelMeta) {
		let executor = RecordingExecutor::default();
		let filter = TextFilter::make_with("Title", None, |f| {
			f.set_value("rust");
		});

		let result = filter
			.apply_query(&executor, vec!["base".to_string()], &posts)
			.unwrap();

		assert_eq!(result, vec!["base", "title:Contains:\"rust\":true"]);
		assert_eq!(executor.calls.get(), 1);
	}

	#[test]
	fn test_clause_path_helpers() {
		let value = json!("Paris");
		let clause = FilterClause {
			id: "profile.address.city",
			name: "profile[address][city]".to_string(),
			lookup: Lookup::Exact,
			value: &value,
			translated: false,
		};
		assert_eq!(clause.path(), vec!["profile", "address", "city"]);
		assert_eq!(clause.attribute(), "city");
		assert_eq!(clause.relation(), Some("address"));
	}

	#[test]
	fn test_clause_without_relation() {
		let value = json!(1);
		let clause = FilterClause {
			id: "age",
			name: "age".to_string(),
			lookup: Lookup::Exact,
			value: &value,
			translated: false,
		};
		assert_eq!(clause.attribute(), "age");
		assert_eq!(clause.relation(), None);
	}
}
