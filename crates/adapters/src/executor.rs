//! sea-query implementation of the filter query executor

use chrono::NaiveDate;
use reinhardt_admin_filters_core::{
	ExecutesQuery, FilterClause, FilterError, FilterModel, FilterResult, FilterSettings, Lookup,
	SqlDialect, is_blank,
};
use sea_query::{
	Alias, Asterisk, Expr, ExprTrait, Func, MysqlQueryBuilder, PostgresQueryBuilder, Query,
	SelectStatement, SqliteQueryBuilder,
};
use serde_json::Value;

/// Convert a bound JSON scalar to a sea-query value
fn to_sea_value(value: &Value) -> FilterResult<sea_query::Value> {
	match value {
		Value::String(s) => Ok(s.clone().into()),
		Value::Bool(b) => Ok((*b).into()),
		Value::Number(n) => {
			if let Some(int) = n.as_i64() {
				Ok(int.into())
			} else if let Some(uint) = n.as_u64() {
				Ok(uint.into())
			} else {
				n.as_f64()
					.map(Into::into)
					.ok_or_else(|| FilterError::Query(format!("unsupported number: {}", n)))
			}
		}
		other => Err(FilterError::Query(format!("unsupported value: {}", other))),
	}
}

/// Non-blank members of an array value as sea-query values
fn to_sea_values(items: &[Value]) -> FilterResult<Vec<sea_query::Value>> {
	items
		.iter()
		.filter(|item| !is_blank(item))
		.map(to_sea_value)
		.collect()
}

/// Day following a `YYYY-MM-DD` bound
///
/// A date upper bound becomes `< next day` so timestamps during the last day
/// still match.
fn day_after(value: &Value) -> Option<String> {
	let date = NaiveDate::parse_from_str(value.as_str()?, "%Y-%m-%d").ok()?;
	date.succ_opt()
		.map(|next| next.format("%Y-%m-%d").to_string())
}

/// Applies filter clauses to a sea-query `SELECT`
///
/// Single-segment ids constrain `"<table>"."<attribute>"`. Dotted ids
/// constrain the attribute on the relation named by the second-to-last
/// segment; joining that relation is up to the caller. Clauses on translated
/// attributes become a primary-key subquery on the translation table.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_adapters::SeaQueryExecutor;
/// use reinhardt_admin_filters_core::{Filter, MakeFilter, ModelMeta, NumberFilter, Queryable};
///
/// let users = ModelMeta::new("users");
/// let executor = SeaQueryExecutor::new();
/// let age = NumberFilter::make_with("Age", None, |f| {
///     f.set_value(30);
/// });
///
/// let query = age
///     .apply_query(&executor, SeaQueryExecutor::base_query(&users), &users)
///     .unwrap();
///
/// assert_eq!(
///     executor.to_sql(&query),
///     r#"SELECT * FROM "users" WHERE "users"."age" = 30"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SeaQueryExecutor {
	case_insensitive: bool,
	locale: Option<String>,
	dialect: SqlDialect,
}

impl Default for SeaQueryExecutor {
	fn default() -> Self {
		Self::from_settings(&FilterSettings::default())
	}
}

impl SeaQueryExecutor {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: &FilterSettings) -> Self {
		Self {
			case_insensitive: settings.case_insensitive_search,
			locale: settings.locale.clone(),
			dialect: settings.backend,
		}
	}

	pub fn case_insensitive(mut self, enabled: bool) -> Self {
		self.case_insensitive = enabled;
		self
	}

	/// Restrict translated-attribute constraints to `locale`
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
		self.dialect = dialect;
		self
	}

	pub fn dialect(&self) -> SqlDialect {
		self.dialect
	}

	/// `SELECT * FROM <table>` for a model
	pub fn base_query(model: &dyn FilterModel) -> SelectStatement {
		Query::select()
			.column(Asterisk)
			.from(Alias::new(model.table_name()))
			.to_owned()
	}

	/// Render `query` as SQL text in the configured dialect
	pub fn to_sql(&self, query: &SelectStatement) -> String {
		match self.dialect {
			SqlDialect::Postgres => query.to_string(PostgresQueryBuilder),
			SqlDialect::Mysql => query.to_string(MysqlQueryBuilder),
			SqlDialect::Sqlite => query.to_string(SqliteQueryBuilder),
		}
	}

	fn condition(&self, table: &str, clause: &FilterClause<'_>) -> FilterResult<Expr> {
		let column = || Expr::col((Alias::new(table), Alias::new(clause.attribute())));

		match (clause.lookup, clause.value) {
			(Lookup::Exact | Lookup::In, Value::Array(items)) => {
				Ok(column().is_in(to_sea_values(items)?))
			}
			(Lookup::Exact | Lookup::In, scalar) => Ok(column().eq(to_sea_value(scalar)?)),
			(Lookup::Contains, value) => {
				let needle = match value {
					Value::String(s) => s.trim().to_string(),
					other => other.to_string(),
				};
				if self.case_insensitive {
					Ok(Expr::expr(Func::lower(column()))
						.like(format!("%{}%", needle.to_lowercase())))
				} else {
					Ok(column().like(format!("%{}%", needle)))
				}
			}
			(Lookup::Range, Value::Object(bounds)) => {
				let bound = |key: &str| bounds.get(key).filter(|value| !is_blank(value));
				let lower = bound("from")
					.map(|from| to_sea_value(from).map(|from| column().gte(from)))
					.transpose()?;
				let upper = bound("to")
					.map(|to| match day_after(to) {
						Some(next) => Ok(column().lt(next)),
						None => to_sea_value(to).map(|to| column().lte(to)),
					})
					.transpose()?;
				match (lower, upper) {
					(Some(lower), Some(upper)) => Ok(lower.and(upper)),
					(Some(only), None) | (None, Some(only)) => Ok(only),
					(None, None) => Err(FilterError::Query(format!(
						"range filter '{}' has neither 'from' nor 'to'",
						clause.id
					))),
				}
			}
			(Lookup::Range, other) => Err(FilterError::Query(format!(
				"range filter '{}' expects an object, got {}",
				clause.id, other
			))),
		}
	}
}

impl ExecutesQuery for SeaQueryExecutor {
	type Query = SelectStatement;

	fn apply(
		&self,
		mut query: SelectStatement,
		clause: &FilterClause<'_>,
		model: &dyn FilterModel,
	) -> FilterResult<SelectStatement> {
		if is_blank(clause.value) {
			return Ok(query);
		}

		let translations = if clause.translated {
			model.as_translatable()
		} else {
			None
		};

		match translations {
			Some(translatable) => {
				let table = translatable.translation_table();
				let mut translated = Query::select()
					.column(Alias::new(translatable.translation_foreign_key()))
					.from(Alias::new(table))
					.and_where(self.condition(table, clause)?)
					.to_owned();
				if let Some(locale) = &self.locale {
					translated.and_where(
						Expr::col((Alias::new(table), Alias::new(translatable.locale_column())))
							.eq(locale.as_str()),
					);
				}
				query.and_where(
					Expr::col((
						Alias::new(model.table_name()),
						Alias::new(model.primary_key()),
					))
					.in_subquery(translated),
				);
			}
			None => {
				let table = clause.relation().unwrap_or_else(|| model.table_name());
				query.and_where(self.condition(table, clause)?);
			}
		}

		tracing::debug!(
			filter = %clause.id,
			lookup = ?clause.lookup,
			translated = clause.translated,
			"applied filter constraint"
		);
		Ok(query)
	}
}
