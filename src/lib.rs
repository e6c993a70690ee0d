//! # Reinhardt Admin Filters
//!
//! Filter controls for admin list views. A filter turns what an end user
//! submitted in the list view's filter form into a constraint on the query
//! backing that list, and knows how to draw its own widget.
//!
//! ## Feature Flags
//!
//! - `query` - [`SeaQueryExecutor`], applying filters to sea-query `SELECT` statements
//! - `templates` - [`TeraRenderer`], rendering filter widgets with Tera
//! - `full` (default) - Both of the above
//!
//! ## Quick Start
//!
//! ```
//! use reinhardt_admin_filters::prelude::*;
//!
//! let users = ModelMeta::new("users");
//! let mut filters = FilterSet::new()
//!     .with(TextFilter::make("First Name", None))?
//!     .with(BooleanFilter::make("Is Active", None))?;
//!
//! filters.bind_query_string("first_name=ann&is_active=1")?;
//!
//! let executor = SeaQueryExecutor::new();
//! let query = filters.apply(&executor, SeaQueryExecutor::base_query(&users), &users)?;
//! assert_eq!(
//!     executor.to_sql(&query),
//!     r#"SELECT * FROM "users" WHERE LOWER("users"."first_name") LIKE '%ann%' AND "users"."is_active" = TRUE"#
//! );
//!
//! let widgets = filters.render(&TeraRenderer::new()?)?;
//! assert_eq!(widgets.len(), 2);
//! # Ok::<(), FilterError>(())
//! ```

pub use reinhardt_admin_filters_core::{
	BooleanFilter, DateRangeFilter, ExecutesQuery, Filter, FilterBase, FilterClause, FilterError,
	FilterModel, FilterRenderer, FilterResult, FilterSet, FilterSettings, Lookup, MakeFilter,
	ModelMeta, NumberFilter, Queryable, RawInput, RenderPayload, SelectFilter, SqlDialect,
	TEMPLATE_NAMESPACE, TextFilter, Translatable, TranslationMeta, derive_id, is_blank,
	resolve_name, should_search_in_translations,
};

/// Building blocks for custom filters and backends
pub use reinhardt_admin_filters_core::{identity, inflection, query, render, settings, translation};

#[cfg(feature = "query")]
pub use reinhardt_admin_filters_adapters::SeaQueryExecutor;
#[cfg(feature = "templates")]
pub use reinhardt_admin_filters_adapters::TeraRenderer;

/// Re-exports for common usage
pub mod prelude {
	pub use crate::{
		BooleanFilter, DateRangeFilter, ExecutesQuery, Filter, FilterError, FilterModel,
		FilterRenderer, FilterResult, FilterSet, FilterSettings, MakeFilter, ModelMeta,
		NumberFilter, Queryable, SelectFilter, TextFilter, Translatable, TranslationMeta,
	};

	#[cfg(feature = "query")]
	pub use crate::SeaQueryExecutor;
	#[cfg(feature = "templates")]
	pub use crate::TeraRenderer;
}
