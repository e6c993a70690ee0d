//! # Reinhardt Admin Filters Core
//!
//! Filter controls for admin list views: a uniform contract translating
//! end-user input into query constraints, aware of translated attributes.
//!
//! ## Overview
//!
//! - [`Filter`]: the contract every filter variant implements
//! - [`MakeFilter`]: `make` / `make_with` construction with a configure callback
//! - [`derive_id`] / [`resolve_name`]: stable ids and nested form-field names
//! - [`Queryable`] / [`ExecutesQuery`]: binding filters to a query executor
//! - [`FilterRenderer`]: rendering filters through an injected template renderer
//! - [`FilterSet`]: binding submitted input and applying a whole list view's filters
//!
//! ## Example
//!
//! ```
//! use reinhardt_admin_filters_core::{Filter, MakeFilter, TextFilter};
//!
//! let filter = TextFilter::make("First Name", None);
//! assert_eq!(filter.id(), "first_name");
//! assert_eq!(filter.title(), "First Name");
//!
//! let city = TextFilter::make("City", Some("address.city"));
//! assert_eq!(city.name(), "address[city]");
//! ```

pub mod error;
pub mod filter;
pub mod filter_set;
pub mod identity;
pub mod inflection;
pub mod query;
pub mod render;
pub mod settings;
pub mod translation;
pub mod value;
pub mod variants;

pub use error::{FilterError, FilterResult};
pub use filter::{Filter, MakeFilter};
pub use filter_set::FilterSet;
pub use identity::{FilterBase, derive_id, resolve_name};
pub use query::{ExecutesQuery, FilterClause, Lookup, Queryable};
pub use render::{FilterRenderer, RenderPayload, TEMPLATE_NAMESPACE};
pub use settings::{FilterSettings, SqlDialect};
pub use translation::{
	FilterModel, ModelMeta, Translatable, TranslationMeta, should_search_in_translations,
};
pub use value::{RawInput, is_blank};
pub use variants::{BooleanFilter, DateRangeFilter, NumberFilter, SelectFilter, TextFilter};
