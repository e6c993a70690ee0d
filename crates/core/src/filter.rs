//! The filter contract implemented by every filter variant

use crate::error::FilterResult;
use crate::identity::FilterBase;
use crate::query::Lookup;
use crate::render::{self, FilterRenderer, RenderPayload};
use crate::translation::{self, FilterModel};
use crate::value::{RawInput, is_blank};
use serde_json::Value;

/// A named, identified, value-bearing control constraining a record query
///
/// Variants store their identity in a [`FilterBase`] and supply their
/// template component and [`Lookup`]; everything else has a default.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{Filter, FilterBase, Lookup, MakeFilter};
///
/// struct SlugFilter {
///     base: FilterBase,
/// }
///
/// impl Filter for SlugFilter {
///     fn base(&self) -> &FilterBase {
///         &self.base
///     }
///
///     fn base_mut(&mut self) -> &mut FilterBase {
///         &mut self.base
///     }
///
///     fn component(&self) -> &str {
///         "slug"
///     }
///
///     fn lookup(&self) -> Lookup {
///         Lookup::Exact
///     }
/// }
///
/// impl MakeFilter for SlugFilter {
///     fn from_base(base: FilterBase) -> Self {
///         Self { base }
///     }
/// }
///
/// let filter = SlugFilter::make("Slug", None);
/// assert_eq!(filter.template(), "admin/filters/slug.html");
/// ```
pub trait Filter: Send + Sync {
	fn base(&self) -> &FilterBase;

	fn base_mut(&mut self) -> &mut FilterBase;

	/// Template component name, e.g. `text` or `select`
	fn component(&self) -> &str;

	fn lookup(&self) -> Lookup;

	fn id(&self) -> &str {
		self.base().id()
	}

	fn title(&self) -> &str {
		self.base().title()
	}

	fn name(&self) -> String {
		self.base().name()
	}

	fn value(&self) -> Option<&Value> {
		self.base().value()
	}

	/// Bind `value` and return the filter for chaining
	fn set_value(&mut self, value: impl Into<Value>) -> &mut Self
	where
		Self: Sized,
	{
		self.base_mut().set_value(value);
		self
	}

	/// Bind or unset the value through a trait object
	fn bind_value(&mut self, value: Option<Value>) {
		self.base_mut().replace_value(value);
	}

	fn clear_value(&mut self) {
		self.base_mut().clear_value();
	}

	/// Whether the bound value would add a constraint
	fn is_applied(&self) -> bool {
		self.value().is_some_and(|value| !is_blank(value))
	}

	/// Turn submitted input into a value, `None` meaning "not set"
	///
	/// The default keeps the input as strings and treats blank input as unset.
	fn parse_input(&self, input: RawInput) -> FilterResult<Option<Value>> {
		let value = input.into_value();
		Ok((!is_blank(&value)).then_some(value))
	}

	fn should_search_in_translations(&self, model: &dyn FilterModel) -> bool {
		translation::should_search_in_translations(&self.name(), model)
	}

	fn template(&self) -> String {
		render::template_name(self.component())
	}

	/// Additional template data; empty by default
	fn render_with(&self) -> RenderPayload {
		RenderPayload::new()
	}

	/// `render_with()` merged with this filter under the `field` key
	fn render_payload(&self) -> RenderPayload {
		render::build_payload(self)
	}

	fn render(&self, renderer: &dyn FilterRenderer) -> FilterResult<String> {
		renderer.render(&self.template(), &self.render_payload())
	}
}

/// Construction protocol for concrete filters
///
/// `make*` is the supported way to create a filter; `from_base` only wires
/// the shared state into the variant.
pub trait MakeFilter: Filter + Sized {
	fn from_base(base: FilterBase) -> Self;

	/// Create a filter titled `title`, with an optional explicit id
	fn make(title: &str, id: Option<&str>) -> Self {
		Self::from_base(FilterBase::new(title, id))
	}

	/// Create a filter and run `configure` on it once before returning it
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_admin_filters_core::{Filter, MakeFilter, TextFilter};
	/// use serde_json::json;
	///
	/// let filter = TextFilter::make_with("City", Some("address.city"), |f| {
	///     f.set_value("Paris");
	/// });
	/// assert_eq!(filter.name(), "address[city]");
	/// assert_eq!(filter.value(), Some(&json!("Paris")));
	/// ```
	fn make_with<C>(title: &str, id: Option<&str>, configure: C) -> Self
	where
		C: FnOnce(&mut Self),
	{
		let mut filter = Self::make(title, id);
		configure(&mut filter);
		filter
	}

	/// Like [`MakeFilter::make_with`] but the configuration may fail, in which
	/// case its error is returned and no filter is produced
	fn try_make_with<C, E>(title: &str, id: Option<&str>, configure: C) -> Result<Self, E>
	where
		C: FnOnce(&mut Self) -> Result<(), E>,
	{
		let mut filter = Self::make(title, id);
		configure(&mut filter)?;
		Ok(filter)
	}
}
