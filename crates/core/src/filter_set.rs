//! Ordered collection of filters shown on one admin list view

use crate::error::{FilterError, FilterResult};
use crate::filter::Filter;
use crate::query::{ExecutesQuery, Queryable};
use crate::render::FilterRenderer;
use crate::translation::FilterModel;
use crate::value::RawInput;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;

/// Filters of a list view, evaluated and rendered in insertion order
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::{Filter, FilterSet, MakeFilter, SelectFilter, TextFilter};
/// use serde_json::json;
///
/// let mut filters = FilterSet::new()
///     .with(TextFilter::make("City", Some("address.city")))?
///     .with(SelectFilter::make_with("Status", None, |f| {
///         f.option("draft", "Draft").option("published", "Published");
///     }))?;
///
/// filters.bind_query_string("address%5Bcity%5D=Paris&status=draft")?;
///
/// assert_eq!(filters.get("address.city").unwrap().value(), Some(&json!("Paris")));
/// assert_eq!(filters.active().count(), 2);
/// # Ok::<(), reinhardt_admin_filters_core::FilterError>(())
/// ```
#[derive(Default)]
pub struct FilterSet {
	filters: Vec<Box<dyn Filter>>,
}

impl FilterSet {
	pub fn new() -> Self {
		Self {
			filters: Vec::new(),
		}
	}

	/// Add a filter; ids must be unique within the set
	pub fn push(&mut self, filter: impl Filter + 'static) -> FilterResult<&mut Self> {
		self.push_boxed(Box::new(filter))
	}

	pub fn push_boxed(&mut self, filter: Box<dyn Filter>) -> FilterResult<&mut Self> {
		if self.get(filter.id()).is_some() {
			return Err(FilterError::DuplicateId(filter.id().to_string()));
		}
		self.filters.push(filter);
		Ok(self)
	}

	/// Builder form of [`FilterSet::push`]
	pub fn with(mut self, filter: impl Filter + 'static) -> FilterResult<Self> {
		self.push(filter)?;
		Ok(self)
	}

	pub fn len(&self) -> usize {
		self.filters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.filters.is_empty()
	}

	pub fn get(&self, id: &str) -> Option<&dyn Filter> {
		self.iter().find(|filter| filter.id() == id)
	}

	pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Filter + 'static)> {
		self.filters
			.iter_mut()
			.find(|filter| filter.id() == id)
			.map(|filter| filter.as_mut())
	}

	pub fn iter(&self) -> impl Iterator<Item = &dyn Filter> {
		self.filters.iter().map(|filter| filter.as_ref() as &dyn Filter)
	}

	/// Filters whose bound value adds a constraint
	pub fn active(&self) -> impl Iterator<Item = &dyn Filter> {
		self.iter().filter(|filter| filter.is_applied())
	}

	/// Parse and bind submitted input for the filter `id`
	pub fn bind(&mut self, id: &str, input: RawInput) -> FilterResult<()> {
		let filter = self
			.get_mut(id)
			.ok_or_else(|| FilterError::UnknownFilter(id.to_string()))?;
		let value = filter.parse_input(input)?;
		tracing::debug!(filter = %id, value = ?value, "bound filter value");
		filter.bind_value(value);
		Ok(())
	}

	/// Bind every filter from an `application/x-www-form-urlencoded` string
	///
	/// Filters without input in `query` are cleared. Every input is parsed
	/// before anything is bound, so a rejected value leaves the whole set
	/// as it was.
	pub fn bind_query_string(&mut self, query: &str) -> FilterResult<()> {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
		let names: HashSet<String> = self.filters.iter().map(|filter| filter.name()).collect();

		let parsed = self
			.filters
			.iter()
			.map(|filter| {
				collect_input(&filter.name(), &pairs, &names)
					.map(|input| filter.parse_input(input))
					.transpose()
					.map(Option::flatten)
			})
			.collect::<FilterResult<Vec<_>>>()?;

		for (filter, value) in self.filters.iter_mut().zip(parsed) {
			tracing::debug!(filter = %filter.id(), value = ?value, "bound filter value");
			filter.bind_value(value);
		}
		Ok(())
	}

	/// Constrain `query` with every filter in order
	pub fn apply<E>(
		&self,
		executor: &E,
		query: E::Query,
		model: &dyn FilterModel,
	) -> FilterResult<E::Query>
	where
		E: ExecutesQuery + ?Sized,
	{
		self.iter()
			.try_fold(query, |query, filter| filter.apply_query(executor, query, model))
	}

	/// Render every filter in order
	pub fn render(&self, renderer: &dyn FilterRenderer) -> FilterResult<Vec<String>> {
		self.iter().map(|filter| filter.render(renderer)).collect()
	}
}

impl fmt::Debug for FilterSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list()
			.entries(self.iter().map(|filter| filter.id().to_string()))
			.finish()
	}
}

/// Gather the input submitted for the form field `name`
///
/// Keys that are themselves the name of another filter in the set are not
/// treated as nested input of this one.
fn collect_input(
	name: &str,
	pairs: &[(String, String)],
	names: &HashSet<String>,
) -> Option<RawInput> {
	let list_key = format!("{}[]", name);
	let mut scalars = Vec::new();
	let mut entries = IndexMap::new();

	for (key, value) in pairs {
		if key == name || *key == list_key {
			scalars.push((key == name, value.clone()));
			continue;
		}
		if names.contains(key) {
			continue;
		}
		let nested = key
			.strip_prefix(name)
			.and_then(|rest| rest.strip_prefix('['))
			.and_then(|rest| rest.strip_suffix(']'))
			.filter(|inner| !inner.is_empty() && !inner.contains(['[', ']']));
		if let Some(inner) = nested {
			entries.insert(inner.to_string(), value.clone());
		}
	}

	if !entries.is_empty() {
		return Some(RawInput::Map(entries));
	}
	match scalars.as_slice() {
		[] => None,
		[(true, value)] => Some(RawInput::Scalar(value.clone())),
		_ => Some(RawInput::List(
			scalars.into_iter().map(|(_, value)| value).collect(),
		)),
	}
}
