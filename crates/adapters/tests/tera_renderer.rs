//! Rendering the built-in filter widgets with Tera

use reinhardt_admin_filters_adapters::TeraRenderer;
use reinhardt_admin_filters_core::{
	BooleanFilter, DateRangeFilter, Filter, FilterSet, FilterSettings, MakeFilter, NumberFilter,
	SelectFilter, TextFilter,
};
use rstest::{fixture, rstest};
use serde_json::json;
use std::fs;

#[fixture]
fn renderer() -> TeraRenderer {
	TeraRenderer::new().unwrap()
}

#[rstest]
fn test_text_widget(renderer: TeraRenderer) {
	let filter = TextFilter::make_with("First Name", None, |f| {
		f.placeholder("Jane").set_value("Ann");
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"id="filter-first_name""#));
	assert!(html.contains(r#"name="first_name""#));
	assert!(html.contains(r#"value="Ann""#));
	assert!(html.contains(r#"placeholder="Jane""#));
	assert!(html.contains(">First Name</label>"));
}

#[rstest]
fn test_text_widget_without_value_or_placeholder(renderer: TeraRenderer) {
	let html = TextFilter::make("First Name", None).render(&renderer).unwrap();

	assert!(html.contains(r#"value="""#));
	assert!(!html.contains("placeholder"));
}

#[rstest]
fn test_values_are_escaped(renderer: TeraRenderer) {
	let filter = TextFilter::make_with("Name", None, |f| {
		f.set_value("<b>\"x\"");
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains("&lt;b&gt;&quot;x&quot;"));
	assert!(!html.contains("<b>"));
}

#[rstest]
fn test_nested_name(renderer: TeraRenderer) {
	let html = TextFilter::make("City", Some("address.city"))
		.render(&renderer)
		.unwrap();

	assert!(html.contains(r#"name="address[city]""#));
}

#[rstest]
fn test_select_marks_selected_option(renderer: TeraRenderer) {
	let filter = SelectFilter::make_with("Status", None, |f| {
		f.option("draft", "Draft")
			.option("published", "Published")
			.set_value("published");
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"<option value="published" selected>Published</option>"#));
	assert!(html.contains(r#"<option value="draft">Draft</option>"#));
	assert!(html.contains(r#"<option value="">All</option>"#));
}

#[rstest]
fn test_multiple_select(renderer: TeraRenderer) {
	let filter = SelectFilter::make_with("Tags", None, |f| {
		f.options_from([("a", "A"), ("b", "B")]).multiple(true);
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"name="tags[]" multiple"#));
	assert!(!html.contains("All"));
}

#[rstest]
fn test_boolean_widget(renderer: TeraRenderer) {
	let filter = BooleanFilter::make_with("Is Active", None, |f| {
		f.set_value(true);
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"<option value="1" selected>Yes</option>"#));
	assert!(html.contains(r#"<option value="0">No</option>"#));
}

#[rstest]
fn test_number_widget_bounds(renderer: TeraRenderer) {
	let filter = NumberFilter::make_with("Age", None, |f| {
		f.min(0.0).set_value(30);
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"type="number""#));
	assert!(html.contains(r#"value="30""#));
	assert!(html.contains(r#" min="0"#));
	assert!(!html.contains("max="));
}

#[rstest]
fn test_date_range_widget(renderer: TeraRenderer) {
	let filter = DateRangeFilter::make_with("Created At", None, |f| {
		f.set_value(json!({"from": "2024-01-01", "to": "2024-01-31"}));
	});

	let html = filter.render(&renderer).unwrap();

	assert!(html.contains(r#"name="created_at[from]" value="2024-01-01""#));
	assert!(html.contains(r#"name="created_at[to]" value="2024-01-31""#));
	assert!(html.contains(">Last 7 days</button>"));
}

#[rstest]
fn test_filter_set_renders_in_order(renderer: TeraRenderer) {
	let filters = FilterSet::new()
		.with(NumberFilter::make("Age", None))
		.unwrap()
		.with(TextFilter::make("Name", None))
		.unwrap();

	let rendered = filters.render(&renderer).unwrap();

	assert_eq!(rendered.len(), 2);
	assert!(rendered[0].contains("admin-filter-number"));
	assert!(rendered[1].contains("admin-filter-text"));
}

#[test]
fn test_template_dir_overrides_builtin() {
	let dir = tempfile::tempdir().unwrap();
	let filters_dir = dir.path().join("admin").join("filters");
	fs::create_dir_all(&filters_dir).unwrap();
	fs::write(
		filters_dir.join("text.html"),
		"<span>{{ field.title }}</span>",
	)
	.unwrap();

	let settings = FilterSettings {
		template_dir: Some(dir.path().to_path_buf()),
		..FilterSettings::default()
	};
	let renderer = TeraRenderer::from_settings(&settings).unwrap();

	let text = TextFilter::make("Name", None).render(&renderer).unwrap();
	let number = NumberFilter::make("Age", None).render(&renderer).unwrap();

	assert_eq!(text, "<span>Name</span>");
	assert!(number.contains("admin-filter-number"));
}
