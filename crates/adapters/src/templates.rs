//! Built-in widget templates, registered under `admin/filters/`

pub(crate) const TEXT: &str = r#"<div class="admin-filter admin-filter-text">
	<label for="filter-{{ field.id }}">{{ field.title }}</label>
	<input type="text" id="filter-{{ field.id }}" name="{{ field.name }}" value="{{ field.value | default(value="") }}"{% if placeholder %} placeholder="{{ placeholder }}"{% endif %}>
</div>
"#;

pub(crate) const SELECT: &str = r#"<div class="admin-filter admin-filter-select">
	<label for="filter-{{ field.id }}">{{ field.title }}</label>
	<select id="filter-{{ field.id }}" name="{{ field.name }}{% if multiple %}[]{% endif %}"{% if multiple %} multiple{% endif %}>
		{% if not multiple %}<option value="">All</option>{% endif %}
		{% for option in options %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
		{% endfor %}
	</select>
</div>
"#;

pub(crate) const BOOLEAN: &str = r#"<div class="admin-filter admin-filter-boolean">
	<label for="filter-{{ field.id }}">{{ field.title }}</label>
	<select id="filter-{{ field.id }}" name="{{ field.name }}">
		{% for option in options %}<option value="{{ option.value }}"{% if option.selected %} selected{% endif %}>{{ option.label }}</option>
		{% endfor %}
	</select>
</div>
"#;

pub(crate) const NUMBER: &str = r#"<div class="admin-filter admin-filter-number">
	<label for="filter-{{ field.id }}">{{ field.title }}</label>
	<input type="number" id="filter-{{ field.id }}" name="{{ field.name }}" value="{{ field.value | default(value="") }}"{% if min is number %} min="{{ min }}"{% endif %}{% if max is number %} max="{{ max }}"{% endif %}{% if step is number %} step="{{ step }}"{% endif %}>
</div>
"#;

pub(crate) const DATE_RANGE: &str = r#"<div class="admin-filter admin-filter-daterange">
	<label for="filter-{{ field.id }}-from">{{ field.title }}</label>
	<input type="text" id="filter-{{ field.id }}-from" name="{{ field.name }}[from]" value="{{ from }}">
	<input type="text" id="filter-{{ field.id }}-to" name="{{ field.name }}[to]" value="{{ to }}">
	<div class="admin-filter-presets">
		{% for preset in presets %}<button type="button" data-from="{{ preset.from }}" data-to="{{ preset.to }}">{{ preset.label }}</button>
		{% endfor %}
	</div>
</div>
"#;

/// `(component, source)` for every built-in variant
pub(crate) const BUILTIN: [(&str, &str); 5] = [
	("text", TEXT),
	("select", SELECT),
	("boolean", BOOLEAN),
	("number", NUMBER),
	("daterange", DATE_RANGE),
];
