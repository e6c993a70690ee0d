//! String inflection used to derive filter titles and identifiers
//!
//! Both transforms are deterministic and side-effect free. Word boundaries are
//! detected from casing, whitespace and punctuation; punctuation itself never
//! survives into the output.

use convert_case::{Case, Casing};

/// Split `raw` into words on any non-alphanumeric character, then rejoin them
/// with single spaces so casing-based boundaries are left to `convert_case`.
fn normalize_words(raw: &str) -> String {
	raw.split(|c: char| !c.is_alphanumeric())
		.filter(|word| !word.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

/// Turn a raw label or attribute name into a human-readable title
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::inflection::humanize;
///
/// assert_eq!(humanize("first_name"), "First Name");
/// assert_eq!(humanize("createdAt"), "Created At");
/// assert_eq!(humanize("First Name"), "First Name");
/// ```
pub fn humanize(raw: &str) -> String {
	normalize_words(raw).to_case(Case::Title)
}

/// Convert a string into identifier case: lowercase words joined by `_`
///
/// Idempotent: an already-normalized identifier is returned unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_admin_filters_core::inflection::to_identifier_case;
///
/// assert_eq!(to_identifier_case("First Name"), "first_name");
/// assert_eq!(to_identifier_case("first_name"), "first_name");
/// ```
pub fn to_identifier_case(raw: &str) -> String {
	// Lowercasing may itself produce non-alphanumeric characters (`İ` lowers
	// to `i` + U+0307), so repeat until no new word break appears.
	let mut current = snake_words(raw);
	for _ in 0..=current.chars().count() {
		let next = snake_words(&current);
		if next == current {
			break;
		}
		current = next;
	}
	current
}

/// One snake-case pass, re-split on anything lowercasing left non-alphanumeric
fn snake_words(raw: &str) -> String {
	normalize_words(raw)
		.to_case(Case::Snake)
		.split(|c: char| !c.is_alphanumeric())
		.filter(|word| !word.is_empty())
		.collect::<Vec<_>>()
		.join("_")
}
