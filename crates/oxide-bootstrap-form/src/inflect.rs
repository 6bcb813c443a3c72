//! Name inflections used for labels and translation scopes.

use std::sync::LazyLock;

use regex::Regex;

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("Invalid acronym regex"));
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("Invalid word boundary regex"));

/// Converts a model class name to its underscored path form.
///
/// ```
/// use oxide_bootstrap_form::inflect::underscore;
///
/// assert_eq!(underscore("AdminUser"), "admin_user");
/// assert_eq!(underscore("Billing::HTTPRequest"), "billing/http_request");
/// ```
pub fn underscore(class_name: &str) -> String {
    let path = class_name.replace("::", "/");
    let path = ACRONYM_BOUNDARY.replace_all(&path, "${1}_${2}");
    let path = WORD_BOUNDARY.replace_all(&path, "${1}_${2}");
    path.replace('-', "_").to_lowercase()
}

/// Turns an attribute name into display text.
///
/// ```
/// use oxide_bootstrap_form::inflect::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("author_id"), "Author");
/// ```
pub fn humanize(name: &str) -> String {
    let base = name.strip_suffix("_id").unwrap_or(name);
    let words = base.trim_start_matches('_').replace('_', " ").to_lowercase();
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
