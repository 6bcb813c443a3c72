//! Raw field rendering: the native inputs a form group wraps.
//!
//! The composer never builds inputs itself. It hands an [`HtmlAttrs`] set
//! to a [`RawFieldRenderer`] and decorates whatever markup comes back.

mod standard;

pub use standard::StandardRenderer;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// HTML attributes handed to the raw field renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttrs {
    /// Attribute values keyed by name.
    pub attrs: BTreeMap<String, String>,
}

impl HtmlAttrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self {
            attrs: BTreeMap::new(),
        }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Sets an attribute unless it is already present.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        self.attrs
            .entry(key.to_string())
            .or_insert_with(|| value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Returns whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.attrs.iter()
    }

    /// Returns a copy without the given attributes.
    #[must_use]
    pub fn without(&self, keys: &[&str]) -> Self {
        Self {
            attrs: self
                .attrs
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    /// Renders attributes as an HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#"{k}="{}""#, html_escape(v)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// The native control a raw renderer should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// An `<input>` with the given `type`.
    Input(&'static str),
    /// A `<textarea>`; the `value` attribute becomes its content.
    TextArea,
    /// A checkbox, optionally preceded by a hidden unchecked value.
    CheckBox {
        checked_value: String,
        unchecked_value: Option<String>,
        multiple: bool,
    },
    /// A radio button carrying `value`.
    RadioButton { value: String },
    /// A hidden input; `multiple` submits it as an array member.
    Hidden { multiple: bool },
}

/// Text of the disabled option between priority and regular choices.
pub const SEPARATOR_TEXT: &str = "-------------";

/// One option of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// Displayed text.
    pub text: String,
    /// Whether the option can be picked.
    pub disabled: bool,
}

impl Choice {
    /// Creates a choice.
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            disabled: false,
        }
    }

    /// Creates the disabled separator placed after priority choices.
    pub fn separator() -> Self {
        Self {
            value: String::new(),
            text: SEPARATOR_TEXT.to_string(),
            disabled: true,
        }
    }
}

/// A labelled `<optgroup>` of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceGroup {
    /// Group label.
    pub label: String,
    /// Choices in display order.
    pub choices: Vec<Choice>,
}

impl ChoiceGroup {
    /// Creates a group.
    pub fn new(label: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            label: label.into(),
            choices,
        }
    }
}

/// Produces framework-native field markup.
///
/// Implementations must honor the `class` attribute they are handed.
pub trait RawFieldRenderer {
    /// Renders a single input control.
    fn render_input(&self, kind: &InputKind, name: &str, attrs: &HtmlAttrs) -> Result<String>;

    /// Renders a select with the given choices. A `value` attribute marks
    /// the selected choice.
    fn render_select(&self, name: &str, choices: &[Choice], attrs: &HtmlAttrs) -> Result<String>;

    /// Renders a select whose choices are split into option groups.
    fn render_grouped_select(
        &self,
        name: &str,
        groups: &[ChoiceGroup],
        attrs: &HtmlAttrs,
    ) -> Result<String>;
}

static OBJECT_NAME_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\[|[^-a-zA-Z0-9:.]").expect("Invalid object name regex"));
static ATTRIBUTE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z_:][-a-zA-Z0-9_:.]*$").expect("Invalid attribute name regex")
});
static VALUE_JUNK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\w]").expect("Invalid value regex"));

/// Returns the submitted name of a field, scoped by the object name.
///
/// ```
/// use oxide_bootstrap_form::widgets::field_name;
///
/// assert_eq!(field_name(Some("user"), "email", false), "user[email]");
/// assert_eq!(field_name(Some("user"), "role_ids", true), "user[role_ids][]");
/// assert_eq!(field_name(None, "q", false), "q");
/// ```
pub fn field_name(object_name: Option<&str>, name: &str, multiple: bool) -> String {
    let mut scoped = match object_name {
        Some(object) if !object.is_empty() => format!("{object}[{name}]"),
        _ => name.to_string(),
    };
    if multiple {
        scoped.push_str("[]");
    }
    scoped
}

/// Returns the DOM id of a field, with an optional value suffix for
/// checkboxes and radio buttons.
///
/// ```
/// use oxide_bootstrap_form::widgets::field_id;
///
/// assert_eq!(field_id(Some("user"), "email", None), "user_email");
/// assert_eq!(field_id(Some("user[address]"), "city", None), "user_address_city");
/// assert_eq!(field_id(Some("user"), "misc", Some("Two Words")), "user_misc_two_words");
/// ```
pub fn field_id(object_name: Option<&str>, name: &str, suffix: Option<&str>) -> String {
    let mut id = match object_name {
        Some(object) if !object.is_empty() => {
            let object = OBJECT_NAME_JUNK.replace_all(object, "_");
            format!("{}_{name}", object.trim_end_matches('_'))
        }
        _ => name.to_string(),
    };
    if let Some(suffix) = suffix {
        let suffix = suffix.split_whitespace().collect::<Vec<_>>().join("_");
        let suffix = VALUE_JUNK.replace_all(&suffix, "").to_lowercase();
        id.push('_');
        id.push_str(&suffix);
    }
    id
}

/// Returns whether `name` can be written as an attribute name unquoted.
///
/// ```
/// use oxide_bootstrap_form::widgets::is_attribute_name;
///
/// assert!(is_attribute_name("data-role"));
/// assert!(is_attribute_name("xml:lang"));
/// assert!(!is_attribute_name("on\"click"));
/// assert!(!is_attribute_name("two words"));
/// ```
pub fn is_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAME.is_match(name)
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
