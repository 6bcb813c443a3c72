//! Data sources consumed while composing groups: error messages of the
//! bound model and localized strings.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;

/// Source of validation messages for the bound object.
pub trait ErrorSource {
    /// Returns the messages for a field, in order. Empty when there are none.
    fn messages_for(&self, field: &str) -> Vec<String>;
}

/// Source of localized strings.
pub trait LocalizationSource {
    /// Looks up `key` under the dotted `scope`.
    ///
    /// Returns `default` (if any) when the key is missing.
    fn lookup(&self, key: &str, scope: &str, default: Option<&str>) -> Result<Option<String>>;
}

/// The model object a form is bound to.
#[derive(Clone, Copy)]
pub struct ModelBinding<'a> {
    /// Class name of the model, e.g. `AdminUser`.
    pub model_name: &'a str,
    /// Validation messages of the object, if it carries any.
    pub errors: Option<&'a dyn ErrorSource>,
}

impl std::fmt::Debug for ModelBinding<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBinding")
            .field("model_name", &self.model_name)
            .field("has_errors_source", &self.errors.is_some())
            .finish()
    }
}

impl<'a> ModelBinding<'a> {
    /// Binds a model by class name, without an error source.
    pub fn new(model_name: &'a str) -> Self {
        Self {
            model_name,
            errors: None,
        }
    }

    /// Attaches the model's error messages.
    #[must_use]
    pub fn errors(mut self, errors: &'a dyn ErrorSource) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// In-memory translations keyed by dotted path (`scope.key`).
#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    /// Creates an empty translation table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation under `scope.key`.
    #[must_use]
    pub fn with(mut self, scope: &str, key: &str, text: impl Into<String>) -> Self {
        self.insert(scope, key, text);
        self
    }

    /// Adds a translation under `scope.key`.
    pub fn insert(&mut self, scope: &str, key: &str, text: impl Into<String>) {
        self.entries.insert(format!("{scope}.{key}"), text.into());
    }

    /// Loads translations from a nested JSON document.
    ///
    /// ```
    /// use oxide_bootstrap_form::{LocalizationSource, Translations};
    ///
    /// let t = Translations::from_json(
    ///     r#"{"activerecord": {"help": {"user": {"email": "Work address"}}}}"#,
    /// ).unwrap();
    /// assert_eq!(
    ///     t.lookup("email", "activerecord.help.user", None).unwrap(),
    ///     Some("Work address".to_string()),
    /// );
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let mut entries = HashMap::new();
        flatten(&value, String::new(), &mut entries);
        Ok(Self { entries })
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Null | Value::Array(_) => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}

impl LocalizationSource for Translations {
    fn lookup(&self, key: &str, scope: &str, default: Option<&str>) -> Result<Option<String>> {
        Ok(self
            .entries
            .get(&format!("{scope}.{key}"))
            .cloned()
            .or_else(|| default.map(str::to_string)))
    }
}
