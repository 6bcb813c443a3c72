//! Error types for form-group rendering.

use std::collections::HashMap;
use thiserror::Error;

use crate::source::ErrorSource;

/// Form rendering errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The raw field renderer failed.
    #[error("failed to render field {field}: {message}")]
    Render { field: String, message: String },

    /// The localization source failed.
    #[error("localization lookup failed for {key}: {message}")]
    Localization { key: String, message: String },

    /// A layout token could not be parsed.
    #[error("unknown layout: {0}")]
    InvalidLayout(String),

    /// A wrapper attribute name is not a valid HTML attribute name.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttribute(String),

    /// Form configuration could not be parsed.
    #[error("invalid form configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FormError {
    /// Creates a render error for a field.
    pub fn render(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Render {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error messages of a bound object, keyed by field.
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    /// Messages keyed by field name, in insertion order per field.
    pub errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Creates an empty error collection.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds a message for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder method to add a message.
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.values().filter(|m| !m.is_empty()).count()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }
}

impl ErrorSource for FieldErrors {
    fn messages_for(&self, field: &str) -> Vec<String> {
        self.errors.get(field).cloned().unwrap_or_default()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form rendering.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_preserve_order() {
        let errors = FieldErrors::new()
            .with("email", "can't be blank")
            .with("email", "is invalid");

        assert_eq!(
            errors.messages_for("email"),
            vec!["can't be blank".to_string(), "is invalid".to_string()]
        );
        assert!(errors.messages_for("name").is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_message_list_counts_as_no_error() {
        let mut errors = FieldErrors::new();
        errors.errors.insert("email".to_string(), Vec::new());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_render_error_display() {
        let err = FormError::render("email", "boom");
        assert_eq!(err.to_string(), "failed to render field email: boom");
    }
}
