//! Error state of a field, read from the bound model.

use crate::source::ErrorSource;

/// Error class added to a group container.
pub const ERROR_CLASS: &str = "has-error";

/// Reads a field's error state from an optional error source.
#[derive(Clone, Copy, Default)]
pub struct ErrorStateInspector<'a> {
    source: Option<&'a dyn ErrorSource>,
}

impl std::fmt::Debug for ErrorStateInspector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorStateInspector")
            .field("bound", &self.source.is_some())
            .finish()
    }
}

impl<'a> ErrorStateInspector<'a> {
    /// Creates an inspector; `None` means every field is error free.
    pub fn new(source: Option<&'a dyn ErrorSource>) -> Self {
        Self { source }
    }

    /// Returns whether the field has at least one message.
    pub fn has_error(&self, field: &str) -> bool {
        !field.is_empty() && !self.messages(field).is_empty()
    }

    /// Returns the field's messages joined with `", "`.
    pub fn error_messages(&self, field: &str) -> String {
        self.messages(field).join(", ")
    }

    /// Returns [`ERROR_CLASS`] when the field has an error.
    pub fn error_class(&self, field: &str) -> Option<&'static str> {
        self.has_error(field).then_some(ERROR_CLASS)
    }

    fn messages(&self, field: &str) -> Vec<String> {
        self.source
            .map(|source| source.messages_for(field))
            .unwrap_or_default()
    }
}
