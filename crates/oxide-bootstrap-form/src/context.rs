//! Form-level configuration shared by every group of one form.

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::Result;
use crate::options::Layout;

/// Label column used when the form does not set one.
pub const DEFAULT_LABEL_COL: &str = "col-sm-2";
/// Control column used when the form does not set one.
pub const DEFAULT_CONTROL_COL: &str = "col-sm-10";

/// Per-form settings, fixed for the duration of a render.
///
/// ```
/// use oxide_bootstrap_form::{FormContext, Layout};
///
/// let ctx = FormContext::from_json(
///     r#"{"layout": "horizontal", "label_col": "col-sm-3", "control_col": "col-sm-9"}"#,
/// ).unwrap();
/// assert_eq!(ctx.layout(), Layout::Horizontal);
/// assert_eq!(ctx.label_col(), "col-sm-3");
/// assert!(ctx.inline_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormContext {
    #[serde(deserialize_with = "lenient_layout")]
    layout: Layout,
    label_col: String,
    control_col: String,
    label_errors: bool,
    inline_errors: Option<bool>,
    acts_like_form_tag: bool,
}

impl Default for FormContext {
    fn default() -> Self {
        Self {
            layout: Layout::Vertical,
            label_col: DEFAULT_LABEL_COL.to_string(),
            control_col: DEFAULT_CONTROL_COL.to_string(),
            label_errors: false,
            inline_errors: None,
            acts_like_form_tag: false,
        }
    }
}

fn lenient_layout<'de, D>(deserializer: D) -> std::result::Result<Layout, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(match token {
        None => Layout::default(),
        Some(token) => token.parse().unwrap_or_else(|err| {
            warn!(%err, "falling back to vertical layout");
            Layout::default()
        }),
    })
}

/// Overrides applied when deriving the context of a nested object form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedOptions {
    /// Layout of the nested groups.
    pub layout: Option<Layout>,
    /// Label column of the nested groups.
    pub label_col: Option<String>,
    /// Control column of the nested groups.
    pub control_col: Option<String>,
    /// Append errors to labels.
    pub label_errors: Option<bool>,
    /// Show errors as help blocks.
    pub inline_errors: Option<bool>,
}

impl FormContext {
    /// Creates a vertical form context with default columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a context from JSON; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the form layout.
    #[must_use]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the default label column.
    #[must_use]
    pub fn with_label_col(mut self, class: impl Into<String>) -> Self {
        self.label_col = class.into();
        self
    }

    /// Sets the default control column.
    #[must_use]
    pub fn with_control_col(mut self, class: impl Into<String>) -> Self {
        self.control_col = class.into();
        self
    }

    /// Appends error messages to labels.
    #[must_use]
    pub fn with_label_errors(mut self, enabled: bool) -> Self {
        self.label_errors = enabled;
        self
    }

    /// Shows error messages as help blocks.
    #[must_use]
    pub fn with_inline_errors(mut self, enabled: bool) -> Self {
        self.inline_errors = Some(enabled);
        self
    }

    /// Treats field names as plain tag names instead of object attributes.
    #[must_use]
    pub fn acting_like_form_tag(mut self) -> Self {
        self.acts_like_form_tag = true;
        self
    }

    /// Returns the form layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the default label column.
    pub fn label_col(&self) -> &str {
        &self.label_col
    }

    /// Returns the default control column.
    pub fn control_col(&self) -> &str {
        &self.control_col
    }

    /// Returns whether errors are appended to labels.
    pub fn label_errors(&self) -> bool {
        self.label_errors
    }

    /// Returns whether errors are shown as help blocks.
    ///
    /// Unless set explicitly this is the opposite of [`Self::label_errors`].
    pub fn inline_errors(&self) -> bool {
        self.inline_errors.unwrap_or(!self.label_errors)
    }

    /// Returns whether the form behaves like a standalone tag form.
    pub fn acts_like_form_tag(&self) -> bool {
        self.acts_like_form_tag
    }

    /// Derives the context of a nested object form.
    #[must_use]
    pub fn nested(&self, overrides: &NestedOptions) -> Self {
        Self {
            layout: overrides.layout.unwrap_or(self.layout),
            label_col: overrides
                .label_col
                .clone()
                .unwrap_or_else(|| self.label_col.clone()),
            control_col: overrides
                .control_col
                .clone()
                .unwrap_or_else(|| self.control_col.clone()),
            label_errors: overrides.label_errors.unwrap_or(self.label_errors),
            inline_errors: overrides.inline_errors.or(self.inline_errors),
            acts_like_form_tag: self.acts_like_form_tag,
        }
    }
}
