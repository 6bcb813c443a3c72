//! Effective layout and grid columns of a group.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::FormContext;
use crate::options::Layout;

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)$").expect("Invalid column size regex"));

/// The resolved layout of one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutDecision {
    /// Stacked label and control.
    Vertical,
    /// Grid columns for label and control.
    Horizontal {
        /// Class of the label column.
        label_col: String,
        /// Class of the control column.
        control_col: String,
    },
    /// Compact layout.
    Inline,
}

impl LayoutDecision {
    /// Returns the plain layout mode.
    pub fn layout(&self) -> Layout {
        match self {
            Self::Vertical => Layout::Vertical,
            Self::Horizontal { .. } => Layout::Horizontal,
            Self::Inline => Layout::Inline,
        }
    }

    /// Returns whether the group uses grid columns.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal { .. })
    }

    /// Returns the label column class, for horizontal groups.
    pub fn label_col(&self) -> Option<&str> {
        match self {
            Self::Horizontal { label_col, .. } => Some(label_col),
            _ => None,
        }
    }

    /// Returns the control wrapper class for horizontal groups.
    ///
    /// Without a label the control is shifted by the label width.
    pub fn control_wrapper_class(&self, has_label: bool) -> Option<String> {
        let Self::Horizontal {
            label_col,
            control_col,
        } = self
        else {
            return None;
        };
        let mut class = control_col.clone();
        if !has_label {
            if let Some(offset) = label_offset_class(label_col) {
                class.push(' ');
                class.push_str(&offset);
            }
        }
        Some(class)
    }
}

/// A field-level layout wins over the form layout.
pub fn resolve_layout(field: Option<Layout>, form: Layout) -> Layout {
    field.unwrap_or(form)
}

/// Returns the explicit control column or the form default.
pub fn control_column(explicit: Option<&str>, form: &str) -> String {
    explicit.unwrap_or(form).to_string()
}

/// Derives the offset class from a label column's trailing size.
///
/// ```
/// use oxide_bootstrap_form::layout::label_offset_class;
///
/// assert_eq!(label_offset_class("col-sm-4").as_deref(), Some("col-sm-offset-4"));
/// assert_eq!(label_offset_class("col-sm-auto"), None);
/// ```
pub fn label_offset_class(label_col: &str) -> Option<String> {
    TRAILING_DIGITS
        .captures(label_col.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|size| format!("col-sm-offset-{}", size.as_str()))
}

/// Resolves group layouts against one form context.
#[derive(Debug, Clone, Copy)]
pub struct LayoutResolver<'a> {
    context: &'a FormContext,
}

impl<'a> LayoutResolver<'a> {
    /// Creates a resolver for a form.
    pub fn new(context: &'a FormContext) -> Self {
        Self { context }
    }

    /// Resolves the layout of a group from its overrides.
    pub fn resolve(
        &self,
        layout: Option<Layout>,
        label_col: Option<&str>,
        control_col: Option<&str>,
    ) -> LayoutDecision {
        match resolve_layout(layout, self.context.layout()) {
            Layout::Vertical => LayoutDecision::Vertical,
            Layout::Inline => LayoutDecision::Inline,
            Layout::Horizontal => LayoutDecision::Horizontal {
                label_col: label_col.unwrap_or(self.context.label_col()).to_string(),
                control_col: control_column(control_col, self.context.control_col()),
            },
        }
    }
}
