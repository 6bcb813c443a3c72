//! Per-field presentation options.
//!
//! Everything here except [`FieldOptions::html`] is consumed by the
//! group composer and never reaches the raw field renderer.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::warn;

use crate::error::FormError;
use crate::widgets::HtmlAttrs;

/// Class handed to the raw renderer when no control class is given.
pub const DEFAULT_CONTROL_CLASS: &str = "form-control";

/// Layout mode of a form or a single group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Label stacked above the control.
    #[default]
    Vertical,
    /// Label and control side by side in grid columns.
    Horizontal,
    /// Compact single-line form.
    Inline,
}

impl FromStr for Layout {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "inline" => Ok(Self::Inline),
            _ => Err(FormError::InvalidLayout(s.to_string())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Inline => "inline",
        })
    }
}

/// Whether and how a group renders its label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LabelOption {
    /// No label element.
    #[default]
    None,
    /// A label with the field's human name.
    Default,
    /// A label with explicit text.
    Text(String),
}

impl LabelOption {
    /// Returns whether a label element is rendered.
    pub fn is_shown(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the explicit text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<bool> for LabelOption {
    fn from(shown: bool) -> Self {
        if shown {
            Self::Default
        } else {
            Self::None
        }
    }
}

/// Help text of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HelpOption {
    /// Fall back to the localized help text.
    #[default]
    Absent,
    /// Explicit help text.
    Text(String),
    /// No help text, even if a localized one exists.
    Suppressed,
}

/// Options of a single field group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Label presence and text.
    pub label: LabelOption,
    /// Help text.
    pub help: HelpOption,
    /// Feedback icon name (e.g. `ok` for `glyphicon-ok`).
    pub icon: Option<String>,
    /// Keep the label for screen readers only.
    pub hide_label: bool,
    /// Extra class on the group container.
    pub wrapper_class: Option<String>,
    /// Extra container attributes; computed ones always win.
    pub wrapper: HtmlAttrs,
    /// Label column class for horizontal layout.
    pub label_col: Option<String>,
    /// Control column class for horizontal layout.
    pub control_col: Option<String>,
    /// Layout override; `None` inherits the form layout.
    pub layout: Option<Layout>,
    /// Control class; `None` means [`DEFAULT_CONTROL_CLASS`], empty means none.
    pub control_class: Option<String>,
    /// Render checkboxes and radios inline.
    pub inline: bool,
    /// Submit the control as an array member.
    pub multiple: bool,
    /// Checked state of a checkbox or radio button.
    pub checked: Option<bool>,
    /// Attributes passed through to the raw renderer.
    pub html: HtmlAttrs,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a label with the field's human name.
    #[must_use]
    pub fn with_label(mut self) -> Self {
        self.label = LabelOption::Default;
        self
    }

    /// Renders a label with explicit text.
    #[must_use]
    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.label = LabelOption::Text(text.into());
        self
    }

    /// Sets explicit help text.
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = HelpOption::Text(text.into());
        self
    }

    /// Suppresses help text.
    #[must_use]
    pub fn no_help(mut self) -> Self {
        self.help = HelpOption::Suppressed;
        self
    }

    /// Sets the feedback icon.
    #[must_use]
    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    /// Keeps the label for screen readers only.
    #[must_use]
    pub fn hide_label(mut self) -> Self {
        self.hide_label = true;
        self
    }

    /// Adds a class to the group container.
    #[must_use]
    pub fn wrapper_class(mut self, class: impl Into<String>) -> Self {
        self.wrapper_class = Some(class.into());
        self
    }

    /// Adds a container attribute.
    #[must_use]
    pub fn wrapper_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.wrapper.set(key, value);
        self
    }

    /// Sets the label column class.
    #[must_use]
    pub fn label_col(mut self, class: impl Into<String>) -> Self {
        self.label_col = Some(class.into());
        self
    }

    /// Sets the control column class.
    #[must_use]
    pub fn control_col(mut self, class: impl Into<String>) -> Self {
        self.control_col = Some(class.into());
        self
    }

    /// Overrides the form layout.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Overrides the form layout from a token; unknown tokens inherit.
    #[must_use]
    pub fn layout_token(mut self, token: &str) -> Self {
        match token.parse() {
            Ok(layout) => self.layout = Some(layout),
            Err(err) => {
                warn!(%err, "ignoring layout override, inheriting form layout");
                self.layout = None;
            }
        }
        self
    }

    /// Replaces the default control class.
    #[must_use]
    pub fn control_class(mut self, class: impl Into<String>) -> Self {
        self.control_class = Some(class.into());
        self
    }

    /// Drops the control class entirely.
    #[must_use]
    pub fn no_control_class(mut self) -> Self {
        self.control_class = Some(String::new());
        self
    }

    /// Renders checkboxes and radios inline.
    #[must_use]
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Submits the control as an array member.
    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Sets the checked state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Sets a pass-through attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.set(key, value);
        self
    }

    /// Sets the pass-through `class` attribute.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.html.set("class", class);
        self
    }
}
