//! Field kinds the form builder wraps, and how each one is displayed.

use crate::widgets::InputKind;

/// How a field's raw markup sits inside its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPolicy {
    /// Raw markup as is.
    Plain,
    /// Raw markup inside a `<div>` with the given class.
    DateWidget(&'static str),
}

/// Single-control field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Number,
    Password,
    Phone,
    Range,
    Search,
    Telephone,
    TextArea,
    Text,
    Url,
    DateSelect,
    TimeSelect,
    DatetimeSelect,
    File,
}

impl FieldKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Email,
        Self::Number,
        Self::Password,
        Self::Phone,
        Self::Range,
        Self::Search,
        Self::Telephone,
        Self::TextArea,
        Self::Text,
        Self::Url,
        Self::DateSelect,
        Self::TimeSelect,
        Self::DatetimeSelect,
        Self::File,
    ];

    /// Returns the raw control to render.
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Input("email"),
            Self::Number => InputKind::Input("number"),
            Self::Password => InputKind::Input("password"),
            Self::Phone | Self::Telephone => InputKind::Input("tel"),
            Self::Range => InputKind::Input("range"),
            Self::Search => InputKind::Input("search"),
            Self::TextArea => InputKind::TextArea,
            Self::Text => InputKind::Input("text"),
            Self::Url => InputKind::Input("url"),
            Self::DateSelect => InputKind::Input("date"),
            Self::TimeSelect => InputKind::Input("time"),
            Self::DatetimeSelect => InputKind::Input("datetime-local"),
            Self::File => InputKind::Input("file"),
        }
    }

    /// Returns how the raw markup is placed in the group.
    pub fn display(self) -> DisplayPolicy {
        match self {
            Self::DateSelect => {
                DisplayPolicy::DateWidget("rails-bootstrap-forms-date-select")
            }
            Self::TimeSelect => {
                DisplayPolicy::DateWidget("rails-bootstrap-forms-time-select")
            }
            Self::DatetimeSelect => {
                DisplayPolicy::DateWidget("rails-bootstrap-forms-datetime-select")
            }
            _ => DisplayPolicy::Plain,
        }
    }

    /// Returns whether the group gets the default control class.
    pub fn uses_control_class(self) -> bool {
        !matches!(self, Self::File)
    }
}
