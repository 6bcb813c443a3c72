//! # oxide-bootstrap-form
//!
//! Bootstrap 3 form groups around raw field markup.
//!
//! This crate provides:
//! - A form-group composer that adds labels, grid columns, error state,
//!   help text and feedback icons to whatever a field renderer produces
//! - Vertical, horizontal and inline layouts, per form or per field
//! - Help text from explicit options or translations
//! - Checkbox and radio collections with checked-state resolution
//! - A form builder with one helper per field kind
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap_form::{
//!     FieldErrors, FieldOptions, FormBuilder, FormContext, Layout,
//!     ModelBinding, StandardRenderer,
//! };
//!
//! let context = FormContext::new()
//!     .with_layout(Layout::Horizontal)
//!     .with_label_col("col-sm-3")
//!     .with_control_col("col-sm-9");
//! let errors = FieldErrors::new().with("email", "is invalid");
//! let renderer = StandardRenderer::new();
//!
//! let form = FormBuilder::new(context, &renderer)
//!     .object("user")
//!     .bind(ModelBinding::new("User").errors(&errors));
//!
//! let html = form
//!     .email_field("email", FieldOptions::new().label("Email"))
//!     .unwrap();
//! assert!(html.contains("has-error"));
//! assert!(html.contains("col-sm-9"));
//! assert!(html.contains("is invalid"));
//! ```
//!
//! ## Composing Groups Directly
//!
//! Field-type helpers are thin adapters over
//! [`FieldGroupComposer::build_group`]. Any markup can be wrapped:
//!
//! ```rust
//! use oxide_bootstrap_form::{FieldGroupComposer, FieldOptions, FormContext, Layout};
//!
//! let context = FormContext::new()
//!     .with_layout(Layout::Horizontal)
//!     .with_label_col("col-sm-3")
//!     .with_control_col("col-sm-9");
//! let composer = FieldGroupComposer::new(&context, None, None, None);
//!
//! let html = composer
//!     .build_group("terms", FieldOptions::new(), |_| Ok("<p>Terms</p>".to_string()))
//!     .unwrap();
//! assert!(html.contains("col-sm-9 col-sm-offset-3"));
//! ```

pub mod collection;
mod context;
mod error;
pub mod fields;
mod form;
mod group;
mod help;
pub mod inflect;
mod inspect;
mod label;
pub mod layout;
mod options;
mod source;
pub mod widgets;

pub use collection::Checked;
pub use context::{FormContext, NestedOptions, DEFAULT_CONTROL_COL, DEFAULT_LABEL_COL};
pub use error::{FieldErrors, FormError, Result};
pub use fields::{DisplayPolicy, FieldKind};
pub use form::FormBuilder;
pub use group::{FieldGroupComposer, FEEDBACK_CLASS, GROUP_CLASS};
pub use help::{HelpLookup, HelpScope, HelpTextResolver, HELP_CLASS};
pub use inspect::{ErrorStateInspector, ERROR_CLASS};
pub use label::{LabelGenerator, LabelSpec, HIDE_CLASS, LABEL_CLASS};
pub use layout::{LayoutDecision, LayoutResolver};
pub use options::{FieldOptions, HelpOption, LabelOption, Layout, DEFAULT_CONTROL_CLASS};
pub use source::{ErrorSource, LocalizationSource, ModelBinding, Translations};
pub use widgets::{
    Choice, ChoiceGroup, HtmlAttrs, InputKind, RawFieldRenderer, StandardRenderer,
};
