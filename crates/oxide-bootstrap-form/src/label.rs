//! Label markup of a group.

use ironhtml::typed::Element;
use ironhtml_elements::Label;

use crate::context::FormContext;
use crate::error::Result;
use crate::inflect::{humanize, underscore};
use crate::inspect::ErrorStateInspector;
use crate::layout::LayoutDecision;
use crate::source::LocalizationSource;
use crate::widgets::field_id;

/// Class every group label carries.
pub const LABEL_CLASS: &str = "control-label";
/// Class of labels kept for screen readers only.
pub const HIDE_CLASS: &str = "sr-only";

/// What the caller wants from a label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSpec {
    /// Explicit text; the field's human name otherwise.
    pub text: Option<String>,
    /// Extra class, e.g. [`HIDE_CLASS`].
    pub class: Option<String>,
    /// Id of the labelled control; derived from the field otherwise.
    pub for_id: Option<String>,
}

/// Builds `<label>` elements.
#[derive(Clone, Copy)]
pub struct LabelGenerator<'a> {
    context: &'a FormContext,
    errors: ErrorStateInspector<'a>,
    object_name: Option<&'a str>,
    model_name: Option<&'a str>,
    i18n: Option<&'a dyn LocalizationSource>,
}

impl std::fmt::Debug for LabelGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelGenerator")
            .field("object_name", &self.object_name)
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl<'a> LabelGenerator<'a> {
    /// Creates a label generator.
    pub fn new(
        context: &'a FormContext,
        errors: ErrorStateInspector<'a>,
        object_name: Option<&'a str>,
        model_name: Option<&'a str>,
        i18n: Option<&'a dyn LocalizationSource>,
    ) -> Self {
        Self {
            context,
            errors,
            object_name,
            model_name,
            i18n,
        }
    }

    /// Returns the display name of a field.
    ///
    /// Uses `activerecord.attributes.<model>.<field>` when a model and a
    /// localization source are bound, the humanized field name otherwise.
    pub fn human_name(&self, field: &str) -> Result<String> {
        if let (Some(model), Some(i18n)) = (self.model_name, self.i18n) {
            let scope = format!("activerecord.attributes.{}", underscore(model));
            if let Some(text) = i18n.lookup(field, &scope, None)? {
                if !text.trim().is_empty() {
                    return Ok(text);
                }
            }
        }
        Ok(humanize(field))
    }

    /// Returns the id a field's control gets when none is given.
    pub fn default_for(&self, field: &str, suffix: Option<&str>) -> String {
        if self.context.acts_like_form_tag() {
            field_id(None, field, suffix)
        } else {
            field_id(self.object_name, field, suffix)
        }
    }

    /// Renders the label of a field.
    pub fn generate(&self, field: &str, spec: &LabelSpec, layout: &LayoutDecision) -> Result<String> {
        let classes = [spec.class.as_deref(), Some(LABEL_CLASS), layout.label_col()]
            .into_iter()
            .flatten()
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        let for_id = spec
            .for_id
            .clone()
            .unwrap_or_else(|| self.default_for(field, None));

        let mut text = match &spec.text {
            Some(text) => text.clone(),
            None => self.human_name(field)?,
        };
        if self.context.label_errors() && self.errors.has_error(field) {
            text.push(' ');
            text.push_str(&self.errors.error_messages(field));
        }

        Ok(Element::<Label>::new()
            .attr("for", &for_id)
            .class(&classes)
            .text(&text)
            .render())
    }
}
