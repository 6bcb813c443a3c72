//! Form-group composition: the wrapper every field helper goes through.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Span};
use tracing::debug;

use crate::context::FormContext;
use crate::error::{FormError, Result};
use crate::help::HelpTextResolver;
use crate::inspect::ErrorStateInspector;
use crate::label::{LabelGenerator, LabelSpec, HIDE_CLASS};
use crate::layout::{LayoutDecision, LayoutResolver};
use crate::options::{FieldOptions, HelpOption, LabelOption, DEFAULT_CONTROL_CLASS};
use crate::source::{LocalizationSource, ModelBinding};
use crate::widgets::{is_attribute_name, HtmlAttrs};

/// Class of every group container.
pub const GROUP_CLASS: &str = "form-group";
/// Class added to the container when an icon is shown.
pub const FEEDBACK_CLASS: &str = "has-feedback";

/// Presentation options taken out of [`FieldOptions`] before the raw
/// renderer sees anything.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Presentation {
    label: LabelOption,
    hide_label: bool,
    help: HelpOption,
    icon: Option<String>,
    wrapper_class: Option<String>,
    wrapper: HtmlAttrs,
    decision: LayoutDecision,
}

/// Wraps raw field markup in a Bootstrap form group.
#[derive(Debug, Clone, Copy)]
pub struct FieldGroupComposer<'a> {
    context: &'a FormContext,
    errors: ErrorStateInspector<'a>,
    layouts: LayoutResolver<'a>,
    help: HelpTextResolver<'a>,
    labels: LabelGenerator<'a>,
}

impl<'a> FieldGroupComposer<'a> {
    /// Creates a composer for one form.
    pub fn new(
        context: &'a FormContext,
        object_name: Option<&'a str>,
        model: Option<ModelBinding<'a>>,
        i18n: Option<&'a dyn LocalizationSource>,
    ) -> Self {
        let errors = ErrorStateInspector::new(model.and_then(|m| m.errors));
        let model_name = model.map(|m| m.model_name);
        Self {
            context,
            errors,
            layouts: LayoutResolver::new(context),
            help: HelpTextResolver::new(context, errors, model_name, i18n),
            labels: LabelGenerator::new(context, errors, object_name, model_name, i18n),
        }
    }

    /// Returns the label generator used for group labels.
    pub fn labels(&self) -> &LabelGenerator<'a> {
        &self.labels
    }

    /// Returns the error state of the bound model.
    pub fn errors(&self) -> &ErrorStateInspector<'a> {
        &self.errors
    }

    /// Composes the group of one field.
    ///
    /// `render_raw` receives the attributes left after every presentation
    /// option has been removed, with the control class merged into `class`.
    /// Any error it returns aborts the whole group, as does a wrapper
    /// attribute whose name is not a valid HTML attribute name.
    ///
    /// ```
    /// use oxide_bootstrap_form::{FieldGroupComposer, FieldOptions, FormContext};
    ///
    /// let ctx = FormContext::new();
    /// let composer = FieldGroupComposer::new(&ctx, None, None, None);
    /// let html = composer
    ///     .build_group("email", FieldOptions::new(), |attrs| {
    ///         Ok(format!(r#"<input class="{}">"#, attrs.get("class").unwrap()))
    ///     })
    ///     .unwrap();
    /// assert!(html.contains("form-group"));
    /// assert!(html.contains(r#"<input class="form-control">"#));
    /// ```
    pub fn build_group<F>(&self, field: &str, options: FieldOptions, render_raw: F) -> Result<String>
    where
        F: FnOnce(&HtmlAttrs) -> Result<String>,
    {
        let (presentation, attrs) = self.normalize(field, options);
        let decision = &presentation.decision;
        debug!(field, layout = %decision.layout(), "composing form group");

        let container_class = [
            Some(GROUP_CLASS),
            self.errors.error_class(field),
            presentation.icon.as_ref().map(|_| FEEDBACK_CLASS),
            presentation.wrapper_class.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        let label = if presentation.label.is_shown() {
            let spec = LabelSpec {
                text: presentation.label.text().map(str::to_string),
                class: presentation.hide_label.then(|| HIDE_CLASS.to_string()),
                for_id: attrs.get("id").cloned(),
            };
            Some(self.labels.generate(field, &spec, decision)?)
        } else {
            None
        };

        let mut control = render_raw(&attrs)?;
        if let Some(help) = self.help.resolve(field, &presentation.help)? {
            control.push_str(&help);
        }
        if let Some(icon) = &presentation.icon {
            control.push_str(&icon_markup(icon));
        }

        if let Some(class) = decision.control_wrapper_class(label.is_some()) {
            control = Element::<Div>::new().class(&class).raw(&control).render();
        }

        let mut container = Element::<Div>::new().class(&container_class);
        for (key, value) in presentation.wrapper.iter() {
            if key == "class" {
                continue;
            }
            if !is_attribute_name(key) {
                return Err(FormError::InvalidAttribute(key.clone()));
            }
            container = container.attr(key.clone(), value);
        }

        Ok(container
            .raw(label.unwrap_or_default())
            .raw(&control)
            .render())
    }

    fn normalize(&self, field: &str, options: FieldOptions) -> (Presentation, HtmlAttrs) {
        let FieldOptions {
            label,
            help,
            icon,
            hide_label,
            wrapper_class,
            wrapper,
            label_col,
            control_col,
            layout,
            control_class,
            html,
            ..
        } = options;

        let mut attrs = html;
        let control_class = control_class.unwrap_or_else(|| DEFAULT_CONTROL_CLASS.to_string());
        let class = [Some(control_class.as_str()), attrs.get("class").map(String::as_str)]
            .into_iter()
            .flatten()
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if class.is_empty() {
            attrs.remove("class");
        } else {
            attrs.set("class", class);
        }

        if self.context.acts_like_form_tag() {
            attrs.set_default("name", field);
            attrs.set_default("id", field);
        }

        let decision = self
            .layouts
            .resolve(layout, label_col.as_deref(), control_col.as_deref());

        let presentation = Presentation {
            label,
            hide_label,
            help,
            icon,
            wrapper_class,
            wrapper,
            decision,
        };
        (presentation, attrs)
    }
}

fn icon_markup(icon: &str) -> String {
    Element::<Span>::new()
        .class(&format!("glyphicon glyphicon-{icon} form-control-feedback"))
        .render()
}
