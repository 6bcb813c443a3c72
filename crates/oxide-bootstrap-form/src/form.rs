//! Form builder: per-field-kind helpers on top of the group composer.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Label};
use tracing::warn;

use crate::collection::{iterate, Checked};
use crate::context::{FormContext, NestedOptions};
use crate::error::Result;
use crate::fields::{DisplayPolicy, FieldKind};
use crate::group::FieldGroupComposer;
use crate::options::{FieldOptions, LabelOption};
use crate::source::{LocalizationSource, ModelBinding};
use crate::widgets::{
    field_id, field_name, html_escape, Choice, ChoiceGroup, HtmlAttrs, InputKind,
    RawFieldRenderer,
};

/// Renders the fields of one form.
///
/// ```
/// use oxide_bootstrap_form::{FieldOptions, FormBuilder, FormContext, StandardRenderer};
///
/// let renderer = StandardRenderer::new();
/// let form = FormBuilder::new(FormContext::new(), &renderer).object("user");
/// let html = form.email_field("email", FieldOptions::new().with_label()).unwrap();
/// assert!(html.contains(r#"name="user[email]""#));
/// assert!(html.contains(">Email</label>"));
/// ```
pub struct FormBuilder<'a> {
    context: FormContext,
    object_name: Option<String>,
    model: Option<ModelBinding<'a>>,
    i18n: Option<&'a dyn LocalizationSource>,
    renderer: &'a dyn RawFieldRenderer,
}

impl std::fmt::Debug for FormBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("context", &self.context)
            .field("object_name", &self.object_name)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl<'a> FormBuilder<'a> {
    /// Creates a builder for a form.
    pub fn new(context: FormContext, renderer: &'a dyn RawFieldRenderer) -> Self {
        Self {
            context,
            object_name: None,
            model: None,
            i18n: None,
            renderer,
        }
    }

    /// Scopes input names and ids to an object name.
    #[must_use]
    pub fn object(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = Some(object_name.into());
        self
    }

    /// Binds the model whose errors and translations the groups use.
    #[must_use]
    pub fn bind(mut self, model: ModelBinding<'a>) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the localization source.
    #[must_use]
    pub fn localization(mut self, i18n: &'a dyn LocalizationSource) -> Self {
        self.i18n = Some(i18n);
        self
    }

    /// Returns the form context.
    pub fn context(&self) -> &FormContext {
        &self.context
    }

    /// Returns a composer for this form's groups.
    pub fn composer(&self) -> FieldGroupComposer<'_> {
        FieldGroupComposer::new(&self.context, self.scope(), self.model, self.i18n)
    }

    fn scope(&self) -> Option<&str> {
        if self.context.acts_like_form_tag() {
            None
        } else {
            self.object_name.as_deref()
        }
    }

    fn scoped_attrs(
        &self,
        name: &str,
        mut attrs: HtmlAttrs,
        multiple: bool,
        suffix: Option<&str>,
    ) -> HtmlAttrs {
        let scope = self.scope();
        attrs.set_default("name", field_name(scope, name, multiple));
        attrs.set_default("id", field_id(scope, name, suffix));
        attrs
    }

    fn scoped(&self, name: &str, mut options: FieldOptions) -> FieldOptions {
        options.html = self.scoped_attrs(name, options.html, options.multiple, None);
        options
    }

    /// Renders a grouped field of the given kind.
    pub fn field(&self, kind: FieldKind, name: &str, mut options: FieldOptions) -> Result<String> {
        if !kind.uses_control_class() && options.control_class.is_none() {
            options.control_class = Some(String::new());
        }
        let input = kind.input_kind();
        let options = self.scoped(name, options);
        self.composer().build_group(name, options, |attrs| {
            let raw = self.renderer.render_input(&input, name, attrs)?;
            Ok(match kind.display() {
                DisplayPolicy::Plain => raw,
                DisplayPolicy::DateWidget(class) => {
                    Element::<Div>::new().class(class).raw(&raw).render()
                }
            })
        })
    }

    /// Renders an email field.
    pub fn email_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Email, name, options)
    }

    /// Renders a number field.
    pub fn number_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Number, name, options)
    }

    /// Renders a password field.
    pub fn password_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Password, name, options)
    }

    /// Renders a phone field.
    pub fn phone_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Phone, name, options)
    }

    /// Renders a range field.
    pub fn range_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Range, name, options)
    }

    /// Renders a search field.
    pub fn search_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Search, name, options)
    }

    /// Renders a telephone field.
    pub fn telephone_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Telephone, name, options)
    }

    /// Renders a text area.
    pub fn text_area(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::TextArea, name, options)
    }

    /// Renders a text field.
    pub fn text_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Text, name, options)
    }

    /// Renders a url field.
    pub fn url_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::Url, name, options)
    }

    /// Renders a date picker inside a date widget wrapper.
    pub fn date_select(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::DateSelect, name, options)
    }

    /// Renders a time picker inside a date widget wrapper.
    pub fn time_select(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::TimeSelect, name, options)
    }

    /// Renders a date and time picker inside a date widget wrapper.
    pub fn datetime_select(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::DatetimeSelect, name, options)
    }

    /// Renders a file field. No control class unless one is given.
    pub fn file_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        self.field(FieldKind::File, name, options)
    }

    fn select_options(&self, name: &str, mut options: FieldOptions) -> FieldOptions {
        if options.multiple {
            options.html.set("multiple", "multiple");
        } else {
            options.multiple = options.html.contains("multiple");
        }
        self.scoped(name, options)
    }

    /// Renders a grouped select.
    pub fn select(&self, name: &str, choices: &[Choice], options: FieldOptions) -> Result<String> {
        let options = self.select_options(name, options);
        self.composer().build_group(name, options, |attrs| {
            self.renderer.render_select(name, choices, attrs)
        })
    }

    /// Renders a grouped select whose choices come from a collection.
    pub fn collection_select<T, V, X>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
    ) -> Result<String>
    where
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        let choices: Vec<Choice> = collection
            .iter()
            .map(|item| Choice::new(value_of(item), text_of(item)))
            .collect();
        self.select(name, &choices, options)
    }

    /// Renders a grouped select with one `<optgroup>` per collection item.
    ///
    /// `items_of` gives the options of a group and `label_of` its label.
    #[allow(clippy::too_many_arguments)]
    pub fn grouped_collection_select<G, T, I, L, V, X>(
        &self,
        name: &str,
        collection: &[G],
        items_of: I,
        label_of: L,
        value_of: V,
        text_of: X,
        options: FieldOptions,
    ) -> Result<String>
    where
        I: Fn(&G) -> &[T],
        L: Fn(&G) -> String,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        let groups: Vec<ChoiceGroup> = collection
            .iter()
            .map(|group| {
                let choices = items_of(group)
                    .iter()
                    .map(|item| Choice::new(value_of(item), text_of(item)))
                    .collect();
                ChoiceGroup::new(label_of(group), choices)
            })
            .collect();
        let options = self.select_options(name, options);
        self.composer().build_group(name, options, |attrs| {
            self.renderer.render_grouped_select(name, &groups, attrs)
        })
    }

    /// Renders a grouped time zone select.
    ///
    /// Zones named in `priority` come first, in that order, followed by a
    /// disabled separator and then every other zone.
    pub fn time_zone_select(
        &self,
        name: &str,
        zones: &[Choice],
        priority: &[&str],
        options: FieldOptions,
    ) -> Result<String> {
        let choices = prioritize_zones(zones, priority);
        self.select(name, &choices, options)
    }

    /// Renders a labelled checkbox, outside any group.
    pub fn check_box(
        &self,
        name: &str,
        options: FieldOptions,
        checked_value: &str,
        unchecked_value: Option<&str>,
    ) -> Result<String> {
        let text = match &options.label {
            LabelOption::Text(text) => text.clone(),
            LabelOption::Default | LabelOption::None => {
                self.composer().labels().human_name(name)?
            }
        };
        let suffix = options.multiple.then_some(checked_value);
        let mut attrs = self.scoped_attrs(name, options.html, options.multiple, suffix);
        if options.checked == Some(true) {
            attrs.set("checked", "checked");
        }

        let kind = InputKind::CheckBox {
            checked_value: checked_value.to_string(),
            unchecked_value: unchecked_value.map(str::to_string),
            multiple: options.multiple,
        };
        let raw = self.renderer.render_input(&kind, name, &attrs)?;
        let for_id = attrs.get("id").cloned().unwrap_or_default();
        Ok(choice_label(&raw, &text, &for_id, options.inline, "checkbox"))
    }

    /// Renders a labelled radio button, outside any group.
    pub fn radio_button(&self, name: &str, value: &str, options: FieldOptions) -> Result<String> {
        let text = match &options.label {
            LabelOption::Text(text) => text.clone(),
            LabelOption::Default | LabelOption::None => {
                self.composer().labels().human_name(name)?
            }
        };
        let mut attrs = self.scoped_attrs(name, options.html, false, Some(value));
        if options.checked == Some(true) {
            attrs.set("checked", "checked");
        }

        let kind = InputKind::RadioButton {
            value: value.to_string(),
        };
        let raw = self.renderer.render_input(&kind, name, &attrs)?;
        let for_id = attrs.get("id").cloned().unwrap_or_default();
        Ok(choice_label(&raw, &text, &for_id, options.inline, "radio"))
    }

    /// Renders a hidden input, outside any group.
    pub fn hidden_field(&self, name: &str, options: FieldOptions) -> Result<String> {
        let attrs = self.scoped_attrs(name, options.html, options.multiple, None);
        self.renderer.render_input(
            &InputKind::Hidden {
                multiple: options.multiple,
            },
            name,
            &attrs,
        )
    }

    /// Renders one grouped checkbox per collection item.
    ///
    /// A hidden empty value precedes the group so that unchecking every
    /// box still submits the field.
    pub fn collection_check_boxes<T, V, X>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
        checked: Option<&Checked<T>>,
    ) -> Result<String>
    where
        T: PartialEq,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        let group = self.inputs_collection(
            name,
            collection,
            value_of,
            text_of,
            options,
            checked,
            |name, value, mut item| {
                item.multiple = true;
                self.check_box(name, item, value, None)
            },
        )?;
        let select_none =
            self.hidden_field(name, FieldOptions::new().attr("value", "").multiple())?;
        Ok(select_none + &group)
    }

    /// Renders one grouped radio button per collection item.
    pub fn collection_radio_buttons<T, V, X>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
        checked: Option<&Checked<T>>,
    ) -> Result<String>
    where
        T: PartialEq,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        self.inputs_collection(
            name,
            collection,
            value_of,
            text_of,
            options,
            checked,
            |name, value, item| self.radio_button(name, value, item),
        )
    }

    /// Renamed to [`Self::collection_check_boxes`].
    #[deprecated(note = "use `collection_check_boxes` instead")]
    pub fn check_boxes_collection<T, V, X>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
        checked: Option<&Checked<T>>,
    ) -> Result<String>
    where
        T: PartialEq,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        warn!("'check_boxes_collection' is deprecated, use 'collection_check_boxes' instead");
        self.collection_check_boxes(name, collection, value_of, text_of, options, checked)
    }

    /// Renamed to [`Self::collection_radio_buttons`].
    #[deprecated(note = "use `collection_radio_buttons` instead")]
    pub fn radio_buttons_collection<T, V, X>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
        checked: Option<&Checked<T>>,
    ) -> Result<String>
    where
        T: PartialEq,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
    {
        warn!("'radio_buttons_collection' is deprecated, use 'collection_radio_buttons' instead");
        self.collection_radio_buttons(name, collection, value_of, text_of, options, checked)
    }

    #[allow(clippy::too_many_arguments)]
    fn inputs_collection<T, V, X, R>(
        &self,
        name: &str,
        collection: &[T],
        value_of: V,
        text_of: X,
        options: FieldOptions,
        checked: Option<&Checked<T>>,
        render_one: R,
    ) -> Result<String>
    where
        T: PartialEq,
        V: Fn(&T) -> String,
        X: Fn(&T) -> String,
        R: FnMut(&str, &str, FieldOptions) -> Result<String>,
    {
        let base = FieldOptions {
            inline: options.inline,
            ..FieldOptions::default()
        };
        self.composer().build_group(name, options, |attrs| {
            let base = FieldOptions {
                html: attrs.clone(),
                ..base
            };
            let inputs = iterate(name, collection, value_of, text_of, &base, checked, render_one)?;
            Ok(inputs.concat())
        })
    }

    /// Wraps caller-supplied content in a group.
    pub fn form_group<F>(&self, name: &str, options: FieldOptions, content: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        self.composer().build_group(name, options, |_| content())
    }

    /// Renders the fields of a nested object with a derived context.
    pub fn fields_for<F>(
        &self,
        record_name: &str,
        nested: &NestedOptions,
        model: Option<ModelBinding<'a>>,
        body: F,
    ) -> Result<String>
    where
        F: FnOnce(&FormBuilder<'a>) -> Result<String>,
    {
        let object_name = match &self.object_name {
            Some(parent) => format!("{parent}[{record_name}]"),
            None => record_name.to_string(),
        };
        let child = FormBuilder {
            context: self.context.nested(nested),
            object_name: Some(object_name),
            model,
            i18n: self.i18n,
            renderer: self.renderer,
        };
        body(&child)
    }
}

fn prioritize_zones(zones: &[Choice], priority: &[&str]) -> Vec<Choice> {
    let is_priority = |zone: &Choice| priority.contains(&zone.value.as_str());
    let mut choices: Vec<Choice> = priority
        .iter()
        .filter_map(|value| zones.iter().find(|zone| zone.value == *value))
        .cloned()
        .collect();
    if !choices.is_empty() {
        choices.push(Choice::separator());
    }
    choices.extend(zones.iter().filter(|zone| !is_priority(zone)).cloned());
    choices
}

fn choice_label(raw: &str, text: &str, for_id: &str, inline: bool, kind: &str) -> String {
    let content = format!("{raw} {}", html_escape(text));
    let label = Element::<Label>::new().attr("for", for_id);
    if inline {
        label.class(&format!("{kind}-inline")).raw(&content).render()
    } else {
        let label = label.raw(&content).render();
        Element::<Div>::new().class(kind).raw(&label).render()
    }
}
