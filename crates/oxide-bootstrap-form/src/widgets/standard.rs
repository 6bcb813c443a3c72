//! HTML5 raw field renderer.

use super::{
    field_id, field_name, html_escape, Choice, ChoiceGroup, HtmlAttrs, InputKind, RawFieldRenderer,
};
use crate::error::Result;

/// Renders plain HTML5 controls, naming them after an optional object.
///
/// An explicit `name` or `id` attribute always wins over the scoped one.
/// [`FormBuilder`](crate::FormBuilder) always passes both, so the object
/// name only matters when the renderer is used on its own.
#[derive(Debug, Clone, Default)]
pub struct StandardRenderer {
    /// Object name used to scope input names and ids (`user[email]`) when
    /// the caller leaves them out.
    pub object_name: Option<String>,
}

impl StandardRenderer {
    /// Creates a renderer for unscoped fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer scoped to an object name, for standalone use.
    pub fn scoped(object_name: impl Into<String>) -> Self {
        Self {
            object_name: Some(object_name.into()),
        }
    }

    fn name_and_id(
        &self,
        name: &str,
        attrs: &HtmlAttrs,
        multiple: bool,
        id_suffix: Option<&str>,
    ) -> (String, String) {
        let object = self.object_name.as_deref();
        let input_name = attrs
            .get("name")
            .cloned()
            .unwrap_or_else(|| field_name(object, name, multiple));
        let id = attrs
            .get("id")
            .cloned()
            .unwrap_or_else(|| field_id(object, name, id_suffix));
        (input_name, id)
    }

    fn select_tag(&self, name: &str, attrs: &HtmlAttrs, options: &str) -> String {
        let multiple = attrs.contains("multiple");
        let (input_name, id) = self.name_and_id(name, attrs, multiple, None);
        format!(
            r#"<select name="{}" id="{}"{}>{options}</select>"#,
            html_escape(&input_name),
            html_escape(&id),
            extra_attrs(attrs, &["name", "id", "value"])
        )
    }
}

fn option_tags(choices: &[Choice], selected: Option<&String>) -> String {
    choices
        .iter()
        .map(|choice| {
            let selected_attr = if !choice.disabled && selected == Some(&choice.value) {
                " selected"
            } else {
                ""
            };
            let disabled_attr = if choice.disabled { " disabled" } else { "" };
            format!(
                r#"<option value="{}"{selected_attr}{disabled_attr}>{}</option>"#,
                html_escape(&choice.value),
                html_escape(&choice.text)
            )
        })
        .collect()
}

fn extra_attrs(attrs: &HtmlAttrs, skip: &[&str]) -> String {
    let rest = attrs.without(skip);
    if rest.is_empty() {
        String::new()
    } else {
        format!(" {}", rest.to_html())
    }
}

impl RawFieldRenderer for StandardRenderer {
    fn render_input(&self, kind: &InputKind, name: &str, attrs: &HtmlAttrs) -> Result<String> {
        let html = match kind {
            InputKind::Input(input_type) => {
                let (input_name, id) = self.name_and_id(name, attrs, false, None);
                format!(
                    r#"<input type="{input_type}" name="{}" id="{}"{}>"#,
                    html_escape(&input_name),
                    html_escape(&id),
                    extra_attrs(attrs, &["name", "id", "type"])
                )
            }
            InputKind::TextArea => {
                let (input_name, id) = self.name_and_id(name, attrs, false, None);
                let content = attrs.get("value").map(|v| html_escape(v)).unwrap_or_default();
                format!(
                    r#"<textarea name="{}" id="{}"{}>{content}</textarea>"#,
                    html_escape(&input_name),
                    html_escape(&id),
                    extra_attrs(attrs, &["name", "id", "value"])
                )
            }
            InputKind::CheckBox {
                checked_value,
                unchecked_value,
                multiple,
            } => {
                let suffix = multiple.then_some(checked_value.as_str());
                let (input_name, id) = self.name_and_id(name, attrs, *multiple, suffix);
                let hidden = unchecked_value
                    .as_ref()
                    .map(|v| {
                        format!(
                            r#"<input type="hidden" name="{}" value="{}">"#,
                            html_escape(&input_name),
                            html_escape(v)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"{hidden}<input type="checkbox" name="{}" id="{}" value="{}"{}>"#,
                    html_escape(&input_name),
                    html_escape(&id),
                    html_escape(checked_value),
                    extra_attrs(attrs, &["name", "id", "type", "value"])
                )
            }
            InputKind::RadioButton { value } => {
                let (input_name, id) = self.name_and_id(name, attrs, false, Some(value));
                format!(
                    r#"<input type="radio" name="{}" id="{}" value="{}"{}>"#,
                    html_escape(&input_name),
                    html_escape(&id),
                    html_escape(value),
                    extra_attrs(attrs, &["name", "id", "type", "value"])
                )
            }
            InputKind::Hidden { multiple } => {
                let (input_name, id) = self.name_and_id(name, attrs, *multiple, None);
                format!(
                    r#"<input type="hidden" name="{}" id="{}"{}>"#,
                    html_escape(&input_name),
                    html_escape(&id),
                    extra_attrs(attrs, &["name", "id", "type", "multiple"])
                )
            }
        };
        Ok(html)
    }

    fn render_select(&self, name: &str, choices: &[Choice], attrs: &HtmlAttrs) -> Result<String> {
        let options = option_tags(choices, attrs.get("value"));
        Ok(self.select_tag(name, attrs, &options))
    }

    fn render_grouped_select(
        &self,
        name: &str,
        groups: &[ChoiceGroup],
        attrs: &HtmlAttrs,
    ) -> Result<String> {
        let selected = attrs.get("value");
        let options: String = groups
            .iter()
            .map(|group| {
                format!(
                    r#"<optgroup label="{}">{}</optgroup>"#,
                    html_escape(&group.label),
                    option_tags(&group.choices, selected)
                )
            })
            .collect();
        Ok(self.select_tag(name, attrs, &options))
    }
}
