#![allow(dead_code)]

use oxide_bootstrap_form::{
    Choice, ChoiceGroup, FormError, HtmlAttrs, InputKind, LocalizationSource, RawFieldRenderer, Result,
    Translations,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: u32,
    pub name: &'static str,
}

pub fn roles() -> Vec<Role> {
    vec![
        Role { id: 1, name: "Admin" },
        Role { id: 2, name: "Editor" },
        Role { id: 3, name: "Viewer" },
    ]
}

pub fn role_id(role: &Role) -> String {
    role.id.to_string()
}

pub fn role_name(role: &Role) -> String {
    role.name.to_string()
}

pub fn translations() -> Translations {
    Translations::from_json(
        r#"{
            "activerecord": {
                "help": {
                    "admin_user": {"email": "We never share your email"},
                    "adminuser": {
                        "email": "Legacy email help",
                        "nickname": "Shown to other users"
                    }
                },
                "attributes": {
                    "admin_user": {"email": "E-mail address"}
                }
            }
        }"#,
    )
    .unwrap_or_else(|e| panic!("fixture translations must parse: {e}"))
}

/// A renderer whose every call fails.
pub struct FailingRenderer;

impl RawFieldRenderer for FailingRenderer {
    fn render_input(&self, _kind: &InputKind, name: &str, _attrs: &HtmlAttrs) -> Result<String> {
        Err(FormError::render(name, "renderer unavailable"))
    }

    fn render_select(&self, name: &str, _choices: &[Choice], _attrs: &HtmlAttrs) -> Result<String> {
        Err(FormError::render(name, "renderer unavailable"))
    }

    fn render_grouped_select(
        &self,
        name: &str,
        _groups: &[ChoiceGroup],
        _attrs: &HtmlAttrs,
    ) -> Result<String> {
        Err(FormError::render(name, "renderer unavailable"))
    }
}

/// A localization source whose every lookup fails.
pub struct FailingTranslations;

impl LocalizationSource for FailingTranslations {
    fn lookup(&self, key: &str, _scope: &str, _default: Option<&str>) -> Result<Option<String>> {
        Err(FormError::Localization {
            key: key.to_string(),
            message: "backend offline".to_string(),
        })
    }
}

/// Returns the position of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("expected {needle:?} in {haystack}"))
}
