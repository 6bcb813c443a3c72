//! Repeated checkbox and radio inputs generated from a collection.

use crate::error::Result;
use crate::options::{FieldOptions, LabelOption};

/// What a collection input group should render as checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checked<T> {
    /// A single submitted value.
    Value(String),
    /// Several submitted values.
    Values(Vec<String>),
    /// A single collection item.
    Item(T),
    /// Several collection items.
    Items(Vec<T>),
}

impl<T: PartialEq> Checked<T> {
    /// Returns whether an item with the given value is checked.
    ///
    /// Rules are tried in order: equal value, contained value, equal item,
    /// contained item.
    pub fn matches(&self, value: &str, item: &T) -> bool {
        self.equals_value(value)
            || self.contains_value(value)
            || self.equals_item(item)
            || self.contains_item(item)
    }

    fn equals_value(&self, value: &str) -> bool {
        matches!(self, Self::Value(checked) if checked == value)
    }

    fn contains_value(&self, value: &str) -> bool {
        matches!(self, Self::Values(checked) if checked.iter().any(|v| v == value))
    }

    fn equals_item(&self, item: &T) -> bool {
        matches!(self, Self::Item(checked) if checked == item)
    }

    fn contains_item(&self, item: &T) -> bool {
        matches!(self, Self::Items(checked) if checked.contains(item))
    }
}

/// Renders one input per collection item, in collection order.
///
/// Each item gets a copy of `options` labelled with its text, without the
/// shared `class`, `id` and `name` attributes. When `checked` is given the
/// copy's checked state is resolved against the item.
///
/// ```
/// use oxide_bootstrap_form::collection::{iterate, Checked};
/// use oxide_bootstrap_form::FieldOptions;
///
/// let sizes = ["s", "m", "l"];
/// let checked = Checked::Value("m".to_string());
/// let html = iterate(
///     "size",
///     &sizes,
///     |s| s.to_string(),
///     |s| s.to_uppercase(),
///     &FieldOptions::new(),
///     Some(&checked),
///     |_, value, options| Ok(format!("{value}:{}", options.checked == Some(true))),
/// )
/// .unwrap();
/// assert_eq!(html, vec!["s:false", "m:true", "l:false"]);
/// ```
pub fn iterate<T, V, X, R>(
    field: &str,
    collection: &[T],
    value_of: V,
    text_of: X,
    options: &FieldOptions,
    checked: Option<&Checked<T>>,
    mut render_one: R,
) -> Result<Vec<String>>
where
    T: PartialEq,
    V: Fn(&T) -> String,
    X: Fn(&T) -> String,
    R: FnMut(&str, &str, FieldOptions) -> Result<String>,
{
    collection
        .iter()
        .map(|item| {
            let value = value_of(item);
            let mut item_options = options.clone();
            item_options.label = LabelOption::Text(text_of(item));
            item_options.control_class = None;
            item_options.html = options.html.without(&["class", "id", "name"]);
            if let Some(checked) = checked {
                item_options.checked = Some(checked.matches(&value, item));
            }
            render_one(field, &value, item_options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[derive(Debug, Clone, PartialEq)]
    struct Role {
        id: u32,
        name: &'static str,
    }

    fn roles() -> Vec<Role> {
        vec![
            Role { id: 1, name: "Admin" },
            Role { id: 2, name: "Editor" },
            Role { id: 3, name: "Viewer" },
        ]
    }

    fn checked_ids(checked: Option<&Checked<Role>>) -> Vec<String> {
        let out = iterate(
            "role_ids",
            &roles(),
            |r| r.id.to_string(),
            |r| r.name.to_string(),
            &FieldOptions::new(),
            checked,
            |_, value, options| {
                Ok(if options.checked == Some(true) {
                    value.to_string()
                } else {
                    String::new()
                })
            },
        )
        .unwrap();
        out.into_iter().filter(|v| !v.is_empty()).collect()
    }

    #[test]
    fn test_order_and_labels_are_preserved() {
        let mut seen = Vec::new();
        let out = iterate(
            "role_ids",
            &roles(),
            |r| r.id.to_string(),
            |r| r.name.to_string(),
            &FieldOptions::new().class("shared").attr("data-x", "1"),
            None,
            |name, value, options| {
                assert_eq!(name, "role_ids");
                assert!(!options.html.contains("class"));
                assert!(options.html.contains("data-x"));
                assert_eq!(options.checked, None);
                seen.push(options.label.text().unwrap_or_default().to_string());
                Ok(value.to_string())
            },
        )
        .unwrap();

        assert_eq!(out, vec!["1", "2", "3"]);
        assert_eq!(seen, vec!["Admin", "Editor", "Viewer"]);
    }

    #[test]
    fn test_empty_collection() {
        let out = iterate(
            "role_ids",
            &Vec::<Role>::new(),
            |r| r.id.to_string(),
            |r| r.name.to_string(),
            &FieldOptions::new(),
            None,
            |_, value, _| Ok(value.to_string()),
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_checked_rules() {
        assert_eq!(checked_ids(None), Vec::<String>::new());
        assert_eq!(checked_ids(Some(&Checked::Value("2".into()))), vec!["2"]);
        assert_eq!(
            checked_ids(Some(&Checked::Values(vec!["1".into(), "3".into()]))),
            vec!["1", "3"]
        );
        assert_eq!(
            checked_ids(Some(&Checked::Item(Role { id: 3, name: "Viewer" }))),
            vec!["3"]
        );
        assert_eq!(
            checked_ids(Some(&Checked::Items(vec![
                Role { id: 1, name: "Admin" },
                Role { id: 2, name: "Editor" },
            ]))),
            vec!["1", "2"]
        );
    }

    #[test]
    fn test_render_failure_stops_iteration() {
        let mut calls = 0;
        let result = iterate(
            "role_ids",
            &roles(),
            |r| r.id.to_string(),
            |r| r.name.to_string(),
            &FieldOptions::new(),
            None,
            |name, _, _| {
                calls += 1;
                Err(FormError::render(name, "nope"))
            },
        );
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
