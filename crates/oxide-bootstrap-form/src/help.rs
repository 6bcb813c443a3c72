//! Help blocks: inline error text and static help text.

use ironhtml::typed::Element;
use ironhtml_elements::Span;
use tracing::warn;

use crate::context::FormContext;
use crate::error::Result;
use crate::inflect::underscore;
use crate::inspect::ErrorStateInspector;
use crate::options::HelpOption;
use crate::source::LocalizationSource;

/// Class of a help block.
pub const HELP_CLASS: &str = "help-block";

/// Translation scope the help text was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpScope {
    /// `activerecord.help.<underscored model>`.
    Current,
    /// `activerecord.help.<downcased model>`, deprecated.
    Deprecated,
}

/// A localized help text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpLookup {
    /// The help text.
    pub text: String,
    /// Scope the text was found under.
    pub scope: HelpScope,
}

/// Resolves the help markup of a group.
#[derive(Clone, Copy)]
pub struct HelpTextResolver<'a> {
    context: &'a FormContext,
    errors: ErrorStateInspector<'a>,
    model_name: Option<&'a str>,
    i18n: Option<&'a dyn LocalizationSource>,
}

impl std::fmt::Debug for HelpTextResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelpTextResolver")
            .field("model_name", &self.model_name)
            .field("has_i18n", &self.i18n.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> HelpTextResolver<'a> {
    /// Creates a resolver.
    pub fn new(
        context: &'a FormContext,
        errors: ErrorStateInspector<'a>,
        model_name: Option<&'a str>,
        i18n: Option<&'a dyn LocalizationSource>,
    ) -> Self {
        Self {
            context,
            errors,
            model_name,
            i18n,
        }
    }

    /// Returns the help markup for a field, if there is any to show.
    ///
    /// Inline error text comes first, followed by the help text.
    pub fn resolve(&self, field: &str, help: &HelpOption) -> Result<Option<String>> {
        let help_text = match help {
            HelpOption::Suppressed => return Ok(None),
            HelpOption::Text(text) => text.clone(),
            HelpOption::Absent => self
                .lookup(field)?
                .map(|found| found.text)
                .unwrap_or_default(),
        };

        let error_text = if self.context.inline_errors() && self.errors.has_error(field) {
            self.errors.error_messages(field)
        } else {
            String::new()
        };

        let markup: String = [error_text, help_text]
            .iter()
            .filter(|message| !message.is_empty())
            .map(|message| {
                Element::<Span>::new()
                    .class(HELP_CLASS)
                    .text(message)
                    .render()
            })
            .collect();

        Ok((!markup.is_empty()).then_some(markup))
    }

    /// Looks up localized help text for a field of the bound model.
    ///
    /// The underscored scope is tried first; a hit in the downcased scope
    /// is still used but logged as deprecated.
    pub fn lookup(&self, field: &str) -> Result<Option<HelpLookup>> {
        let (Some(model), Some(i18n)) = (self.model_name, self.i18n) else {
            return Ok(None);
        };

        let current = format!("activerecord.help.{}", underscore(model));
        if let Some(text) = present(i18n.lookup(field, &current, Some(""))?) {
            return Ok(Some(HelpLookup {
                text,
                scope: HelpScope::Current,
            }));
        }

        let deprecated = format!("activerecord.help.{}", model.to_lowercase());
        if let Some(text) = present(i18n.lookup(field, &deprecated, Some(""))?) {
            warn!(
                "I18n key '{deprecated}.{field}' is deprecated, use '{current}.{field}' instead"
            );
            return Ok(Some(HelpLookup {
                text,
                scope: HelpScope::Deprecated,
            }));
        }

        Ok(None)
    }
}

fn present(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
