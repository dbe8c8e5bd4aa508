//! Rendering violations into locale-resolved messages

use crate::catalog::resolve_template;
use crate::locale::Locale;
use serde::Serialize;
use verity_core::{Constraint, ConstraintViolationError, Value, Violation};

/// A [`Violation`] paired with its rendered, locale-resolved message.
///
/// Keeps the structured fields intact so callers can still branch on
/// the constraint kind or serialize the report after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct I18nViolation {
    pub property: String,
    pub value: Option<Value>,
    pub constraint: Constraint,
    pub message: String,
}

impl I18nViolation {
    fn render(violation: &Violation, locale: &Locale) -> Self {
        let template = resolve_template(&violation.constraint.message_key(), locale);
        let message = interpolate(&template, &violation.constraint.params());
        Self {
            property: violation.property.clone(),
            value: violation.value.clone(),
            constraint: violation.constraint.clone(),
            message,
        }
    }
}

/// Render a violation report into per-locale messages.
pub trait MapToI18n {
    /// Render every violation for `locale`, preserving order.
    fn map_to_i18n(&self, locale: &Locale) -> Vec<I18nViolation>;
}

impl MapToI18n for [Violation] {
    fn map_to_i18n(&self, locale: &Locale) -> Vec<I18nViolation> {
        self.iter().map(|v| I18nViolation::render(v, locale)).collect()
    }
}

impl MapToI18n for ConstraintViolationError {
    fn map_to_i18n(&self, locale: &Locale) -> Vec<I18nViolation> {
        self.violations.map_to_i18n(locale)
    }
}

/// Replace `{name}` placeholders with the matching parameter values.
///
/// Placeholders with no matching parameter are left verbatim, so a
/// template defect stays visible instead of silently vanishing.
fn interpolate(template: &str, params: &[(&'static str, String)]) -> String {
    let mut message = template.to_string();
    for (name, value) in params {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}
