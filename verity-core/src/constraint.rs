//! Constraint descriptors
//!
//! A [`Constraint`] describes *why* a check failed: the kind of rule and
//! the parameters needed to reconstruct the user-facing message. It is
//! immutable, carries no reference to the validated object, and is the
//! lookup key for locale message templates.

use crate::value::Value;
use serde::Serialize;

/// Description of a failed constraint and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Constraint {
    Equals { value: Value },
    NotEquals { value: Value },
    Greater { value: Value },
    GreaterOrEqual { value: Value },
    Less { value: Value },
    LessOrEqual { value: Value },
    Between { start: Value, end: Value },
    NotBetween { start: Value, end: Value },
    In { values: Vec<Value> },
    NotIn { values: Vec<Value> },
    IntegerDigits { min: Option<usize>, max: Option<usize> },
    DecimalDigits { min: Option<usize>, max: Option<usize> },
    Null,
    NotNull,
    Empty,
    NotEmpty,
    Blank,
    NotBlank,
    Today,
    Email,
    Website,
    Size { min: Option<usize>, max: Option<usize> },
    Contains { value: Value },
    NotContain { value: Value },
    ContainsAll { values: Vec<Value> },
    NotContainAll { values: Vec<Value> },
    ContainsAny { values: Vec<Value> },
    NotContainAny { values: Vec<Value> },
    ContainsRegex { pattern: String },
    NotContainRegex { pattern: String },
    StartsWith { prefix: Value },
    NotStartWith { prefix: Value },
    EndsWith { suffix: Value },
    NotEndWith { suffix: Value },
    Matches { pattern: String },
    NotMatch { pattern: String },
    Letter,
    NotLetter,
    Digit,
    NotDigit,
    LetterOrDigit,
    NotLetterOrDigit,
    UpperCase,
    NotUpperCase,
    LowerCase,
    NotLowerCase,
    Whitespace,
    NotWhitespace,
}

impl Constraint {
    /// Stable PascalCase kind name, independent of parameters.
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Equals { .. } => "Equals",
            Constraint::NotEquals { .. } => "NotEquals",
            Constraint::Greater { .. } => "Greater",
            Constraint::GreaterOrEqual { .. } => "GreaterOrEqual",
            Constraint::Less { .. } => "Less",
            Constraint::LessOrEqual { .. } => "LessOrEqual",
            Constraint::Between { .. } => "Between",
            Constraint::NotBetween { .. } => "NotBetween",
            Constraint::In { .. } => "In",
            Constraint::NotIn { .. } => "NotIn",
            Constraint::IntegerDigits { .. } => "IntegerDigits",
            Constraint::DecimalDigits { .. } => "DecimalDigits",
            Constraint::Null => "Null",
            Constraint::NotNull => "NotNull",
            Constraint::Empty => "Empty",
            Constraint::NotEmpty => "NotEmpty",
            Constraint::Blank => "Blank",
            Constraint::NotBlank => "NotBlank",
            Constraint::Today => "Today",
            Constraint::Email => "Email",
            Constraint::Website => "Website",
            Constraint::Size { .. } => "Size",
            Constraint::Contains { .. } => "Contains",
            Constraint::NotContain { .. } => "NotContain",
            Constraint::ContainsAll { .. } => "ContainsAll",
            Constraint::NotContainAll { .. } => "NotContainAll",
            Constraint::ContainsAny { .. } => "ContainsAny",
            Constraint::NotContainAny { .. } => "NotContainAny",
            Constraint::ContainsRegex { .. } => "ContainsRegex",
            Constraint::NotContainRegex { .. } => "NotContainRegex",
            Constraint::StartsWith { .. } => "StartsWith",
            Constraint::NotStartWith { .. } => "NotStartWith",
            Constraint::EndsWith { .. } => "EndsWith",
            Constraint::NotEndWith { .. } => "NotEndWith",
            Constraint::Matches { .. } => "Matches",
            Constraint::NotMatch { .. } => "NotMatch",
            Constraint::Letter => "Letter",
            Constraint::NotLetter => "NotLetter",
            Constraint::Digit => "Digit",
            Constraint::NotDigit => "NotDigit",
            Constraint::LetterOrDigit => "LetterOrDigit",
            Constraint::NotLetterOrDigit => "NotLetterOrDigit",
            Constraint::UpperCase => "UpperCase",
            Constraint::NotUpperCase => "NotUpperCase",
            Constraint::LowerCase => "LowerCase",
            Constraint::NotLowerCase => "NotLowerCase",
            Constraint::Whitespace => "Whitespace",
            Constraint::NotWhitespace => "NotWhitespace",
        }
    }

    /// Message-table key for this constraint.
    ///
    /// Bounded kinds (size, digit counts) select a key variant by which
    /// bounds are present, so each template can name exactly the bounds
    /// it interpolates.
    pub fn message_key(&self) -> String {
        match self {
            Constraint::Size { min, max } => bounded_key("constraints.size", *min, *max),
            Constraint::IntegerDigits { min, max } => {
                bounded_key("constraints.integer_digits", *min, *max)
            }
            Constraint::DecimalDigits { min, max } => {
                bounded_key("constraints.decimal_digits", *min, *max)
            }
            Constraint::Equals { .. } => "constraints.equals".to_string(),
            Constraint::NotEquals { .. } => "constraints.not_equals".to_string(),
            Constraint::Greater { .. } => "constraints.greater".to_string(),
            Constraint::GreaterOrEqual { .. } => "constraints.greater_or_equal".to_string(),
            Constraint::Less { .. } => "constraints.less".to_string(),
            Constraint::LessOrEqual { .. } => "constraints.less_or_equal".to_string(),
            Constraint::Between { .. } => "constraints.between".to_string(),
            Constraint::NotBetween { .. } => "constraints.not_between".to_string(),
            Constraint::In { .. } => "constraints.in".to_string(),
            Constraint::NotIn { .. } => "constraints.not_in".to_string(),
            Constraint::Null => "constraints.null".to_string(),
            Constraint::NotNull => "constraints.not_null".to_string(),
            Constraint::Empty => "constraints.empty".to_string(),
            Constraint::NotEmpty => "constraints.not_empty".to_string(),
            Constraint::Blank => "constraints.blank".to_string(),
            Constraint::NotBlank => "constraints.not_blank".to_string(),
            Constraint::Today => "constraints.today".to_string(),
            Constraint::Email => "constraints.email".to_string(),
            Constraint::Website => "constraints.website".to_string(),
            Constraint::Contains { .. } => "constraints.contains".to_string(),
            Constraint::NotContain { .. } => "constraints.not_contain".to_string(),
            Constraint::ContainsAll { .. } => "constraints.contains_all".to_string(),
            Constraint::NotContainAll { .. } => "constraints.not_contain_all".to_string(),
            Constraint::ContainsAny { .. } => "constraints.contains_any".to_string(),
            Constraint::NotContainAny { .. } => "constraints.not_contain_any".to_string(),
            Constraint::ContainsRegex { .. } => "constraints.contains_regex".to_string(),
            Constraint::NotContainRegex { .. } => "constraints.not_contain_regex".to_string(),
            Constraint::StartsWith { .. } => "constraints.starts_with".to_string(),
            Constraint::NotStartWith { .. } => "constraints.not_start_with".to_string(),
            Constraint::EndsWith { .. } => "constraints.ends_with".to_string(),
            Constraint::NotEndWith { .. } => "constraints.not_end_with".to_string(),
            Constraint::Matches { .. } => "constraints.matches".to_string(),
            Constraint::NotMatch { .. } => "constraints.not_match".to_string(),
            Constraint::Letter => "constraints.letter".to_string(),
            Constraint::NotLetter => "constraints.not_letter".to_string(),
            Constraint::Digit => "constraints.digit".to_string(),
            Constraint::NotDigit => "constraints.not_digit".to_string(),
            Constraint::LetterOrDigit => "constraints.letter_or_digit".to_string(),
            Constraint::NotLetterOrDigit => "constraints.not_letter_or_digit".to_string(),
            Constraint::UpperCase => "constraints.upper_case".to_string(),
            Constraint::NotUpperCase => "constraints.not_upper_case".to_string(),
            Constraint::LowerCase => "constraints.lower_case".to_string(),
            Constraint::NotLowerCase => "constraints.not_lower_case".to_string(),
            Constraint::Whitespace => "constraints.whitespace".to_string(),
            Constraint::NotWhitespace => "constraints.not_whitespace".to_string(),
        }
    }

    /// Named placeholder values for message interpolation, rendered in
    /// each parameter's natural string form.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Constraint::Equals { value }
            | Constraint::NotEquals { value }
            | Constraint::Greater { value }
            | Constraint::GreaterOrEqual { value }
            | Constraint::Less { value }
            | Constraint::LessOrEqual { value }
            | Constraint::Contains { value }
            | Constraint::NotContain { value } => vec![("value", value.to_string())],
            Constraint::Between { start, end } | Constraint::NotBetween { start, end } => {
                vec![("start", start.to_string()), ("end", end.to_string())]
            }
            Constraint::In { values }
            | Constraint::NotIn { values }
            | Constraint::ContainsAll { values }
            | Constraint::NotContainAll { values }
            | Constraint::ContainsAny { values }
            | Constraint::NotContainAny { values } => vec![("values", join_values(values))],
            Constraint::Size { min, max }
            | Constraint::IntegerDigits { min, max }
            | Constraint::DecimalDigits { min, max } => {
                let mut params = Vec::new();
                if let Some(min) = min {
                    params.push(("min", min.to_string()));
                }
                if let Some(max) = max {
                    params.push(("max", max.to_string()));
                }
                params
            }
            Constraint::ContainsRegex { pattern }
            | Constraint::NotContainRegex { pattern }
            | Constraint::Matches { pattern }
            | Constraint::NotMatch { pattern } => vec![("pattern", pattern.clone())],
            Constraint::StartsWith { prefix } | Constraint::NotStartWith { prefix } => {
                vec![("prefix", prefix.to_string())]
            }
            Constraint::EndsWith { suffix } | Constraint::NotEndWith { suffix } => {
                vec![("suffix", suffix.to_string())]
            }
            _ => Vec::new(),
        }
    }
}

fn bounded_key(base: &str, min: Option<usize>, max: Option<usize>) -> String {
    match (min, max) {
        (Some(_), Some(_)) => format!("{}.min.max", base),
        (Some(_), None) => format!("{}.min", base),
        (None, Some(_)) => format!("{}.max", base),
        (None, None) => base.to_string(),
    }
}

fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
