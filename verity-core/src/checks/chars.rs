//! Single-character class checks

use crate::constraint::Constraint;
use crate::validator::Property;
use crate::value::ToValue;

fn fold(c: char) -> String {
    c.to_lowercase().collect()
}

impl<'a, 'v> Property<'a, 'v, char> {
    pub fn is_whitespace(self) -> Self {
        self.check(|v| v.is_whitespace(), |_| Constraint::Whitespace)
    }

    pub fn is_not_whitespace(self) -> Self {
        self.check(|v| !v.is_whitespace(), |_| Constraint::NotWhitespace)
    }

    pub fn is_letter(self) -> Self {
        self.check(|v| v.is_alphabetic(), |_| Constraint::Letter)
    }

    pub fn is_not_letter(self) -> Self {
        self.check(|v| !v.is_alphabetic(), |_| Constraint::NotLetter)
    }

    pub fn is_digit(self) -> Self {
        self.check(|v| v.is_numeric(), |_| Constraint::Digit)
    }

    pub fn is_not_digit(self) -> Self {
        self.check(|v| !v.is_numeric(), |_| Constraint::NotDigit)
    }

    pub fn is_letter_or_digit(self) -> Self {
        self.check(|v| v.is_alphanumeric(), |_| Constraint::LetterOrDigit)
    }

    pub fn is_not_letter_or_digit(self) -> Self {
        self.check(|v| !v.is_alphanumeric(), |_| Constraint::NotLetterOrDigit)
    }

    pub fn is_upper_case(self) -> Self {
        self.check(|v| v.is_uppercase(), |_| Constraint::UpperCase)
    }

    pub fn is_not_upper_case(self) -> Self {
        self.check(|v| !v.is_uppercase(), |_| Constraint::NotUpperCase)
    }

    pub fn is_lower_case(self) -> Self {
        self.check(|v| v.is_lowercase(), |_| Constraint::LowerCase)
    }

    pub fn is_not_lower_case(self) -> Self {
        self.check(|v| !v.is_lowercase(), |_| Constraint::NotLowerCase)
    }

    pub fn is_equal_to_ignoring_case(self, expected: char) -> Self {
        self.check(
            |v| fold(*v) == fold(expected),
            move |_| Constraint::Equals { value: expected.to_value() },
        )
    }

    pub fn is_not_equal_to_ignoring_case(self, other: char) -> Self {
        self.check(
            |v| fold(*v) != fold(other),
            move |_| Constraint::NotEquals { value: other.to_value() },
        )
    }

    pub fn is_in_ignoring_case(self, candidates: &[char]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(ToValue::to_value).collect();
        self.check(
            |v| candidates.iter().any(|c| fold(*c) == fold(*v)),
            move |_| Constraint::In { values: snapshot },
        )
    }

    pub fn is_not_in_ignoring_case(self, candidates: &[char]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(ToValue::to_value).collect();
        self.check(
            |v| candidates.iter().all(|c| fold(*c) != fold(*v)),
            move |_| Constraint::NotIn { values: snapshot },
        )
    }
}
