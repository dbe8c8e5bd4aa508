//! String shape, containment, pattern, and format checks
//!
//! Ignoring-case variants fold both sides for the comparison only; the
//! descriptor always reports the caller's original, unfolded arguments.

use crate::checks::within_bounds;
use crate::constraint::Constraint;
use crate::validator::Property;
use crate::value::ToValue;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static WEBSITE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

fn fold(s: &str) -> String {
    s.to_lowercase()
}

impl<'a, 'v> Property<'a, 'v, String> {
    pub fn is_empty(self) -> Self {
        self.check(|v| v.is_empty(), |_| Constraint::Empty)
    }

    pub fn is_not_empty(self) -> Self {
        self.check(|v| !v.is_empty(), |_| Constraint::NotEmpty)
    }

    /// Blank means empty or all-whitespace.
    pub fn is_blank(self) -> Self {
        self.check(|v| v.trim().is_empty(), |_| Constraint::Blank)
    }

    pub fn is_not_blank(self) -> Self {
        self.check(|v| !v.trim().is_empty(), |_| Constraint::NotBlank)
    }

    /// Character count tested against whichever bounds are present.
    pub fn has_size(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.check(
            |v| within_bounds(v.chars().count(), min, max),
            |_| Constraint::Size { min, max },
        )
    }

    pub fn is_email(self) -> Self {
        self.check(|v| EMAIL_REGEX.is_match(v), |_| Constraint::Email)
    }

    pub fn is_website(self) -> Self {
        self.check(|v| WEBSITE_REGEX.is_match(v), |_| Constraint::Website)
    }

    pub fn is_equal_to_ignoring_case(self, expected: &str) -> Self {
        let snapshot = expected.to_value();
        self.check(
            |v| fold(v) == fold(expected),
            move |_| Constraint::Equals { value: snapshot },
        )
    }

    pub fn is_not_equal_to_ignoring_case(self, other: &str) -> Self {
        let snapshot = other.to_value();
        self.check(
            |v| fold(v) != fold(other),
            move |_| Constraint::NotEquals { value: snapshot },
        )
    }

    pub fn is_in_ignoring_case(self, candidates: &[&str]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(|c| c.to_value()).collect();
        self.check(
            |v| candidates.iter().any(|c| fold(c) == fold(v)),
            move |_| Constraint::In { values: snapshot },
        )
    }

    pub fn is_not_in_ignoring_case(self, candidates: &[&str]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(|c| c.to_value()).collect();
        self.check(
            |v| candidates.iter().all(|c| fold(c) != fold(v)),
            move |_| Constraint::NotIn { values: snapshot },
        )
    }

    /// Substring containment.
    pub fn contains(self, needle: &str) -> Self {
        let snapshot = needle.to_value();
        self.check(
            |v| v.contains(needle),
            move |_| Constraint::Contains { value: snapshot },
        )
    }

    pub fn contains_ignoring_case(self, needle: &str) -> Self {
        let snapshot = needle.to_value();
        self.check(
            |v| fold(v).contains(&fold(needle)),
            move |_| Constraint::Contains { value: snapshot },
        )
    }

    pub fn does_not_contain(self, needle: &str) -> Self {
        let snapshot = needle.to_value();
        self.check(
            |v| !v.contains(needle),
            move |_| Constraint::NotContain { value: snapshot },
        )
    }

    pub fn does_not_contain_ignoring_case(self, needle: &str) -> Self {
        let snapshot = needle.to_value();
        self.check(
            |v| !fold(v).contains(&fold(needle)),
            move |_| Constraint::NotContain { value: snapshot },
        )
    }

    pub fn contains_all(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| needles.iter().all(|n| v.contains(n)),
            move |_| Constraint::ContainsAll { values: snapshot },
        )
    }

    pub fn contains_all_ignoring_case(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| {
                let haystack = fold(v);
                needles.iter().all(|n| haystack.contains(&fold(n)))
            },
            move |_| Constraint::ContainsAll { values: snapshot },
        )
    }

    pub fn contains_any(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| needles.iter().any(|n| v.contains(n)),
            move |_| Constraint::ContainsAny { values: snapshot },
        )
    }

    pub fn contains_any_ignoring_case(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| {
                let haystack = fold(v);
                needles.iter().any(|n| haystack.contains(&fold(n)))
            },
            move |_| Constraint::ContainsAny { values: snapshot },
        )
    }

    pub fn does_not_contain_all(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| !needles.iter().all(|n| v.contains(n)),
            move |_| Constraint::NotContainAll { values: snapshot },
        )
    }

    pub fn does_not_contain_any(self, needles: &[&str]) -> Self {
        let snapshot: Vec<_> = needles.iter().map(|n| n.to_value()).collect();
        self.check(
            |v| !needles.iter().any(|n| v.contains(n)),
            move |_| Constraint::NotContainAny { values: snapshot },
        )
    }

    /// The whole string must match `pattern`.
    pub fn matches(self, pattern: &Regex) -> Self {
        let anchored = anchored(pattern);
        let source = pattern.as_str().to_string();
        self.check(
            move |v| anchored.is_match(v),
            move |_| Constraint::Matches { pattern: source },
        )
    }

    pub fn does_not_match(self, pattern: &Regex) -> Self {
        let anchored = anchored(pattern);
        let source = pattern.as_str().to_string();
        self.check(
            move |v| !anchored.is_match(v),
            move |_| Constraint::NotMatch { pattern: source },
        )
    }

    /// Some substring must match `pattern`.
    pub fn contains_regex(self, pattern: &Regex) -> Self {
        let source = pattern.as_str().to_string();
        self.check(
            |v| pattern.is_match(v),
            move |_| Constraint::ContainsRegex { pattern: source },
        )
    }

    pub fn does_not_contain_regex(self, pattern: &Regex) -> Self {
        let source = pattern.as_str().to_string();
        self.check(
            |v| !pattern.is_match(v),
            move |_| Constraint::NotContainRegex { pattern: source },
        )
    }

    pub fn starts_with(self, prefix: &str) -> Self {
        let snapshot = prefix.to_value();
        self.check(
            |v| v.starts_with(prefix),
            move |_| Constraint::StartsWith { prefix: snapshot },
        )
    }

    pub fn starts_with_ignoring_case(self, prefix: &str) -> Self {
        let snapshot = prefix.to_value();
        self.check(
            |v| fold(v).starts_with(&fold(prefix)),
            move |_| Constraint::StartsWith { prefix: snapshot },
        )
    }

    pub fn does_not_start_with(self, prefix: &str) -> Self {
        let snapshot = prefix.to_value();
        self.check(
            |v| !v.starts_with(prefix),
            move |_| Constraint::NotStartWith { prefix: snapshot },
        )
    }

    pub fn ends_with(self, suffix: &str) -> Self {
        let snapshot = suffix.to_value();
        self.check(
            |v| v.ends_with(suffix),
            move |_| Constraint::EndsWith { suffix: snapshot },
        )
    }

    pub fn ends_with_ignoring_case(self, suffix: &str) -> Self {
        let snapshot = suffix.to_value();
        self.check(
            |v| fold(v).ends_with(&fold(suffix)),
            move |_| Constraint::EndsWith { suffix: snapshot },
        )
    }

    pub fn does_not_end_with(self, suffix: &str) -> Self {
        let snapshot = suffix.to_value();
        self.check(
            |v| !v.ends_with(suffix),
            move |_| Constraint::NotEndWith { suffix: snapshot },
        )
    }
}

/// Re-anchor `pattern` so it must cover the entire input, not just a
/// substring. Leftmost-first `find` can stop on a shorter alternative,
/// so match offsets cannot be inspected instead. Built once per check
/// call; wrapping an already-compiled pattern in a non-capturing group
/// cannot fail to compile.
fn anchored(pattern: &Regex) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern.as_str())).expect("anchored pattern compiles")
}
