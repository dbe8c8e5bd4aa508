//! Equality and membership checks, available for every property type

use crate::constraint::Constraint;
use crate::validator::Property;
use crate::value::ToValue;

impl<'a, 'v, T: ToValue + PartialEq> Property<'a, 'v, T> {
    /// The value must equal `expected` by the type's natural equality.
    pub fn is_equal_to(self, expected: &T) -> Self {
        let snapshot = expected.to_value();
        self.check(
            |v| v == expected,
            move |_| Constraint::Equals { value: snapshot },
        )
    }

    pub fn is_not_equal_to(self, other: &T) -> Self {
        let snapshot = other.to_value();
        self.check(
            |v| v != other,
            move |_| Constraint::NotEquals { value: snapshot },
        )
    }

    /// The value must be one of `candidates`.
    pub fn is_in(self, candidates: &[T]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(ToValue::to_value).collect();
        self.check(
            |v| candidates.contains(v),
            move |_| Constraint::In { values: snapshot },
        )
    }

    pub fn is_not_in(self, candidates: &[T]) -> Self {
        let snapshot: Vec<_> = candidates.iter().map(ToValue::to_value).collect();
        self.check(
            |v| !candidates.contains(v),
            move |_| Constraint::NotIn { values: snapshot },
        )
    }
}
