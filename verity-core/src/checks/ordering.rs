//! Ordering and range checks for totally-ordered property types

use crate::constraint::Constraint;
use crate::validator::Property;
use crate::value::ToValue;

impl<'a, 'v, T: ToValue + PartialOrd> Property<'a, 'v, T> {
    /// Strictly less than `bound`.
    pub fn is_less_than(self, bound: &T) -> Self {
        let snapshot = bound.to_value();
        self.check(
            |v| v < bound,
            move |_| Constraint::Less { value: snapshot },
        )
    }

    pub fn is_less_than_or_equal_to(self, bound: &T) -> Self {
        let snapshot = bound.to_value();
        self.check(
            |v| v <= bound,
            move |_| Constraint::LessOrEqual { value: snapshot },
        )
    }

    /// Strictly greater than `bound`.
    pub fn is_greater_than(self, bound: &T) -> Self {
        let snapshot = bound.to_value();
        self.check(
            |v| v > bound,
            move |_| Constraint::Greater { value: snapshot },
        )
    }

    pub fn is_greater_than_or_equal_to(self, bound: &T) -> Self {
        let snapshot = bound.to_value();
        self.check(
            |v| v >= bound,
            move |_| Constraint::GreaterOrEqual { value: snapshot },
        )
    }

    /// Within `[start, end]`, inclusive at both ends.
    pub fn is_between(self, start: &T, end: &T) -> Self {
        let (s, e) = (start.to_value(), end.to_value());
        self.check(
            |v| v >= start && v <= end,
            move |_| Constraint::Between { start: s, end: e },
        )
    }

    /// Outside `[start, end]`: the exact negation of [`is_between`].
    ///
    /// [`is_between`]: Property::is_between
    pub fn is_not_between(self, start: &T, end: &T) -> Self {
        let (s, e) = (start.to_value(), end.to_value());
        self.check(
            |v| v < start || v > end,
            move |_| Constraint::NotBetween { start: s, end: e },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::constraint::Constraint;
    use crate::validator::validate;
    use crate::value::ToValue;

    fn between_ok(value: i32, start: i32, end: i32) -> bool {
        validate(value, |v, n| {
            v.property("n", n).is_between(&start, &end);
        })
        .is_ok()
    }

    fn not_between_ok(value: i32, start: i32, end: i32) -> bool {
        validate(value, |v, n| {
            v.property("n", n).is_not_between(&start, &end);
        })
        .is_ok()
    }

    #[test]
    fn test_strict_and_inclusive_comparisons() {
        assert!(validate(5, |v, n| {
            v.property("n", n).is_greater_than(&4);
        })
        .is_ok());
        assert!(validate(5, |v, n| {
            v.property("n", n).is_greater_than(&5);
        })
        .is_err());
        assert!(validate(5, |v, n| {
            v.property("n", n).is_greater_than_or_equal_to(&5);
        })
        .is_ok());
        assert!(validate(5, |v, n| {
            v.property("n", n).is_less_than(&5);
        })
        .is_err());
        assert!(validate(5, |v, n| {
            v.property("n", n).is_less_than_or_equal_to(&5);
        })
        .is_ok());
    }

    #[test]
    fn test_between_is_inclusive_both_ends() {
        assert!(between_ok(11, 11, 12));
        assert!(between_ok(12, 11, 12));
        assert!(!between_ok(10, 11, 12));
        assert!(!between_ok(13, 11, 12));
    }

    #[test]
    fn test_degenerate_range_accepts_exactly_one_value() {
        assert!(between_ok(4, 4, 4));
        assert!(!between_ok(3, 4, 4));
        assert!(!between_ok(5, 4, 4));
    }

    #[test]
    fn test_not_between_is_exact_negation() {
        for value in 0..20 {
            assert_eq!(between_ok(value, 5, 15), !not_between_ok(value, 5, 15));
        }
    }

    #[test]
    fn test_failure_reports_range_descriptor() {
        let err = validate(10, |v, n| {
            v.property("id", n).is_between(&11, &12);
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Between { start: 11.to_value(), end: 12.to_value() }
        );
        assert_eq!(err.violations[0].value, Some(10.to_value()));
    }

    #[test]
    fn test_float_ordering() {
        assert!(validate(1.5f64, |v, n| {
            v.property("n", n).is_between(&1.0, &2.0);
        })
        .is_ok());
    }
}
