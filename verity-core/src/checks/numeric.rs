//! Sign and digit-count checks for numeric property types

use crate::checks::within_bounds;
use crate::constraint::Constraint;
use crate::traits::{Digits, Numeric};
use crate::validator::Property;
use crate::value::ToValue;

impl<'a, 'v, T: Numeric> Property<'a, 'v, T> {
    pub fn is_zero(self) -> Self {
        self.check(
            |v| *v == v.zero(),
            |v| Constraint::Equals { value: v.zero().to_value() },
        )
    }

    pub fn is_not_zero(self) -> Self {
        self.check(
            |v| *v != v.zero(),
            |v| Constraint::NotEquals { value: v.zero().to_value() },
        )
    }

    pub fn is_one(self) -> Self {
        self.check(
            |v| *v == v.one(),
            |v| Constraint::Equals { value: v.one().to_value() },
        )
    }

    pub fn is_not_one(self) -> Self {
        self.check(
            |v| *v != v.one(),
            |v| Constraint::NotEquals { value: v.one().to_value() },
        )
    }

    /// Strictly greater than zero; fails on exactly zero.
    pub fn is_positive(self) -> Self {
        self.check(
            |v| *v > v.zero(),
            |v| Constraint::Greater { value: v.zero().to_value() },
        )
    }

    pub fn is_not_positive(self) -> Self {
        self.check(
            |v| *v <= v.zero(),
            |v| Constraint::LessOrEqual { value: v.zero().to_value() },
        )
    }

    pub fn is_negative(self) -> Self {
        self.check(
            |v| *v < v.zero(),
            |v| Constraint::Less { value: v.zero().to_value() },
        )
    }

    /// Zero or greater; accepts exactly zero.
    pub fn is_not_negative(self) -> Self {
        self.check(
            |v| *v >= v.zero(),
            |v| Constraint::GreaterOrEqual { value: v.zero().to_value() },
        )
    }

    /// Same acceptance as [`is_not_negative`].
    ///
    /// [`is_not_negative`]: Property::is_not_negative
    pub fn is_positive_or_zero(self) -> Self {
        self.is_not_negative()
    }

    /// Same acceptance as [`is_not_positive`].
    ///
    /// [`is_not_positive`]: Property::is_not_positive
    pub fn is_negative_or_zero(self) -> Self {
        self.is_not_positive()
    }
}

impl<'a, 'v, T: ToValue + Digits> Property<'a, 'v, T> {
    /// Digit count of the integer part of the absolute value, tested
    /// against whichever bounds are present.
    pub fn has_digits(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.check(
            |v| within_bounds(v.integer_digits(), min, max),
            |_| Constraint::IntegerDigits { min, max },
        )
    }

    pub fn has_integer_digits(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.has_digits(min, max)
    }

    /// Digit count of the fractional part; zero for integer types.
    pub fn has_decimal_digits(self, min: Option<usize>, max: Option<usize>) -> Self {
        self.check(
            |v| within_bounds(v.decimal_digits(), min, max),
            |_| Constraint::DecimalDigits { min, max },
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::constraint::Constraint;
    use crate::validator::validate;
    use crate::value::ToValue;
    use rust_decimal::Decimal;

    #[test]
    fn test_is_positive_fails_on_zero() {
        assert!(validate(1, |v, n| {
            v.property("n", n).is_positive();
        })
        .is_ok());

        let err = validate(0, |v, n| {
            v.property("n", n).is_positive();
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Greater { value: 0.to_value() }
        );
    }

    #[test]
    fn test_is_not_negative_accepts_zero() {
        assert!(validate(0, |v, n| {
            v.property("n", n).is_not_negative();
        })
        .is_ok());

        let err = validate(-1, |v, n| {
            v.property("n", n).is_not_negative();
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::GreaterOrEqual { value: 0.to_value() }
        );
    }

    #[test]
    fn test_positive_or_zero_matches_not_negative() {
        for n in [-1, 0, 1] {
            let a = validate(n, |v, n| {
                v.property("n", n).is_positive_or_zero();
            })
            .is_ok();
            let b = validate(n, |v, n| {
                v.property("n", n).is_not_negative();
            })
            .is_ok();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_float_zero_check_reports_float_zero() {
        let err = validate(-47.7375833f64, |v, n| {
            v.property("latitude", n).is_positive();
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Greater { value: 0.0f64.to_value() }
        );
    }

    #[test]
    fn test_decimal_zero_check_preserves_scale() {
        let salary: Decimal = "1.0".parse().unwrap();
        let err = validate(salary, |v, s| {
            v.property("salary", s).is_zero();
        })
        .unwrap_err();

        let zero: Decimal = "0.0".parse().unwrap();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::Equals { value: zero.to_value() }
        );
    }

    #[test]
    fn test_is_one() {
        assert!(validate(1, |v, n| {
            v.property("n", n).is_one();
        })
        .is_ok());
        assert!(validate(2, |v, n| {
            v.property("n", n).is_not_one();
        })
        .is_ok());
    }

    #[test]
    fn test_exact_digit_count_boundary() {
        assert!(validate(9999, |v, n| {
            v.property("n", n).has_digits(Some(4), Some(4));
        })
        .is_ok());
        assert!(validate(999, |v, n| {
            v.property("n", n).has_digits(Some(4), Some(4));
        })
        .is_err());
        assert!(validate(10000, |v, n| {
            v.property("n", n).has_digits(Some(4), Some(4));
        })
        .is_err());
    }

    #[test]
    fn test_digit_count_ignores_sign() {
        assert!(validate(-9999, |v, n| {
            v.property("n", n).has_digits(Some(4), Some(4));
        })
        .is_ok());
    }

    #[test]
    fn test_decimal_digits() {
        let d: Decimal = "12.345".parse().unwrap();
        assert!(validate(d, |v, d| {
            v.property("d", d)
                .has_integer_digits(Some(2), Some(2))
                .has_decimal_digits(Some(3), Some(3));
        })
        .is_ok());

        let err = validate(d, |v, d| {
            v.property("d", d).has_decimal_digits(None, Some(2));
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::DecimalDigits { min: None, max: Some(2) }
        );
    }

    #[test]
    fn test_small_float_decimal_digits() {
        // 1e-7 renders in exponent notation; it still has 7 decimal
        // digits, not zero.
        assert!(validate(0.0000001f64, |v, n| {
            v.property("rate", n).has_decimal_digits(Some(1), None);
        })
        .is_ok());
        assert!(validate(0.0000001f64, |v, n| {
            v.property("rate", n).has_decimal_digits(Some(7), Some(7));
        })
        .is_ok());
    }

    #[test]
    fn test_inverted_digit_bounds_still_evaluate() {
        // min > max rejects every value through one bound or the other.
        let err = validate(123, |v, n| {
            v.property("n", n).has_digits(Some(5), Some(2));
        })
        .unwrap_err();
        assert_eq!(
            err.violations[0].constraint,
            Constraint::IntegerDigits { min: Some(5), max: Some(2) }
        );
    }
}
