//! Capability traits for the check families
//!
//! The same predicate logic serves every numeric and temporal property
//! type; these traits are the seams it is written against. Each numeric
//! width is a thin impl instead of a re-derived check family.

use crate::value::ToValue;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;

/// Numeric types with zero/one constants, for the sign check family.
///
/// The constants are taken *from* the inspected value so that types with
/// a runtime representation detail can preserve it: a decimal of scale 1
/// yields a zero of scale 1, which renders as `0.0` in messages.
pub trait Numeric: ToValue + PartialOrd + Sized {
    fn zero(&self) -> Self;
    fn one(&self) -> Self;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(impl Numeric for $t {
            fn zero(&self) -> $t {
                0
            }
            fn one(&self) -> $t {
                1
            }
        })*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize);

impl Numeric for f32 {
    fn zero(&self) -> f32 {
        0.0
    }
    fn one(&self) -> f32 {
        1.0
    }
}

impl Numeric for f64 {
    fn zero(&self) -> f64 {
        0.0
    }
    fn one(&self) -> f64 {
        1.0
    }
}

impl Numeric for Decimal {
    fn zero(&self) -> Decimal {
        Decimal::new(0, self.scale())
    }
    fn one(&self) -> Decimal {
        let mut one = Decimal::ONE;
        one.rescale(self.scale());
        one
    }
}

/// Decimal digit counting for the digit-count check family.
///
/// Counts ignore the sign and are taken over the value's native decimal
/// rendering: the integer part of `-47.73` has 2 digits, the fractional
/// part 2.
pub trait Digits {
    fn integer_digits(&self) -> usize;
    fn decimal_digits(&self) -> usize;
}

macro_rules! impl_digits_signed {
    ($($t:ty),*) => {
        $(impl Digits for $t {
            fn integer_digits(&self) -> usize {
                self.unsigned_abs().to_string().len()
            }
            fn decimal_digits(&self) -> usize {
                0
            }
        })*
    };
}

macro_rules! impl_digits_unsigned {
    ($($t:ty),*) => {
        $(impl Digits for $t {
            fn integer_digits(&self) -> usize {
                self.to_string().len()
            }
            fn decimal_digits(&self) -> usize {
                0
            }
        })*
    };
}

impl_digits_signed!(i8, i16, i32, i64, i128);
impl_digits_unsigned!(u8, u16, u32, u64, usize);

macro_rules! impl_digits_float {
    ($($t:ty),*) => {
        $(impl Digits for $t {
            fn integer_digits(&self) -> usize {
                format!("{}", self.abs().trunc()).len()
            }
            fn decimal_digits(&self) -> usize {
                // Shortest round-trip form, which switches to exponent
                // notation for small magnitudes (1e-7); expand the
                // exponent back out before counting.
                let repr = format!("{:?}", self.abs());
                match repr.split_once('e') {
                    Some((mantissa, exp)) => {
                        let frac = mantissa.split_once('.').map_or(0, |(_, f)| f.len());
                        let exp: i64 = exp.parse().unwrap_or(0);
                        (frac as i64 - exp).max(0) as usize
                    }
                    None => repr.split_once('.').map_or(0, |(_, f)| f.len()),
                }
            }
        })*
    };
}

impl_digits_float!(f32, f64);

impl Digits for Decimal {
    fn integer_digits(&self) -> usize {
        self.abs().trunc().to_string().len()
    }
    fn decimal_digits(&self) -> usize {
        self.scale() as usize
    }
}

/// Day-granularity view of a date or date-time, for `is_today`.
pub trait CalendarDay {
    /// The calendar date of this value, in the local time zone where the
    /// value carries one.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl CalendarDay for DateTime<Local> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl CalendarDay for DateTime<Utc> {
    fn calendar_day(&self) -> NaiveDate {
        self.with_timezone(&Local).date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_digit_counts_ignore_sign() {
        assert_eq!(9999i32.integer_digits(), 4);
        assert_eq!((-9999i32).integer_digits(), 4);
        assert_eq!(0i32.integer_digits(), 1);
        assert_eq!(i32::MIN.integer_digits(), 10);
    }

    #[test]
    fn test_float_digit_counts() {
        assert_eq!(99.99f64.integer_digits(), 2);
        assert_eq!(99.99f64.decimal_digits(), 2);
        assert_eq!((-0.125f64).integer_digits(), 1);
        assert_eq!((-0.125f64).decimal_digits(), 3);
        assert_eq!(100.0f64.decimal_digits(), 1);
    }

    #[test]
    fn test_float_digit_counts_survive_exponent_rendering() {
        // Magnitudes whose shortest form is exponent notation.
        assert_eq!(0.0000001f64.decimal_digits(), 7);
        assert_eq!(1.5e-7f64.decimal_digits(), 8);
        assert_eq!(0.0000001f64.integer_digits(), 1);
        // Positive exponents carry no fraction.
        assert_eq!(1e300f64.decimal_digits(), 0);
    }

    #[test]
    fn test_decimal_digit_counts_use_scale() {
        let d: Decimal = "1234.500".parse().unwrap();
        assert_eq!(d.integer_digits(), 4);
        assert_eq!(d.decimal_digits(), 3);
    }

    #[test]
    fn test_decimal_zero_preserves_scale() {
        let d: Decimal = "1.0".parse().unwrap();
        assert_eq!(d.zero().to_string(), "0.0");
        assert_eq!(d.one().to_string(), "1.0");
    }

    #[test]
    fn test_calendar_day_truncates_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap();
        assert_eq!(dt.calendar_day(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    }
}
