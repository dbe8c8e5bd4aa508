//! Snapshot values
//!
//! A [`Value`] is an owned copy of a property value taken at validation
//! time. Violations carry snapshots rather than references so that later
//! mutation of the validated object cannot change a recorded violation.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Owned snapshot of a validated value.
///
/// Equality is structural and by value: integers compare across widths,
/// floats compare as floats, collections element-wise. `Display` renders
/// each type's native `to_string` form; floats always keep a decimal
/// point (`0.0`, not `0`), decimals keep their scale.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// Any signed or unsigned integer, widened.
    Int(i128),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    Str(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            // The shortest round-trip form always keeps the decimal
            // point, matching the native to-string of floating types.
            Value::F32(v) => write!(f, "{:?}", v),
            Value::F64(v) => write!(f, "{:?}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::Date(v) => write!(f, "{}", v),
            Value::DateTime(v) => write!(f, "{}", v),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Reports serialize the offending value in its rendered form, keeping
// the JSON shape independent of the property's concrete type.
impl Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Conversion into a [`Value`] snapshot.
///
/// Implemented for every property type the evaluator accepts.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_int {
    ($($t:ty),*) => {
        $(impl ToValue for $t {
            fn to_value(&self) -> Value {
                Value::Int(*self as i128)
            }
        })*
    };
}

impl_to_value_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize);

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::F32(*self)
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl ToValue for Decimal {
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl ToValue for DateTime<Local> {
    fn to_value(&self) -> Value {
        Value::DateTime(self.naive_local())
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime(self.naive_utc())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<K: fmt::Display, V: ToValue> ToValue for HashMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

impl<K: fmt::Display, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.to_value()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_rendering_keeps_decimal_point() {
        assert_eq!(0.0f64.to_value().to_string(), "0.0");
        assert_eq!(1.0f32.to_value().to_string(), "1.0");
        assert_eq!((-47.7375833f64).to_value().to_string(), "-47.7375833");
    }

    #[test]
    fn test_decimal_rendering_keeps_scale() {
        let d: Decimal = "1.0".parse().unwrap();
        assert_eq!(d.to_value().to_string(), "1.0");
        let d: Decimal = "0.00".parse().unwrap();
        assert_eq!(d.to_value().to_string(), "0.00");
    }

    #[test]
    fn test_integer_widths_compare_by_value() {
        assert_eq!(10i32.to_value(), 10u8.to_value());
        assert_eq!(10i64.to_value(), 10i128.to_value());
    }

    #[test]
    fn test_list_rendering() {
        let v = vec![1, 2, 3].to_value();
        assert_eq!(v.to_string(), "1, 2, 3");
    }

    #[test]
    fn test_snapshot_is_independent_of_source() {
        let mut name = String::from("original");
        let snapshot = name.to_value();
        name.push_str(" mutated");
        assert_eq!(snapshot, Value::Str("original".to_string()));
    }
}
