//! Violation collector and the `validate` entry point
//!
//! One [`Validator`] is created per `validate` call, receives every
//! failed check in call order, and is finalized into either the
//! unchanged target (no violations) or a [`ConstraintViolationError`]
//! carrying the complete list.

use crate::constraint::Constraint;
use crate::value::ToValue;
use crate::violation::{ConstraintViolationError, Violation};

/// Validate `target` against the checks issued inside `block`.
///
/// The block receives a [`Validator`] and a reference to the target.
/// Checks never fail eagerly: every violation across the whole block is
/// collected first, then the call either returns the target unchanged or
/// fails once with the full report.
///
/// # Examples
///
/// ```
/// use verity_core::{validate, ConstraintViolationError};
///
/// struct Employee {
///     id: i32,
///     name: String,
/// }
///
/// let employee = Employee { id: 1, name: "Ada".to_string() };
/// let employee = validate(employee, |v, e| {
///     v.property("id", &e.id).is_positive();
///     v.property("name", &e.name).is_not_blank();
/// })
/// .unwrap();
/// assert_eq!(employee.id, 1);
/// ```
pub fn validate<T, F>(target: T, block: F) -> Result<T, ConstraintViolationError>
where
    F: FnOnce(&mut Validator, &T),
{
    let mut validator = Validator::new();
    block(&mut validator, &target);
    if validator.violations.is_empty() {
        Ok(target)
    } else {
        Err(ConstraintViolationError::new(validator.violations))
    }
}

/// Collector for one validation pass over one object graph.
///
/// Holds the current property-path prefix (empty at the root, extended
/// by [`Validator::nested`]) and the violations accumulated so far.
pub struct Validator {
    prefix: String,
    violations: Vec<Violation>,
}

impl Validator {
    fn new() -> Self {
        Self {
            prefix: String::new(),
            violations: Vec::new(),
        }
    }

    /// Start checks for one property.
    ///
    /// Accepts either a plain reference (`&e.id`) or an optional one
    /// (`e.name.as_ref()`); an absent value passes every check except
    /// `is_not_null`.
    pub fn property<'a, 'v, T: ?Sized>(
        &'a mut self,
        name: impl Into<String>,
        value: impl Into<Option<&'v T>>,
    ) -> Property<'a, 'v, T> {
        Property {
            validator: self,
            name: name.into(),
            value: value.into(),
        }
    }

    /// Descend into a nested object, prefixing `"<name>."` onto every
    /// property path recorded inside the block. An absent nested value
    /// skips the block entirely.
    pub fn nested<'v, C, F>(
        &mut self,
        name: &str,
        value: impl Into<Option<&'v C>>,
        block: F,
    ) -> &mut Self
    where
        C: 'v,
        F: FnOnce(&mut Validator, &C),
    {
        if let Some(child) = value.into() {
            let saved_len = self.prefix.len();
            self.prefix.push_str(name);
            self.prefix.push('.');
            block(self, child);
            self.prefix.truncate(saved_len);
        }
        self
    }

    pub(crate) fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    fn path_for(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }
}

/// Handle for one property within a validation block.
///
/// Check methods consume and return the handle, so checks chain:
/// `v.property("name", &e.name).is_not_blank().has_size(Some(1), Some(80))`.
pub struct Property<'a, 'v, T: ?Sized> {
    validator: &'a mut Validator,
    name: String,
    value: Option<&'v T>,
}

impl<'a, 'v, T: ToValue + ?Sized> Property<'a, 'v, T> {
    /// Core evaluation contract: an absent value passes, a present value
    /// is run through `test`, and a failure records one violation with a
    /// snapshot of the value and the descriptor built by `constraint`.
    pub(crate) fn check(
        self,
        test: impl FnOnce(&T) -> bool,
        constraint: impl FnOnce(&T) -> Constraint,
    ) -> Self {
        if let Some(value) = self.value {
            if !test(value) {
                let path = self.validator.path_for(&self.name);
                self.validator
                    .record(Violation::new(path, Some(value.to_value()), constraint(value)));
            }
        }
        self
    }

    /// The inspected value must be absent.
    pub fn is_null(self) -> Self {
        if let Some(value) = self.value {
            let path = self.validator.path_for(&self.name);
            self.validator
                .record(Violation::new(path, Some(value.to_value()), Constraint::Null));
        }
        self
    }

    /// The inspected value must be present. This is the only check that
    /// fails on an absent value.
    pub fn is_not_null(self) -> Self {
        if self.value.is_none() {
            let path = self.validator.path_for(&self.name);
            self.validator
                .record(Violation::new(path, None, Constraint::NotNull));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ToValue;

    #[derive(Debug)]
    struct Target {
        id: i32,
        note: Option<String>,
    }

    #[test]
    fn test_success_returns_target_unchanged() {
        let target = Target { id: 7, note: None };
        let target = validate(target, |v, t| {
            v.property("id", &t.id).is_not_null();
        })
        .unwrap();
        assert_eq!(target.id, 7);
    }

    #[test]
    fn test_absent_value_fails_only_is_not_null() {
        let target = Target { id: 7, note: None };
        let err = validate(target, |v, t| {
            v.property("note", t.note.as_ref()).is_not_blank();
            v.property("note", t.note.as_ref()).is_not_null();
        })
        .unwrap_err();

        assert_eq!(err.len(), 1);
        assert_eq!(err.violations[0].property, "note");
        assert_eq!(err.violations[0].value, None);
        assert_eq!(err.violations[0].constraint, Constraint::NotNull);
    }

    #[test]
    fn test_present_value_fails_is_null() {
        let target = Target { id: 7, note: Some("x".to_string()) };
        let err = validate(target, |v, t| {
            v.property("note", t.note.as_ref()).is_null();
        })
        .unwrap_err();

        assert_eq!(err.violations[0].constraint, Constraint::Null);
        assert_eq!(err.violations[0].value, Some("x".to_value()));
    }

    #[test]
    fn test_violations_accumulate_in_call_order() {
        let target = Target { id: -1, note: None };
        let err = validate(target, |v, t| {
            v.property("note", t.note.as_ref()).is_not_null();
            v.property("id", &t.id).is_positive();
        })
        .unwrap_err();

        let paths: Vec<_> = err.violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(paths, vec!["note", "id"]);
    }

    #[test]
    fn test_nested_prefix_restored_after_block() {
        #[derive(Debug)]
        struct Inner {
            n: i32,
        }
        #[derive(Debug)]
        struct Outer {
            inner: Inner,
            id: i32,
        }

        let outer = Outer { inner: Inner { n: -1 }, id: -2 };
        let err = validate(outer, |v, o| {
            v.nested("inner", &o.inner, |v, i| {
                v.property("n", &i.n).is_positive();
            });
            v.property("id", &o.id).is_positive();
        })
        .unwrap_err();

        let paths: Vec<_> = err.violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(paths, vec!["inner.n", "id"]);
    }

    #[test]
    fn test_nested_absent_value_skips_block() {
        struct Inner {
            n: i32,
        }
        struct Outer {
            inner: Option<Inner>,
        }

        let outer = Outer { inner: None };
        let result = validate(outer, |v, o| {
            v.nested("inner", o.inner.as_ref(), |v, i| {
                v.property("n", &i.n).is_positive();
            });
        });
        assert!(result.is_ok());
    }
}
