//! Core validation engine for verity
//!
//! Provides the constraint evaluator and the violation collector: a
//! `validate` call runs a block of declarative checks over one object
//! graph, collects every failure (it never stops at the first), and
//! either returns the object unchanged or fails once with the complete
//! report.
//!
//! # Examples
//!
//! ## Basic validation
//!
//! ```
//! use verity_core::validate;
//!
//! struct Employee {
//!     id: i32,
//!     name: String,
//! }
//!
//! let employee = Employee { id: 1, name: "Ada".to_string() };
//! let employee = validate(employee, |v, e| {
//!     v.property("id", &e.id).is_positive();
//!     v.property("name", &e.name).is_not_blank().has_size(Some(1), Some(80));
//! })
//! .unwrap();
//! # assert_eq!(employee.id, 1);
//! ```
//!
//! ## Collecting every violation
//!
//! ```
//! use verity_core::{Constraint, validate};
//!
//! let err = validate(-3, |v, n| {
//!     v.property("count", n).is_positive();
//!     v.property("count", n).is_between(&0, &10);
//! })
//! .unwrap_err();
//!
//! // Both failed checks are reported; nothing stops at the first.
//! assert_eq!(err.len(), 2);
//! assert_eq!(err.violations[0].property, "count");
//! ```
//!
//! ## Nested object graphs
//!
//! ```
//! use verity_core::validate;
//!
//! #[derive(Debug)]
//! struct Company {
//!     valuation: f64,
//! }
//! #[derive(Debug)]
//! struct Employee {
//!     company: Company,
//! }
//!
//! let employee = Employee { company: Company { valuation: 0.0 } };
//! let err = validate(employee, |v, e| {
//!     v.nested("company", &e.company, |v, c| {
//!         v.property("valuation", &c.valuation).is_positive();
//!     });
//! })
//! .unwrap_err();
//! assert_eq!(err.violations[0].property, "company.valuation");
//! ```

mod checks;
mod constraint;
mod traits;
mod validator;
mod value;
mod violation;

pub use constraint::Constraint;
pub use traits::{CalendarDay, Digits, Numeric};
pub use validator::{Property, Validator, validate};
pub use value::{ToValue, Value};
pub use violation::{ConstraintViolationError, Violation};
