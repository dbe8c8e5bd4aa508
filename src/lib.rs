// Verity - Declarative validation for object graphs
//
// This library provides a fluent validation DSL: assert constraints on
// property values, collect every violation, and render locale-resolved
// reports.

// Re-export core functionality
pub use verity_core::*;

// Re-export optional crates
#[cfg(feature = "i18n")]
pub use verity_i18n;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CalendarDay,
        Constraint,
        ConstraintViolationError,
        Digits,
        Numeric,
        Property,
        ToValue,
        Validator,
        Value,
        Violation,
        validate,
    };

    #[cfg(feature = "i18n")]
    pub use verity_i18n::{I18nViolation, Locale, MapToI18n, MessageBundle, register_bundle};
}
