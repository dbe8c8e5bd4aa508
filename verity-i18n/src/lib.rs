//! Locale-resolved messages for verity violation reports
//!
//! Turns the structured [`Violation`](verity_core::Violation)s produced
//! by `verity-core` into human-readable messages. Ships message tables
//! for English and Brazilian Portuguese plus a locale-neutral default
//! table; custom bundles can be registered at startup for additional
//! locales or to override individual templates.
//!
//! Resolution walks exact locale tag, then language only, then the
//! default table. A key missing everywhere renders as itself.
//!
//! # Examples
//!
//! ```
//! use verity_core::validate;
//! use verity_i18n::{Locale, MapToI18n};
//!
//! #[derive(Debug)]
//! struct Employee { name: String }
//!
//! let employee = Employee { name: String::new() };
//! let err = validate(&employee, |v, e| {
//!     v.property("name", &e.name).is_not_blank();
//! })
//! .unwrap_err();
//!
//! let messages = err.map_to_i18n(&Locale::pt_br());
//! assert_eq!(messages[0].message, "Não deve estar em branco");
//! ```
//!
//! Registering a custom bundle:
//!
//! ```
//! use verity_i18n::{register_bundle, Locale, MessageBundle};
//!
//! let mut bundle = MessageBundle::new();
//! bundle.add("constraints.not_blank", "Ne doit pas être vide");
//! register_bundle(&Locale::new("fr", None::<&str>), bundle);
//! ```

mod bundle;
mod catalog;
mod error;
mod locale;
mod render;

pub use bundle::MessageBundle;
pub use catalog::{register_bundle, Catalog};
pub use error::I18nError;
pub use locale::Locale;
pub use render::{I18nViolation, MapToI18n};

/// Result type for i18n operations.
pub type Result<T> = std::result::Result<T, I18nError>;
