//! Error types for i18n operations

use thiserror::Error;

/// Errors that can occur while parsing locales or loading bundles.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Failed to parse a message bundle
    #[error("Failed to parse message bundle: {0}")]
    ParseError(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}
