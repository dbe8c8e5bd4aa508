//! Locale representation and parsing

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale: language code plus optional region.
///
/// The *fallback* locale has an empty language and owns the default
/// message templates; every resolution chain ends there.
///
/// # Examples
///
/// ```
/// use verity_i18n::Locale;
/// use std::str::FromStr;
///
/// let en = Locale::en();
/// let pt_br = Locale::from_str("pt-BR").unwrap();
/// assert_eq!(pt_br.tag(), "pt-BR");
/// assert_eq!(pt_br.language_only().tag(), "pt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639-1, e.g. "en", "pt"); empty for the
    /// fallback locale.
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g. "US", "BR")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// The fallback locale holding the default templates.
    pub fn fallback() -> Self {
        Self {
            language: String::new(),
            region: None,
        }
    }

    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    pub fn pt_br() -> Self {
        Self::new("pt", Some("BR"))
    }

    /// Parse from a BCP 47-style tag (e.g. "en-US", "pt_BR").
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split(['-', '_']).collect();

        if parts.is_empty() || parts[0].is_empty() {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let language = parts[0].to_lowercase();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let mut region = None;
        for part in parts.iter().skip(1) {
            if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                // UN M.49 numeric region
                region = Some(part.to_string());
            } else {
                return Err(I18nError::InvalidLocale(tag.to_string()));
            }
        }

        Ok(Self { language, region })
    }

    /// The locale tag (e.g. "en-US"); empty for the fallback locale.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Language-only variant (strips the region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
