//! Process-wide message catalog
//!
//! The catalog holds one [`MessageBundle`] per locale tag. The embedded
//! tables load lazily on first use, and custom bundles may be registered
//! idempotently at startup; after that the catalog is read-only.

use crate::bundle::MessageBundle;
use crate::locale::Locale;
use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

static DEFAULT_JSON: &str = include_str!("../locales/default.json");
static EN_JSON: &str = include_str!("../locales/en.json");
static PT_BR_JSON: &str = include_str!("../locales/pt-BR.json");

static CATALOG: Lazy<RwLock<Catalog>> = Lazy::new(|| RwLock::new(Catalog::embedded()));

/// Message bundles for every known locale, with deterministic fallback:
/// exact tag, then language-only, then the default templates.
#[derive(Debug, Default)]
pub struct Catalog {
    bundles: HashMap<String, MessageBundle>,
}

impl Catalog {
    /// Catalog holding only the embedded tables.
    pub fn embedded() -> Self {
        let mut catalog = Self::default();
        for (locale, json) in [
            (Locale::fallback(), DEFAULT_JSON),
            (Locale::en(), EN_JSON),
            (Locale::pt_br(), PT_BR_JSON),
        ] {
            // Compile-time assets; a parse failure is a build defect.
            let bundle =
                MessageBundle::from_json(json).expect("embedded message bundle is valid JSON");
            catalog.add_bundle(&locale, bundle);
        }
        debug!("loaded embedded message catalog");
        catalog
    }

    /// Add a bundle for a locale, merging over any existing one.
    pub fn add_bundle(&mut self, locale: &Locale, bundle: MessageBundle) {
        self.bundles
            .entry(locale.tag())
            .or_default()
            .merge(bundle);
    }

    /// Resolve a template through the fallback chain.
    pub fn template(&self, key: &str, locale: &Locale) -> Option<&str> {
        if let Some(template) = self.bundles.get(&locale.tag()).and_then(|b| b.get(key)) {
            return Some(template);
        }
        if locale.region.is_some() {
            let lang_only = locale.language_only();
            if let Some(template) = self.bundles.get(&lang_only.tag()).and_then(|b| b.get(key)) {
                return Some(template);
            }
        }
        self.bundles
            .get(&Locale::fallback().tag())
            .and_then(|b| b.get(key))
    }

    /// Locales with a registered bundle.
    pub fn locales(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.bundles.keys().cloned().collect();
        tags.sort();
        tags
    }
}

/// Register a custom bundle in the process-wide catalog.
///
/// Intended for startup, before message rendering begins; registering
/// the same bundle twice is harmless.
pub fn register_bundle(locale: &Locale, bundle: MessageBundle) {
    debug!(
        "registering message bundle for locale '{}' ({} templates)",
        locale.tag(),
        bundle.len()
    );
    CATALOG.write().add_bundle(locale, bundle);
}

/// Resolve a template from the process-wide catalog, falling back to
/// the key itself when no bundle anywhere defines it.
pub(crate) fn resolve_template(key: &str, locale: &Locale) -> String {
    let catalog = CATALOG.read();
    catalog
        .template(key, locale)
        .map(|t| t.to_string())
        .unwrap_or_else(|| key.to_string())
}
