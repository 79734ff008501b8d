//! Catalog lifecycle and atomic publication

use crate::catalog::TranslationCatalog;
use crate::error::CatalogResult;
use crate::format;
use crate::locale::Locale;
use crate::parser;
use crate::resource::ResourceLocator;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

/// Owns the active catalog and swaps it when the locale changes.
///
/// The catalog behind [`catalog`](Self::catalog) is immutable; a locale
/// change builds a complete replacement and publishes it in one atomic
/// store. Readers holding an earlier snapshot keep reading it unharmed, so
/// no lookup ever observes a half-loaded catalog.
#[derive(Debug)]
pub struct TranslationManager {
    locator: ResourceLocator,
    active: ArcSwap<TranslationCatalog>,
}

impl TranslationManager {
    /// Create a manager with an identity catalog for `default_locale`
    /// installed. Nothing is read from disk until a locale is loaded.
    pub fn new(locator: ResourceLocator, default_locale: Locale) -> Self {
        Self {
            locator,
            active: ArcSwap::from_pointee(TranslationCatalog::empty(default_locale)),
        }
    }

    /// Load a locale's catalog and publish it.
    ///
    /// Strict variant: on any failure the error propagates and the
    /// previously active catalog stays in place untouched.
    pub fn load_locale(&self, locale: &Locale) -> CatalogResult<()> {
        let content = self.locator.read(locale)?;
        let doc = parser::parse(&content)?;
        let catalog = TranslationCatalog::from_document(doc);
        info!(
            locale = %catalog.locale(),
            entries = catalog.len(),
            "publishing translation catalog"
        );
        self.active.store(Arc::new(catalog));
        Ok(())
    }

    /// Switch locale, degrading instead of failing.
    ///
    /// When the file is missing or malformed this publishes an identity
    /// catalog for the requested locale, so every lookup resolves to source
    /// text and the host keeps running.
    pub fn set_locale(&self, locale: &Locale) {
        if let Err(error) = self.load_locale(locale) {
            warn!(
                locale = %locale,
                %error,
                "failed to load locale, falling back to source strings"
            );
            self.active
                .store(Arc::new(TranslationCatalog::empty(locale.clone())));
        }
    }

    /// A snapshot of the active catalog. Cheap, lock-free, and stable for
    /// as long as the caller holds it.
    pub fn catalog(&self) -> Arc<TranslationCatalog> {
        self.active.load_full()
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.catalog().locale().clone()
    }

    /// Translate an ordinary string.
    pub fn tr(&self, context: &str, source: &str) -> String {
        self.catalog().lookup(context, source).to_string()
    }

    /// Translate a plural-bearing string, substituting `%n` with the count.
    pub fn trn(&self, context: &str, source: &str, count: u64) -> String {
        let catalog = self.catalog();
        let variant = catalog.lookup_plural(context, source, count);
        format::format(variant, &[&count.to_string()])
    }

    pub fn locator(&self) -> &ResourceLocator {
        &self.locator
    }
}
