//! Immutable translation catalog and lookup

use crate::locale::Locale;
use crate::parser::{Translation, TsDocument};
use crate::plural::PluralRule;
use std::collections::HashMap;
use tracing::debug;

/// The stored translation variants for one `(context, source)` key.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    translations: Vec<String>,
    plural: bool,
}

impl CatalogEntry {
    /// The ordered translation variants. One element for ordinary entries,
    /// one per grammatical form for plural-bearing entries.
    pub fn variants(&self) -> &[String] {
        &self.translations
    }

    pub fn is_plural(&self) -> bool {
        self.plural
    }
}

/// All loaded translations for one locale.
///
/// Built once from a parsed document and read-only afterwards, so any number
/// of threads can look strings up without synchronization. Lookups never
/// fail: a missing or empty translation falls back to the source text, which
/// is the display string of the untranslated UI.
#[derive(Debug)]
pub struct TranslationCatalog {
    locale: Locale,
    rule: PluralRule,
    contexts: HashMap<String, HashMap<String, CatalogEntry>>,
    entries: usize,
}

impl TranslationCatalog {
    /// An identity catalog: every lookup resolves to the source text.
    ///
    /// This is what gets published when loading a locale fails, so the UI
    /// degrades to untranslated strings instead of going down.
    pub fn empty(locale: Locale) -> Self {
        let rule = locale.plural_rule();
        Self {
            locale,
            rule,
            contexts: HashMap::new(),
            entries: 0,
        }
    }

    /// Build a catalog from a parsed document.
    ///
    /// When the same `(context, source)` pair occurs more than once, the
    /// last occurrence in file order wins; the data does contain such
    /// duplicates and the override must be deterministic.
    pub fn from_document(doc: TsDocument) -> Self {
        let rule = doc.locale.plural_rule();
        let mut contexts: HashMap<String, HashMap<String, CatalogEntry>> = HashMap::new();
        for context in doc.contexts {
            let table = contexts.entry(context.name).or_default();
            for message in context.messages {
                let entry = match message.translation {
                    Translation::Single(text) => CatalogEntry {
                        translations: vec![text],
                        plural: false,
                    },
                    Translation::Plural(variants) => CatalogEntry {
                        translations: variants,
                        plural: true,
                    },
                };
                table.insert(message.source, entry);
            }
        }
        let entries = contexts.values().map(HashMap::len).sum();
        debug!(
            locale = %doc.locale,
            contexts = contexts.len(),
            entries,
            "built translation catalog"
        );
        Self {
            locale: doc.locale,
            rule,
            contexts,
            entries,
        }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Number of distinct `(context, source)` keys.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// The stored entry for a key, if any.
    pub fn entry(&self, context: &str, source: &str) -> Option<&CatalogEntry> {
        self.contexts.get(context)?.get(source)
    }

    /// The translation for an ordinary string.
    ///
    /// Falls back to `source` when no entry exists or the stored translation
    /// is empty. For a plural-bearing entry this returns the first variant.
    pub fn lookup<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        match self.entry(context, source) {
            Some(entry) => match entry.translations.first() {
                Some(text) if !text.is_empty() => text,
                _ => source,
            },
            None => source,
        }
    }

    /// The plural variant selected by `count` under this locale's rule.
    ///
    /// A rule index beyond the stored variants clamps to the last variant;
    /// translation display must never fail on malformed data. Falls back to
    /// `source` when no entry exists.
    pub fn lookup_plural<'a>(&'a self, context: &str, source: &'a str, count: u64) -> &'a str {
        match self.entry(context, source) {
            Some(entry) if !entry.translations.is_empty() => {
                let index = self.rule.index(count).min(entry.translations.len() - 1);
                &entry.translations[index]
            }
            _ => source,
        }
    }

    /// Context names present in this catalog, in no particular order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }
}
