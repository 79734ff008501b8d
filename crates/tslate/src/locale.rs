//! Locale identifiers and utilities

use crate::error::{CatalogError, CatalogResult};
use crate::plural::PluralRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale identifier as carried by `.ts` files: a lowercase language code
/// plus an optional uppercase territory (`uk`, `vi_VN`).
///
/// The set is open. Translation files name their own locale in the root
/// element's `language` attribute, so this is a parsed value, not a closed
/// enum of supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    territory: Option<String>,
}

impl Locale {
    /// Parse a locale from a code such as `uk`, `vi_VN`, or `vi-VN`.
    ///
    /// Both `_` and `-` are accepted as separators on input; `_` is the
    /// canonical form on output, matching the attribute values in the data.
    pub fn from_code(code: &str) -> CatalogResult<Self> {
        let mut parts = code.splitn(2, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let territory = parts.next();

        if language.is_empty()
            || language.len() > 3
            || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(CatalogError::InvalidLocale(code.to_string()));
        }
        if let Some(t) = territory {
            if t.is_empty() || !t.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(CatalogError::InvalidLocale(code.to_string()));
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            territory: territory.map(|t| t.to_ascii_uppercase()),
        })
    }

    /// Get the language code for this locale
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Get the territory code, if any
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Get the full code for this locale (`vi_VN`)
    pub fn code(&self) -> String {
        match &self.territory {
            Some(t) => format!("{}_{}", self.language, t),
            None => self.language.clone(),
        }
    }

    /// This locale with the territory stripped (`vi_VN` -> `vi`)
    pub fn without_territory(&self) -> Self {
        Self {
            language: self.language.clone(),
            territory: None,
        }
    }

    /// The plural rule for this locale's language
    pub fn plural_rule(&self) -> PluralRule {
        PluralRule::for_language(&self.language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if let Some(t) = &self.territory {
            write!(f, "_{t}")?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
