//! Plural-form selection rules for different languages
//!
//! A plural-bearing catalog entry stores one translation variant per
//! grammatical form of its language. The rule maps a count to the index of
//! the variant to display. Rules live in a single table keyed by language
//! code so adding a language is a data change, not new arithmetic at call
//! sites.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A language's plural rule: how many forms it has and which form a given
/// count selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One form for every count (Vietnamese, Japanese, ...)
    SingleForm,
    /// Singular for exactly 1, plural otherwise (English, German, ...)
    OneOther,
    /// Singular for 0 and 1, plural otherwise (French)
    ZeroOne,
    /// Three forms selected by the mod-10/mod-100 rule (Ukrainian, Russian, ...)
    Slavic,
    /// Three forms: 1, 2-4, other (Czech, Slovak)
    CzechSlovak,
    /// Three forms: 1, then the mod-10/mod-100 rule (Polish)
    Polish,
}

static RULES: Lazy<HashMap<&'static str, PluralRule>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for lang in ["vi", "ja", "ko", "zh", "th", "id", "fa"] {
        table.insert(lang, PluralRule::SingleForm);
    }
    for lang in ["en", "de", "nl", "sv", "da", "it", "es", "pt", "el", "fi"] {
        table.insert(lang, PluralRule::OneOther);
    }
    table.insert("fr", PluralRule::ZeroOne);
    for lang in ["uk", "ru", "be", "sr", "hr", "bs"] {
        table.insert(lang, PluralRule::Slavic);
    }
    table.insert("cs", PluralRule::CzechSlovak);
    table.insert("sk", PluralRule::CzechSlovak);
    table.insert("pl", PluralRule::Polish);
    table
});

impl PluralRule {
    /// Look up the rule for a language code. Unlisted languages get the
    /// common singular/plural split.
    pub fn for_language(language: &str) -> Self {
        RULES.get(language).copied().unwrap_or(Self::OneOther)
    }

    /// Number of grammatical forms this rule distinguishes
    pub fn forms(self) -> usize {
        match self {
            Self::SingleForm => 1,
            Self::OneOther | Self::ZeroOne => 2,
            Self::Slavic | Self::CzechSlovak | Self::Polish => 3,
        }
    }

    /// The variant index a count selects, always in `0..self.forms()`
    pub fn index(self, n: u64) -> usize {
        match self {
            Self::SingleForm => 0,
            Self::OneOther => {
                if n == 1 {
                    0
                } else {
                    1
                }
            }
            Self::ZeroOne => {
                if n <= 1 {
                    0
                } else {
                    1
                }
            }
            Self::Slavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if matches!(n % 10, 2..=4) && !matches!(n % 100, 12..=14) {
                    1
                } else {
                    2
                }
            }
            Self::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            Self::Polish => {
                if n == 1 {
                    0
                } else if matches!(n % 10, 2..=4) && !matches!(n % 100, 12..=14) {
                    1
                } else {
                    2
                }
            }
        }
    }
}
