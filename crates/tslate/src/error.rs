//! Error types for catalog operations

use thiserror::Error;

/// Errors produced while parsing a Linguist `.ts` document.
///
/// Every variant carries the line on which the problem was detected so the
/// inspection tool can point translators at the offending spot.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input ended inside an open element
    #[error("unexpected end of input at line {line}, expected {expected}")]
    UnexpectedEof { expected: String, line: u32 },

    /// A tag or token other than the one the grammar requires
    #[error("unexpected {found} at line {line}, expected {expected}")]
    Unexpected {
        expected: String,
        found: String,
        line: u32,
    },

    /// A required child element was absent
    #[error("missing <{element}> in <{parent}> ending at line {line}")]
    MissingElement {
        element: &'static str,
        parent: &'static str,
        line: u32,
    },

    /// A required attribute was absent
    #[error("missing '{attribute}' attribute on <{tag}> at line {line}")]
    MissingAttribute {
        attribute: &'static str,
        tag: &'static str,
        line: u32,
    },

    /// The root element's language attribute is not a usable locale code
    #[error("invalid language identifier '{value}' at line {line}")]
    InvalidLanguage { value: String, line: u32 },
}

/// Errors that can occur while loading or managing catalogs.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A locale code could not be parsed
    #[error("invalid locale identifier: {0}")]
    InvalidLocale(String),

    /// The translation source was structurally malformed
    #[error("failed to parse translation source: {0}")]
    Parse(#[from] ParseError),

    /// No translation file exists for the locale under the resource directory
    #[error("no translation file for locale {locale} under {dir}")]
    ResourceNotFound { locale: String, dir: String },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
