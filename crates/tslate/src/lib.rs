//! Translation catalogs for Qt Linguist `.ts` sources
//!
//! This crate loads Linguist translation-source files and resolves UI
//! strings at render time. It includes:
//!
//! - Parsing of the `.ts` context/message/numerusform structure
//! - Catalog lookup keyed by `(context, source string)`
//! - Table-driven plural-form selection per language
//! - `%1`/`%n` placeholder substitution
//! - Atomic catalog swaps with fallback to source text on failure
//!
//! # Example
//!
//! ```rust
//! use tslate::{Locale, ResourceLocator, TranslationManager};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let locator = ResourceLocator::new("locale", "wallet");
//! let manager = TranslationManager::new(locator, Locale::from_code("en")?);
//! manager.set_locale(&Locale::from_code("uk")?);
//!
//! let title = manager.tr("SendCoinsDialog", "Send Coins");
//! let status = manager.trn("ChainSyncOverlay", "%n active connection(s)", 3);
//! # let _ = (title, status);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod locale;
pub mod manager;
pub mod parser;
pub mod plural;
mod reader;
pub mod resource;

pub use catalog::{CatalogEntry, TranslationCatalog};
pub use error::{CatalogError, CatalogResult, ParseError};
pub use format::format;
pub use locale::Locale;
pub use manager::TranslationManager;
pub use parser::{parse, Translation, TsContext, TsDocument, TsMessage};
pub use plural::PluralRule;
pub use resource::ResourceLocator;
