//! Locating translation files on disk

use crate::error::{CatalogError, CatalogResult};
use crate::locale::Locale;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves locales to `.ts` files under a base directory.
///
/// Files are named `<prefix>_<code>.ts` (`wallet_uk.ts`,
/// `wallet_vi_VN.ts`). A territory-qualified locale first tries its full
/// code, then the bare language, so `vi_VN` still loads from `wallet_vi.ts`
/// when no Vietnam-specific file ships.
#[derive(Debug, Clone)]
pub struct ResourceLocator {
    base_dir: PathBuf,
    prefix: String,
}

impl ResourceLocator {
    pub fn new<P: AsRef<Path>>(base_dir: P, prefix: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            prefix: prefix.into(),
        }
    }

    /// Candidate paths for a locale, most specific first.
    pub fn candidates(&self, locale: &Locale) -> Vec<PathBuf> {
        let mut paths = vec![self.path_for(&locale.code())];
        if locale.territory().is_some() {
            paths.push(self.path_for(locale.language()));
        }
        paths
    }

    /// The first candidate that exists on disk.
    pub fn locate(&self, locale: &Locale) -> Option<PathBuf> {
        self.candidates(locale).into_iter().find(|p| p.is_file())
    }

    /// Read the translation source for a locale.
    pub fn read(&self, locale: &Locale) -> CatalogResult<String> {
        let path = self
            .locate(locale)
            .ok_or_else(|| CatalogError::ResourceNotFound {
                locale: locale.code(),
                dir: self.base_dir.display().to_string(),
            })?;
        debug!(locale = %locale, path = %path.display(), "reading translation source");
        Ok(fs::read_to_string(path)?)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, code: &str) -> PathBuf {
        self.base_dir.join(format!("{}_{}.ts", self.prefix, code))
    }
}
