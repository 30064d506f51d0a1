//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use charforge_domain::Catalog;
use charforge_store::FileCharacterStore;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding one file per character
    pub characters_dir: PathBuf,
    /// Extension of stored character files
    pub file_extension: String,
    /// JSON catalog replacing the built-in races and classes
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            characters_dir: PathBuf::from(FileCharacterStore::DEFAULT_DIR),
            file_extension: FileCharacterStore::DEFAULT_EXTENSION.to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            characters_dir: lookup("CHARFORGE_CHARACTERS_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.characters_dir),
            file_extension: lookup("CHARFORGE_FILE_EXTENSION")
                .map(|v| v.trim().trim_start_matches('.').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.file_extension),
            catalog_path: lookup("CHARFORGE_CATALOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog = Catalog::from_json(&json)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            races = catalog.races().len(),
            classes = catalog.classes().len(),
            "Loaded catalog override"
        );
        Ok(catalog)
    }

    pub fn store(&self) -> FileCharacterStore {
        FileCharacterStore::new(&self.characters_dir).with_extension(&self.file_extension)
    }
}
