//! Filesystem adapter for the character store.
//!
//! One text file per character, `<name>.<extension>`, inside a single storage
//! directory that is created on first use. Writes go to a temporary file in
//! the same directory and are renamed over the target, so a failed write
//! never leaves a partial file that [`CharacterStore::list`] would pick up.

use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use charforge_domain::{validate_character_name, CharacterRecord};

use crate::error::StoreError;
use crate::port::{CharacterStore, CharacterSummary};
use crate::sheet;

/// Flat-file character store.
#[derive(Debug, Clone)]
pub struct FileCharacterStore {
    root: PathBuf,
    extension: String,
}

impl FileCharacterStore {
    pub const DEFAULT_DIR: &'static str = "characters";
    pub const DEFAULT_EXTENSION: &'static str = "txt";

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Uses a different file extension (with or without the leading dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    fn ensure_root(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Resolves the file for `name`, refusing names that can't be file keys.
    fn path_for(&self, name: &str) -> Result<(String, PathBuf), StoreError> {
        let key = validate_character_name(name).map_err(|e| StoreError::InvalidName {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let path = self.root.join(format!("{}.{}", key, self.extension));
        Ok((key, path))
    }

    /// Stored names paired with their file paths.
    fn stored_files(&self) -> Result<Vec<(String, PathBuf)>, StoreError> {
        self.ensure_root()?;
        let mut found = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if !stem.is_empty() => found.push((stem.to_string(), path.clone())),
                _ => tracing::warn!(path = %path.display(), "Skipping unreadable file name"),
            }
        }
        Ok(found)
    }
}

impl CharacterStore for FileCharacterStore {
    fn save(&self, record: &CharacterRecord) -> Result<(), StoreError> {
        let (key, path) = self.path_for(record.name())?;
        self.ensure_root()?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".charforge-")
            .suffix(".tmp")
            .tempfile_in(&self.root)?;
        tmp.write_all(sheet::render(record).as_bytes())?;
        tmp.as_file().sync_all()?;
        let replaced = path.is_file();
        tmp.persist(&path).map_err(|e| StoreError::Io(e.error))?;

        tracing::info!(name = %key, path = %path.display(), replaced, "Saved character");
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>, StoreError> {
        let names: Vec<String> = self
            .stored_files()?
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        tracing::debug!(count = names.len(), "Listed characters");
        Ok(names)
    }

    fn list_summaries(&self) -> Result<Vec<CharacterSummary>, StoreError> {
        self.stored_files()?
            .into_iter()
            .map(|(name, path)| {
                let modified = fs::metadata(&path)?.modified()?;
                Ok(CharacterSummary {
                    name,
                    saved_at: DateTime::<Utc>::from(modified),
                })
            })
            .collect()
    }

    fn load(&self, name: &str) -> Result<String, StoreError> {
        let (key, path) = self.path_for(name)?;
        fs::read_to_string(&path).map_err(|e| StoreError::from_io(e, &key))
    }

    fn delete(&self, name: &str) -> Result<(), StoreError> {
        let (key, path) = self.path_for(name)?;
        fs::remove_file(&path).map_err(|e| StoreError::from_io(e, &key))?;
        tracing::info!(name = %key, "Deleted character");
        Ok(())
    }
}
