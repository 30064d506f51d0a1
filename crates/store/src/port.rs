//! Character store port.
//!
//! Abstracts persistence so the shell can run against the filesystem adapter
//! or a mock in tests.

use chrono::{DateTime, Utc};

use charforge_domain::CharacterRecord;

use crate::error::StoreError;

/// A stored character name with the time it was last saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSummary {
    pub name: String,
    pub saved_at: DateTime<Utc>,
}

/// Persists finished characters keyed by name.
///
/// The character name is the primary key: saving a name that already exists
/// replaces the stored record with no merge.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait CharacterStore {
    /// Write the record, overwriting any record with the same name.
    fn save(&self, record: &CharacterRecord) -> Result<(), StoreError>;

    /// Names of all stored characters, each exactly once, in no particular order.
    fn list(&self) -> Result<Vec<String>, StoreError>;

    /// Like [`CharacterStore::list`], with each record's last save time.
    fn list_summaries(&self) -> Result<Vec<CharacterSummary>, StoreError>;

    /// Raw stored text for display.
    fn load(&self, name: &str) -> Result<String, StoreError>;

    /// Remove a stored character. Fails with `NotFound` if it isn't stored.
    fn delete(&self, name: &str) -> Result<(), StoreError>;
}
