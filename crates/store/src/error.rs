//! Store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored file matches the requested name.
    #[error("Character not found: {name}")]
    NotFound { name: String },

    /// The name can't be used as a file key.
    #[error("Invalid character name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Filesystem failure (permissions, disk full, ...).
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored file could not be parsed back into a sheet.
    #[error("Malformed character file: {0}")]
    Format(String),
}

impl StoreError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Maps an I/O error for `name`, turning a missing file into `NotFound`.
    pub(crate) fn from_io(err: std::io::Error, name: &str) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::not_found(name)
        } else {
            Self::Io(err)
        }
    }
}
