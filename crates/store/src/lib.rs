//! Charforge store: persists finished characters as one text file each.

pub mod error;
pub mod file_store;
pub mod port;
pub mod sheet;

pub use error::StoreError;
pub use file_store::FileCharacterStore;
pub use port::{CharacterStore, CharacterSummary};
pub use sheet::CharacterSheet;

#[cfg(any(test, feature = "testing"))]
pub use port::MockCharacterStore;
