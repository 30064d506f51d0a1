//! Charforge domain: catalog data, standard-array stat allocation and the
//! character record produced by a finished creation wizard.
//!
//! Everything here is pure. Persistence lives in `charforge-store` and the
//! wizard screens in `charforge-shell`.

pub mod allocation;
pub mod catalog;
pub mod draft;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use allocation::{BaseChoice, StatAllocation, STANDARD_ARRAY};
pub use catalog::Catalog;
pub use draft::CharacterDraft;
pub use entities::{
    validate_character_name, CharacterRecord, ClassDefinition, EquipmentSelection,
    RaceDefinition,
};
pub use error::DomainError;
pub use value_objects::{ability_modifier, Ability, AbilityScore, AbilityScores, EquipmentCategory};
