//! Domain entities - catalog definitions and the finished character record

mod character_class;
mod character_record;
mod race;

pub use character_class::ClassDefinition;
pub use character_record::{validate_character_name, CharacterRecord, EquipmentSelection};
pub use race::RaceDefinition;
