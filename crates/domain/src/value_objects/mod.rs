//! Value objects shared by the catalog, the allocation engine and records.

mod ability;
mod ability_score;
mod equipment_category;

pub use ability::Ability;
pub use ability_score::{ability_modifier, AbilityScore, AbilityScores};
pub use equipment_category::EquipmentCategory;
