//! Race definition - immutable catalog entry
//!
//! # Simple Data Struct
//!
//! Races carry no behavior beyond bonus lookup. Any combination of fields is a
//! valid race; the catalog enforces unique names.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::Ability;

/// A playable race with its ability bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceDefinition {
    /// Unique catalog key
    pub name: String,
    pub description: String,
    /// Racial feature text copied verbatim into saved characters
    pub features: String,
    /// Ability bonuses; abilities not listed get 0
    #[serde(default)]
    pub bonuses: BTreeMap<Ability, i32>,
}

impl RaceDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        features: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            features: features.into(),
            bonuses: BTreeMap::new(),
        }
    }

    pub fn with_bonus(mut self, ability: Ability, bonus: i32) -> Self {
        self.bonuses.insert(ability, bonus);
        self
    }

    /// Race bonus for an ability, 0 when the race grants none.
    pub fn bonus(&self, ability: Ability) -> i32 {
        self.bonuses.get(&ability).copied().unwrap_or(0)
    }

    /// Human-readable bonus list, e.g. "Strength +2, Charisma +1".
    pub fn bonus_summary(&self) -> String {
        self.bonuses
            .iter()
            .map(|(ability, bonus)| format!("{} {:+}", ability, bonus))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
