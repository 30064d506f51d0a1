//! Character record - the finished output of one wizard run
//!
//! # Validated Aggregate
//!
//! A record can only be built through [`CharacterRecord::new`], which checks
//! the name, the completeness of the stat allocation and every equipment
//! choice against the class catalog. Fields are private so a constructed
//! record can't drift out of those invariants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ClassDefinition, RaceDefinition};
use crate::allocation::StatAllocation;
use crate::error::DomainError;
use crate::value_objects::{AbilityScores, EquipmentCategory};

/// Validates a character name for use as the record's primary key.
///
/// Returns the trimmed name. The name doubles as the storage file stem, so
/// path separators, control characters and the relative path components
/// `.`/`..` are refused.
pub fn validate_character_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("Character name cannot be empty"));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(DomainError::validation(format!(
            "Character name cannot be '{}'",
            trimmed
        )));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| matches!(c, '/' | '\\') || c.is_control())
    {
        return Err(DomainError::validation(format!(
            "Character name cannot contain {:?}",
            bad
        )));
    }
    Ok(trimmed.to_string())
}

/// At most one chosen item per equipment category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EquipmentSelection {
    chosen: BTreeMap<EquipmentCategory, String>,
}

impl EquipmentSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: EquipmentCategory) -> Option<&str> {
        self.chosen.get(&category).map(String::as_str)
    }

    /// Sets or clears the item for a category without catalog checks.
    pub fn set(&mut self, category: EquipmentCategory, item: Option<String>) {
        match item {
            Some(item) => {
                self.chosen.insert(category, item);
            }
            None => {
                self.chosen.remove(&category);
            }
        }
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    /// Every category in fixed order with its choice, if any.
    pub fn entries(&self) -> impl Iterator<Item = (EquipmentCategory, Option<&str>)> + '_ {
        EquipmentCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Checks every chosen item is offered by `class`.
    pub fn validate_for(&self, class: &ClassDefinition) -> Result<(), DomainError> {
        for (category, item) in &self.chosen {
            if !class.offers(*category, item) {
                return Err(DomainError::validation(format!(
                    "{} does not offer '{}' as {}",
                    class.name, item, category
                )));
            }
        }
        Ok(())
    }
}

/// A completed character, ready to be handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    name: String,
    race: String,
    race_features: String,
    class: String,
    description: String,
    scores: AbilityScores,
    equipment: EquipmentSelection,
}

impl CharacterRecord {
    /// Assembles a record, failing with `Validation` when the name is
    /// unusable, the allocation is incomplete or an item is not offered by
    /// the class.
    pub fn new(
        name: &str,
        race: &RaceDefinition,
        class: &ClassDefinition,
        description: &str,
        allocation: &StatAllocation,
        equipment: EquipmentSelection,
    ) -> Result<Self, DomainError> {
        let name = validate_character_name(name)?;
        let scores = allocation.final_scores()?;
        equipment.validate_for(class)?;

        Ok(Self {
            name,
            race: race.name.clone(),
            race_features: race.features.clone(),
            class: class.name.clone(),
            description: description.trim().to_string(),
            scores,
            equipment,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> &str {
        &self.race
    }

    pub fn race_features(&self) -> &str {
        &self.race_features
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }

    pub fn equipment(&self) -> &EquipmentSelection {
        &self.equipment
    }
}
