//! Static reference data: races and classes.
//!
//! A [`Catalog`] is built once at start-up, either from the built-in tables
//! or from a JSON document with the same shape, and is read-only afterwards.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::entities::{ClassDefinition, RaceDefinition};
use crate::error::DomainError;
use crate::value_objects::EquipmentCategory;

/// Immutable lookup table of races and classes, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    races: Vec<RaceDefinition>,
    classes: Vec<ClassDefinition>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    races: Vec<RaceDefinition>,
    classes: Vec<ClassDefinition>,
}

/// Largest bonus a race may grant to a single ability.
pub const MAX_RACE_BONUS: i32 = 10;

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicate names and race bonuses
    /// outside `0..=MAX_RACE_BONUS`.
    pub fn new(
        races: Vec<RaceDefinition>,
        classes: Vec<ClassDefinition>,
    ) -> Result<Self, DomainError> {
        ensure_unique_names("Race", races.iter().map(|r| r.name.as_str()))?;
        races.iter().try_for_each(ensure_bonuses_in_range)?;
        ensure_unique_names("Class", classes.iter().map(|c| c.name.as_str()))?;
        Ok(Self { races, classes })
    }

    /// The races and classes shipped with the application.
    pub fn builtin() -> Self {
        Self {
            races: builtin::races(),
            classes: builtin::classes(),
        }
    }

    /// Parses a catalog from JSON: `{"races": [...], "classes": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let catalog = Self::new(document.races, document.classes)?;
        tracing::debug!(
            races = catalog.races.len(),
            classes = catalog.classes.len(),
            "Loaded catalog from JSON"
        );
        Ok(catalog)
    }

    pub fn races(&self) -> &[RaceDefinition] {
        &self.races
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn race(&self, name: &str) -> Result<&RaceDefinition, DomainError> {
        self.races
            .iter()
            .find(|race| race.name == name)
            .ok_or_else(|| DomainError::not_found("Race", name))
    }

    pub fn class(&self, name: &str) -> Result<&ClassDefinition, DomainError> {
        self.classes
            .iter()
            .find(|class| class.name == name)
            .ok_or_else(|| DomainError::not_found("Class", name))
    }

    /// Equipment offered by a class, one entry per category in fixed order.
    pub fn equipment_for(
        &self,
        class_name: &str,
    ) -> Result<Vec<(EquipmentCategory, &[String])>, DomainError> {
        let class = self.class(class_name)?;
        Ok(EquipmentCategory::ALL
            .into_iter()
            .map(|category| (category, class.items(category)))
            .collect())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn ensure_bonuses_in_range(race: &RaceDefinition) -> Result<(), DomainError> {
    match race
        .bonuses
        .iter()
        .find(|(_, bonus)| !(0..=MAX_RACE_BONUS).contains(*bonus))
    {
        Some((ability, bonus)) => Err(DomainError::validation(format!(
            "{} bonus for {} must be between 0 and {}, got {}",
            ability, race.name, MAX_RACE_BONUS, bonus
        ))),
        None => Ok(()),
    }
}

fn ensure_unique_names<'a>(
    entity_type: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for name in names {
        if name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "{} name cannot be empty",
                entity_type
            )));
        }
        if !seen.insert(name) {
            return Err(DomainError::validation(format!(
                "Duplicate {} name: {}",
                entity_type.to_lowercase(),
                name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Ability;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(catalog.races().to_vec(), catalog.classes().to_vec());
        assert!(rebuilt.is_ok());
        assert_eq!(catalog.races().len(), 10);
        assert_eq!(catalog.classes().len(), 13);
    }

    #[test]
    fn test_human_gets_one_everywhere() {
        let catalog = Catalog::builtin();
        let human = catalog.race("Human").unwrap();
        for ability in Ability::ALL {
            assert_eq!(human.bonus(ability), 1);
        }
    }

    #[test]
    fn test_unknown_lookup_is_not_found() {
        let catalog = Catalog::builtin();
        assert!(matches!(
            catalog.race("Kender"),
            Err(DomainError::NotFound { entity_type: "Race", .. })
        ));
        assert!(catalog.class("Gunslinger").is_err());
        assert!(catalog.equipment_for("Gunslinger").is_err());
    }

    #[test]
    fn test_fighter_has_no_class_items() {
        let catalog = Catalog::builtin();
        let equipment = catalog.equipment_for("Fighter").unwrap();
        assert_eq!(equipment.len(), 4);
        assert_eq!(equipment[3].0, EquipmentCategory::ClassItem);
        assert!(equipment[3].1.is_empty());
        assert!(!equipment[0].1.is_empty());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let races = vec![
            RaceDefinition::new("Elf", "", ""),
            RaceDefinition::new("Elf", "", ""),
        ];
        let err = Catalog::new(races, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Duplicate race name"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "races": [
                {"name": "Goblin", "description": "Small", "features": "Nimble escape",
                 "bonuses": {"Dexterity": 2, "Constitution": 1}}
            ],
            "classes": [
                {"name": "Tinker", "description": "Gadgets",
                 "equipment": {"tools": ["Tinker's tools"]}}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.race("Goblin").unwrap().bonus(Ability::Dexterity), 2);
        assert_eq!(
            catalog.class("Tinker").unwrap().items(EquipmentCategory::Tools),
            ["Tinker's tools"]
        );
    }

    #[test]
    fn test_negative_bonus_rejected() {
        let json = r#"{"races": [{"name": "Cursed", "description": "", "features": "",
                       "bonuses": {"Strength": -20}}], "classes": []}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Strength bonus for Cursed"));
    }

    #[test]
    fn test_oversized_bonus_rejected() {
        let races = vec![
            RaceDefinition::new("Titan", "", "").with_bonus(Ability::Strength, i32::MAX),
        ];
        assert!(Catalog::new(races, Vec::new()).unwrap_err().is_validation());

        let races = vec![
            RaceDefinition::new("Giant", "", "").with_bonus(Ability::Strength, MAX_RACE_BONUS),
        ];
        assert!(Catalog::new(races, Vec::new()).is_ok());
    }

    #[test]
    fn test_from_json_bad_ability_is_parse_error() {
        let json = r#"{"races": [{"name": "X", "description": "", "features": "",
                       "bonuses": {"Luck": 1}}], "classes": []}"#;
        assert!(matches!(Catalog::from_json(json), Err(DomainError::Parse(_))));
    }
}
