//! In-progress character data collected by the wizard.
//!
//! The draft holds what the user has entered so far and nothing about which
//! screen is showing. [`CharacterDraft::finish`] turns it into a
//! [`CharacterRecord`] once every required piece is present.

use crate::allocation::{BaseChoice, StatAllocation};
use crate::catalog::Catalog;
use crate::entities::{
    validate_character_name, CharacterRecord, ClassDefinition, EquipmentSelection,
    RaceDefinition,
};
use crate::error::DomainError;
use crate::value_objects::{Ability, EquipmentCategory};

#[derive(Debug, Clone, Default)]
pub struct CharacterDraft {
    race: Option<RaceDefinition>,
    class: Option<ClassDefinition>,
    allocation: StatAllocation,
    name: String,
    description: String,
    equipment: EquipmentSelection,
}

impl CharacterDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses a race from the catalog and re-seeds the allocation bonuses.
    pub fn select_race(&mut self, catalog: &Catalog, name: &str) -> Result<(), DomainError> {
        let race = catalog.race(name)?.clone();
        self.allocation.set_race(&race);
        self.race = Some(race);
        Ok(())
    }

    /// Chooses a class. Switching to a different class drops equipment picks.
    pub fn select_class(&mut self, catalog: &Catalog, name: &str) -> Result<(), DomainError> {
        let class = catalog.class(name)?.clone();
        if self.class.as_ref().map(|c| c.name.as_str()) != Some(class.name.as_str()) {
            self.equipment.clear();
        }
        self.class = Some(class);
        Ok(())
    }

    pub fn race(&self) -> Option<&RaceDefinition> {
        self.race.as_ref()
    }

    pub fn class(&self) -> Option<&ClassDefinition> {
        self.class.as_ref()
    }

    pub fn allocation(&self) -> &StatAllocation {
        &self.allocation
    }

    pub fn assign(&mut self, ability: Ability, choice: BaseChoice) -> Result<(), DomainError> {
        self.allocation.assign(ability, choice)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Stores the trimmed name. Fails on names that can't be used as a key.
    pub fn set_name(&mut self, name: &str) -> Result<(), DomainError> {
        self.name = validate_character_name(name)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    pub fn equipment(&self) -> &EquipmentSelection {
        &self.equipment
    }

    /// Picks (or with `None`, clears) the single item for a category.
    pub fn select_equipment(
        &mut self,
        category: EquipmentCategory,
        item: Option<&str>,
    ) -> Result<(), DomainError> {
        let class = self
            .class
            .as_ref()
            .ok_or_else(|| DomainError::validation("Choose a class before equipment"))?;
        if let Some(item) = item {
            if !class.offers(category, item) {
                return Err(DomainError::not_found("Item", item));
            }
        }
        self.equipment.set(category, item.map(str::to_string));
        Ok(())
    }

    pub fn require_race(&self) -> Result<&RaceDefinition, DomainError> {
        self.race
            .as_ref()
            .ok_or_else(|| DomainError::validation("No race chosen"))
    }

    pub fn require_class(&self) -> Result<&ClassDefinition, DomainError> {
        self.class
            .as_ref()
            .ok_or_else(|| DomainError::validation("No class chosen"))
    }

    pub fn require_complete_allocation(&self) -> Result<(), DomainError> {
        self.allocation.final_scores().map(|_| ())
    }

    /// Builds the final record, reporting the first missing piece.
    pub fn finish(&self) -> Result<CharacterRecord, DomainError> {
        let race = self.require_race()?;
        let class = self.require_class()?;
        CharacterRecord::new(
            &self.name,
            race,
            class,
            &self.description,
            &self.allocation,
            self.equipment.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::STANDARD_ARRAY;

    fn filled_draft(catalog: &Catalog) -> CharacterDraft {
        let mut draft = CharacterDraft::new();
        draft.select_race(catalog, "Human").unwrap();
        draft.select_class(catalog, "Bard").unwrap();
        for (ability, value) in Ability::ALL.into_iter().zip(STANDARD_ARRAY) {
            draft.assign(ability, BaseChoice::Value(value)).unwrap();
        }
        draft.set_name("Lia").unwrap();
        draft
    }

    #[test]
    fn test_finish_reports_missing_race_first() {
        let draft = CharacterDraft::new();
        let err = draft.finish().unwrap_err();
        assert_eq!(err, DomainError::validation("No race chosen"));
    }

    #[test]
    fn test_finish_reports_missing_class() {
        let catalog = Catalog::builtin();
        let mut draft = CharacterDraft::new();
        draft.select_race(&catalog, "Elf").unwrap();
        assert_eq!(
            draft.finish().unwrap_err(),
            DomainError::validation("No class chosen")
        );
    }

    #[test]
    fn test_finish_requires_name() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft(&catalog);
        draft.name.clear();
        assert!(draft.finish().unwrap_err().is_validation());
    }

    #[test]
    fn test_finish_builds_record() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft(&catalog);
        draft.set_description("A wandering minstrel");
        draft
            .select_equipment(EquipmentCategory::ClassItem, Some("Lute"))
            .unwrap();

        let record = draft.finish().unwrap();
        assert_eq!(record.name(), "Lia");
        assert_eq!(record.race(), "Human");
        assert_eq!(record.class(), "Bard");
        assert_eq!(record.scores().get(Ability::Strength).value, 16);
        assert_eq!(
            record.equipment().get(EquipmentCategory::ClassItem),
            Some("Lute")
        );
    }

    #[test]
    fn test_unknown_item_rejected() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft(&catalog);
        let err = draft
            .select_equipment(EquipmentCategory::Weapon, Some("Lute"))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(draft.equipment().get(EquipmentCategory::Weapon), None);
    }

    #[test]
    fn test_switching_class_clears_equipment() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft(&catalog);
        draft
            .select_equipment(EquipmentCategory::Weapon, Some("Rapier"))
            .unwrap();

        draft.select_class(&catalog, "Bard").unwrap();
        assert_eq!(draft.equipment().get(EquipmentCategory::Weapon), Some("Rapier"));

        draft.select_class(&catalog, "Rogue").unwrap();
        assert_eq!(draft.equipment().get(EquipmentCategory::Weapon), None);
    }

    #[test]
    fn test_switching_race_updates_derived_values() {
        let catalog = Catalog::builtin();
        let mut draft = filled_draft(&catalog);
        assert_eq!(draft.allocation().derived(Ability::Strength), 16);
        draft.select_race(&catalog, "Half-Orc").unwrap();
        assert_eq!(draft.allocation().derived(Ability::Strength), 17);
        assert_eq!(draft.allocation().derived(Ability::Dexterity), 14);
    }

    #[test]
    fn test_equipment_before_class_is_validation() {
        let mut draft = CharacterDraft::new();
        let err = draft
            .select_equipment(EquipmentCategory::Weapon, Some("Dagger"))
            .unwrap_err();
        assert!(err.is_validation());
    }
}
