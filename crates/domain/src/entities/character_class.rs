//! Class definition - immutable catalog entry with its equipment catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value_objects::EquipmentCategory;

/// A character class and the items it may start with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    /// Unique catalog key
    pub name: String,
    pub description: String,
    /// Ordered item names per category. A missing category offers nothing.
    #[serde(default)]
    pub equipment: BTreeMap<EquipmentCategory, Vec<String>>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            equipment: BTreeMap::new(),
        }
    }

    pub fn with_items<I, S>(mut self, category: EquipmentCategory, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equipment
            .insert(category, items.into_iter().map(Into::into).collect());
        self
    }

    /// Items offered for a category, in catalog order.
    pub fn items(&self, category: EquipmentCategory) -> &[String] {
        self.equipment
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn offers(&self, category: EquipmentCategory, item: &str) -> bool {
        self.items(category).iter().any(|offered| offered == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_category_is_empty() {
        let fighter = ClassDefinition::new("Fighter", "Master of arms")
            .with_items(EquipmentCategory::Weapon, ["Greatsword", "Longbow"]);
        assert_eq!(fighter.items(EquipmentCategory::Weapon).len(), 2);
        assert!(fighter.items(EquipmentCategory::ClassItem).is_empty());
    }

    #[test]
    fn test_offers() {
        let bard = ClassDefinition::new("Bard", "Music and magic")
            .with_items(EquipmentCategory::ClassItem, ["Lute", "Flute"]);
        assert!(bard.offers(EquipmentCategory::ClassItem, "Lute"));
        assert!(!bard.offers(EquipmentCategory::ClassItem, "Drum"));
        assert!(!bard.offers(EquipmentCategory::Weapon, "Lute"));
    }

    #[test]
    fn test_equipment_json_keys() {
        let json = r#"{
            "name": "Monk",
            "description": "Ki",
            "equipment": { "weapon": ["Quarterstaff"], "class_item": ["Prayer beads"] }
        }"#;
        let class: ClassDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(class.items(EquipmentCategory::Weapon), ["Quarterstaff"]);
        assert_eq!(class.items(EquipmentCategory::ClassItem), ["Prayer beads"]);
    }
}
