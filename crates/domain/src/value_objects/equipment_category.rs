//! Equipment category value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The four fixed equipment slots every class catalog is keyed by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Weapon,
    /// Armor and clothing
    Gear,
    Tools,
    /// Instruments, foci and other class-specific items
    ClassItem,
}

impl EquipmentCategory {
    pub const ALL: [EquipmentCategory; 4] =
        [Self::Weapon, Self::Gear, Self::Tools, Self::ClassItem];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Gear => "Gear",
            Self::Tools => "Tools",
            Self::ClassItem => "Class Item",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EquipmentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weapon" => Ok(Self::Weapon),
            "gear" | "armor" => Ok(Self::Gear),
            "tools" => Ok(Self::Tools),
            "class item" | "class_item" => Ok(Self::ClassItem),
            _ => Err(DomainError::parse(format!(
                "Unknown equipment category: {}",
                s
            ))),
        }
    }
}
