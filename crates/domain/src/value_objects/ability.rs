//! Ability value object - the six character attributes.
//!
//! Provides type safety for ability references instead of using magic strings
//! like "STR" or localized labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the six fixed character abilities.
///
/// The set is closed. Declaration order is the display order used by the
/// shell and the stored sheet.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Ability {
    /// Strength - physical power
    Strength,
    /// Dexterity - agility and reflexes
    Dexterity,
    /// Constitution - endurance and health
    Constitution,
    /// Intelligence - reasoning and memory
    Intelligence,
    /// Wisdom - perception and insight
    Wisdom,
    /// Charisma - force of personality
    Charisma,
}

impl Ability {
    /// All abilities in display order.
    pub const ALL: [Ability; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// Returns the short uppercase abbreviation (e.g., "STR", "DEX").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Returns the full name of the ability (e.g., "Strength").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Position of the ability in [`Ability::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STR" | "STRENGTH" => Ok(Self::Strength),
            "DEX" | "DEXTERITY" => Ok(Self::Dexterity),
            "CON" | "CONSTITUTION" => Ok(Self::Constitution),
            "INT" | "INTELLIGENCE" => Ok(Self::Intelligence),
            "WIS" | "WISDOM" => Ok(Self::Wisdom),
            "CHA" | "CHARISMA" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("Unknown ability: {}", s))),
        }
    }
}
