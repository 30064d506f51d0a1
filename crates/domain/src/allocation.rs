//! Standard-array stat allocation.
//!
//! Each of the six values in [`STANDARD_ARRAY`] may be held by at most one
//! ability. Any number of abilities may be [`BaseChoice::Unassigned`] at once.
//! Reuse is prevented at the point where choices are offered: the list
//! returned by [`StatAllocation::choices_for`] never contains a value another
//! ability holds, and [`StatAllocation::assign`] refuses one without touching
//! the current state.

use std::fmt;
use std::str::FromStr;

use crate::entities::RaceDefinition;
use crate::error::DomainError;
use crate::value_objects::{ability_modifier, Ability, AbilityScore, AbilityScores};

/// The six allocatable base values, highest first.
pub const STANDARD_ARRAY: [i32; 6] = [15, 14, 13, 12, 10, 8];

/// A base value choice for one ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseChoice {
    /// Placeholder; never counts as used and contributes nothing.
    Unassigned,
    Value(i32),
}

impl BaseChoice {
    /// Checked constructor for a standard-array value.
    pub fn value(value: i32) -> Result<Self, DomainError> {
        if STANDARD_ARRAY.contains(&value) {
            Ok(Self::Value(value))
        } else {
            Err(DomainError::constraint(format!(
                "{} is not in the standard array",
                value
            )))
        }
    }

    pub fn as_value(&self) -> Option<i32> {
        match self {
            Self::Unassigned => None,
            Self::Value(v) => Some(*v),
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl fmt::Display for BaseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned => f.write_str("-"),
            Self::Value(v) => write!(f, "{}", v),
        }
    }
}

impl FromStr for BaseChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "-" | "0" => Ok(Self::Unassigned),
            other => {
                let value: i32 = other
                    .parse()
                    .map_err(|_| DomainError::parse(format!("Not a base value: {}", other)))?;
                Self::value(value)
            }
        }
    }
}

/// Per-ability base values plus the race bonuses they combine with.
/// Only [`StatAllocation::assign`] and the reset methods change base
/// values, so the uniqueness rule holds for every reachable state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatAllocation {
    bases: [Option<i32>; 6],
    bonuses: [i32; 6],
}

impl StatAllocation {
    /// Empty allocation with no race bonuses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty allocation seeded with a race's bonuses.
    pub fn for_race(race: &RaceDefinition) -> Self {
        let mut allocation = Self::new();
        allocation.set_race(race);
        allocation
    }

    /// Replaces the race bonuses. Base values are kept.
    pub fn set_race(&mut self, race: &RaceDefinition) {
        self.bonuses = Ability::ALL.map(|ability| race.bonus(ability));
    }

    pub fn base(&self, ability: Ability) -> BaseChoice {
        match self.bases[ability.index()] {
            Some(v) => BaseChoice::Value(v),
            None => BaseChoice::Unassigned,
        }
    }

    pub fn race_bonus(&self, ability: Ability) -> i32 {
        self.bonuses[ability.index()]
    }

    /// The ability currently holding `value`, if any.
    pub fn holder_of(&self, value: i32) -> Option<Ability> {
        Ability::ALL
            .into_iter()
            .find(|ability| self.bases[ability.index()] == Some(value))
    }

    /// Choices that may be offered for `ability`, highest first, with
    /// `Unassigned` last. Values held by other abilities are left out; the
    /// ability's own value is always present.
    pub fn choices_for(&self, ability: Ability) -> Vec<BaseChoice> {
        STANDARD_ARRAY
            .iter()
            .copied()
            .filter(|&value| match self.holder_of(value) {
                Some(holder) => holder == ability,
                None => true,
            })
            .map(BaseChoice::Value)
            .chain(std::iter::once(BaseChoice::Unassigned))
            .collect()
    }

    /// Sets the base value for `ability`.
    ///
    /// Fails with `Constraint` when the value is outside the standard array or
    /// held by a different ability; the allocation is unchanged in that case.
    pub fn assign(&mut self, ability: Ability, choice: BaseChoice) -> Result<(), DomainError> {
        let value = match choice {
            BaseChoice::Unassigned => {
                self.reset(ability);
                return Ok(());
            }
            BaseChoice::Value(v) => v,
        };
        BaseChoice::value(value)?;

        if let Some(holder) = self.holder_of(value).filter(|holder| *holder != ability) {
            return Err(DomainError::constraint(format!(
                "{} is already assigned to {}",
                value, holder
            )));
        }

        self.bases[ability.index()] = Some(value);
        tracing::debug!(%ability, base = value, "Assigned base value");
        Ok(())
    }

    /// Returns `ability` to the unassigned placeholder.
    pub fn reset(&mut self, ability: Ability) {
        self.bases[ability.index()] = None;
    }

    /// Unassigns every ability. Race bonuses are kept.
    pub fn clear(&mut self) {
        self.bases = [None; 6];
    }

    /// Base + race bonus, or 0 while unassigned.
    pub fn derived(&self, ability: Ability) -> i32 {
        self.bases[ability.index()]
            .map(|base| base.saturating_add(self.race_bonus(ability)))
            .unwrap_or(0)
    }

    pub fn modifier(&self, ability: Ability) -> i32 {
        ability_modifier(self.derived(ability))
    }

    pub fn score(&self, ability: Ability) -> AbilityScore {
        AbilityScore::new(self.derived(ability))
    }

    /// Standard-array values not yet held by any ability, highest first.
    pub fn remaining_values(&self) -> Vec<i32> {
        STANDARD_ARRAY
            .iter()
            .copied()
            .filter(|value| self.holder_of(*value).is_none())
            .collect()
    }

    /// Abilities still holding the placeholder.
    pub fn unassigned(&self) -> Vec<Ability> {
        Ability::ALL
            .into_iter()
            .filter(|ability| self.bases[ability.index()].is_none())
            .collect()
    }

    /// True iff every standard-array value is held by exactly one ability.
    pub fn is_complete(&self) -> bool {
        let mut held: Vec<i32> = self.bases.iter().flatten().copied().collect();
        if held.len() != STANDARD_ARRAY.len() {
            return false;
        }
        held.sort_unstable_by(|a, b| b.cmp(a));
        held == STANDARD_ARRAY
    }

    /// Final scores for every ability. Only available once complete.
    pub fn final_scores(&self) -> Result<AbilityScores, DomainError> {
        if !self.is_complete() {
            let missing = self
                .unassigned()
                .iter()
                .map(Ability::display_name)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(DomainError::validation(format!(
                "Stat allocation is incomplete (unassigned: {})",
                missing
            )));
        }
        Ok(AbilityScores::from_fn(|ability| self.score(ability)))
    }
}
