//! Derived ability score and its modifier.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Ability;

/// Ability modifier for a score: `floor((score - 10) / 2)`.
///
/// Rust's `/` rounds toward zero, so an odd score below 10 would come out one
/// too high. `div_euclid` with a positive divisor is floor division.
pub fn ability_modifier(score: i32) -> i32 {
    (score - 10).div_euclid(2)
}

/// A final ability value (base + race bonus) together with its modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    pub value: i32,
    pub modifier: i32,
}

impl AbilityScore {
    pub fn new(value: i32) -> Self {
        Self {
            value,
            modifier: ability_modifier(value),
        }
    }
}

/// Renders as `value (modifier)`, e.g. `16 (3)` or `8 (-1)`.
impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.modifier)
    }
}

/// One final score per ability, always all six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores([AbilityScore; 6]);

impl AbilityScores {
    /// Builds the scores by evaluating `f` for every ability in display order.
    pub fn from_fn(f: impl FnMut(Ability) -> AbilityScore) -> Self {
        Self(Ability::ALL.map(f))
    }

    pub fn get(&self, ability: Ability) -> AbilityScore {
        self.0[ability.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, AbilityScore)> + '_ {
        Ability::ALL.into_iter().zip(self.0.iter().copied())
    }
}
