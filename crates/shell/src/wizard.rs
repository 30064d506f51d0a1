//! Wizard screen state machine.
//!
//! The shell only ever changes screens through [`WizardState::apply`]. Guards
//! that depend on draft contents (race chosen, allocation complete, name
//! valid) are checked by the shell before it sends `Next` or `Finish`.

use std::fmt;

use charforge_domain::DomainError;

/// Which screen the shell is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardState {
    #[default]
    Idle,
    SelectingRace,
    SelectingClass,
    AllocatingStats,
    Describing,
    SelectingEquipment,
    Listing,
}

/// User intents that move between screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardEvent {
    StartCreation,
    OpenList,
    Next,
    Back,
    Cancel,
    Finish,
    CloseList,
}

impl WizardState {
    /// Whether a character draft is in progress.
    pub fn is_creating(&self) -> bool {
        matches!(
            self,
            Self::SelectingRace
                | Self::SelectingClass
                | Self::AllocatingStats
                | Self::Describing
                | Self::SelectingEquipment
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Idle => "Main menu",
            Self::SelectingRace => "Choose a race",
            Self::SelectingClass => "Choose a class",
            Self::AllocatingStats => "Allocate ability scores",
            Self::Describing => "Name and description",
            Self::SelectingEquipment => "Choose equipment",
            Self::Listing => "Saved characters",
        }
    }

    /// Returns the state reached by `event`, or `InvalidStateTransition`.
    pub fn apply(self, event: WizardEvent) -> Result<WizardState, DomainError> {
        use WizardEvent as E;
        use WizardState as S;

        let next = match (self, event) {
            (S::Idle, E::StartCreation) => S::SelectingRace,
            (S::Idle, E::OpenList) => S::Listing,

            (S::SelectingRace, E::Next) => S::SelectingClass,
            (S::SelectingClass, E::Next) => S::AllocatingStats,
            (S::AllocatingStats, E::Next) => S::Describing,
            (S::Describing, E::Next) => S::SelectingEquipment,
            (S::SelectingEquipment, E::Finish) => S::Idle,

            (S::SelectingClass, E::Back) => S::SelectingRace,
            (S::AllocatingStats, E::Back) => S::SelectingClass,
            (S::Describing, E::Back) => S::AllocatingStats,
            (S::SelectingEquipment, E::Back) => S::Describing,

            (state, E::Cancel) if state.is_creating() => S::Idle,
            (S::Listing, E::CloseList) => S::Idle,

            (state, event) => {
                return Err(DomainError::invalid_state_transition(format!(
                    "{} is not allowed from {}",
                    event, state
                )))
            }
        };
        tracing::debug!(from = %self, to = %next, event = %event, "Wizard transition");
        Ok(next)
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::SelectingRace => "SelectingRace",
            Self::SelectingClass => "SelectingClass",
            Self::AllocatingStats => "AllocatingStats",
            Self::Describing => "Describing",
            Self::SelectingEquipment => "SelectingEquipment",
            Self::Listing => "Listing",
        };
        f.write_str(name)
    }
}

impl fmt::Display for WizardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartCreation => "StartCreation",
            Self::OpenList => "OpenList",
            Self::Next => "Next",
            Self::Back => "Back",
            Self::Cancel => "Cancel",
            Self::Finish => "Finish",
            Self::CloseList => "CloseList",
        };
        f.write_str(name)
    }
}
