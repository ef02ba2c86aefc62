//! Option enums, wizard steps, and compatibility vocabulary for DeskHub.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The wizard step enum provides `allowed_next_states()` so the state machine in
//! `desk-configurator` can enforce valid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Purpose
// ---------------------------------------------------------------------------

/// What the desk setup is mainly used for.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    Work,
    Gaming,
    #[default]
    Balanced,
    Creative,
}

impl Purpose {
    pub const ALL: [Self; 4] = [Self::Work, Self::Gaming, Self::Balanced, Self::Creative];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Gaming => "gaming",
            Self::Balanced => "balanced",
            Self::Creative => "creative",
        }
    }

    /// Label shown to users in review output.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Work => "Work Optimized",
            Self::Gaming => "Gaming Optimized",
            Self::Balanced => "Balanced",
            Self::Creative => "Creative Work",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Visual style preference of a setup (also the style tag on templates).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Minimal,
    #[default]
    Modern,
    Cyberpunk,
    Warm,
    Industrial,
    Scandinavian,
}

impl Style {
    pub const ALL: [Self; 6] = [
        Self::Minimal,
        Self::Modern,
        Self::Cyberpunk,
        Self::Warm,
        Self::Industrial,
        Self::Scandinavian,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Modern => "modern",
            Self::Cyberpunk => "cyberpunk",
            Self::Warm => "warm",
            Self::Industrial => "industrial",
            Self::Scandinavian => "scandinavian",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Minimal => "Minimalist",
            Self::Modern => "Modern",
            Self::Cyberpunk => "Cyberpunk",
            Self::Warm => "Warm & Cozy",
            Self::Industrial => "Industrial",
            Self::Scandinavian => "Scandinavian",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

/// Position of the configurator wizard.
///
/// ```text
/// space_budget ⇄ purpose ⇄ style → generating → (complete)
///                                  generating → style (cancelled / failed)
/// ```
///
/// `previous` from `space_budget` exits the wizard; completion leaves the
/// machine and is not a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    SpaceBudget,
    Purpose,
    Style,
    Generating,
}

impl WizardStep {
    /// Number of input steps (excludes `Generating`).
    pub const INPUT_STEPS: u8 = 3;

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::SpaceBudget => &[Self::Purpose],
            Self::Purpose => &[Self::SpaceBudget, Self::Style],
            Self::Style => &[Self::Purpose, Self::Generating],
            Self::Generating => &[Self::Style],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// One-based step number; `Generating` reports past the last input step.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::SpaceBudget => 1,
            Self::Purpose => 2,
            Self::Style => 3,
            Self::Generating => 4,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpaceBudget => "space_budget",
            Self::Purpose => "purpose",
            Self::Style => "style",
            Self::Generating => "generating",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CandidateCategory
// ---------------------------------------------------------------------------

/// Category of a recommended product in the review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CandidateCategory {
    Desk,
    Chair,
    Monitor,
    Accessories,
    Peripherals,
}

impl CandidateCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desk => "desk",
            Self::Chair => "chair",
            Self::Monitor => "monitor",
            Self::Accessories => "accessories",
            Self::Peripherals => "peripherals",
        }
    }
}

impl fmt::Display for CandidateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FailureReason
// ---------------------------------------------------------------------------

/// Why a candidate product is incompatible with a configuration.
///
/// Keys the substitution table used when swapping products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    BudgetExceeded,
    DimensionMismatch,
}

impl FailureReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BudgetExceeded => "budget_exceeded",
            Self::DimensionMismatch => "dimension_mismatch",
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_wizard_initial_values() {
        assert_eq!(Purpose::default(), Purpose::Balanced);
        assert_eq!(Style::default(), Style::Modern);
    }

    #[test]
    fn serde_names_match_as_str() {
        for purpose in Purpose::ALL {
            let json = serde_json::to_string(&purpose).unwrap();
            assert_eq!(json, format!("\"{}\"", purpose.as_str()));
        }
        for style in Style::ALL {
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, format!("\"{}\"", style.as_str()));
        }
    }

    #[test]
    fn display_names_are_human_readable() {
        assert_eq!(Style::Warm.display_name(), "Warm & Cozy");
        assert_eq!(Purpose::Creative.display_name(), "Creative Work");
    }

    #[test]
    fn wizard_steps_move_one_at_a_time() {
        assert!(WizardStep::SpaceBudget.can_transition_to(WizardStep::Purpose));
        assert!(!WizardStep::SpaceBudget.can_transition_to(WizardStep::Style));
        assert!(WizardStep::Style.can_transition_to(WizardStep::Generating));
        assert!(!WizardStep::Purpose.can_transition_to(WizardStep::Generating));
        assert!(WizardStep::Generating.can_transition_to(WizardStep::Style));
    }

    #[test]
    fn wizard_step_numbers_are_one_based() {
        assert_eq!(WizardStep::SpaceBudget.number(), 1);
        assert_eq!(WizardStep::Style.number(), WizardStep::INPUT_STEPS);
    }
}
