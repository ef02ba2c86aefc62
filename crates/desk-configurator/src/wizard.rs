//! Three-step configurator wizard.
//!
//! ```text
//! space_budget ⇄ purpose ⇄ style → generating → complete
//! ```
//!
//! Values entered on earlier steps survive navigation in both directions and a
//! failed or cancelled generation.

use std::time::Duration;

use desk_core::CoreError;
use desk_core::entities::Configuration;
use desk_core::enums::{Purpose, Style, WizardStep};
use desk_core::numbers::coerce_number;

use crate::error::GenerationError;
use crate::generation::{CancelToken, Planner, generate};

/// Result of [`Wizard::next`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Moved to another input step.
    Moved(WizardStep),
    /// Entered `Generating`; the draft must now be generated.
    Generate(Configuration),
}

/// Result of [`Wizard::previous`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    Moved(WizardStep),
    /// `previous` on the first step; the caller should leave the wizard.
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    draft: Configuration,
    completed: Option<Configuration>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    #[must_use]
    pub fn new() -> Self {
        Self::with_draft(Configuration::default())
    }

    /// Start on step 1 with pre-filled values.
    #[must_use]
    pub const fn with_draft(draft: Configuration) -> Self {
        Self {
            step: WizardStep::SpaceBudget,
            draft,
            completed: None,
        }
    }

    #[must_use]
    pub const fn step(&self) -> WizardStep {
        self.step
    }

    #[must_use]
    pub const fn draft(&self) -> &Configuration {
        &self.draft
    }

    /// The finished configuration, once generation has succeeded.
    #[must_use]
    pub const fn completed(&self) -> Option<&Configuration> {
        self.completed.as_ref()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed.is_some()
    }

    /// Percentage shown by the progress bar (`step / 3 × 100`).
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        let step = self.step.number().min(WizardStep::INPUT_STEPS);
        f64::from(step) / f64::from(WizardStep::INPUT_STEPS) * 100.0
    }

    pub const fn set_space_width(&mut self, value: f64) {
        self.draft.space_width = value;
    }

    pub const fn set_space_depth(&mut self, value: f64) {
        self.draft.space_depth = value;
    }

    pub const fn set_budget(&mut self, value: f64) {
        self.draft.budget = value;
    }

    /// Set the width from raw text; unparseable input becomes 0.
    pub fn enter_space_width(&mut self, raw: &str) {
        self.draft.space_width = coerce_number(raw);
    }

    pub fn enter_space_depth(&mut self, raw: &str) {
        self.draft.space_depth = coerce_number(raw);
    }

    pub fn enter_budget(&mut self, raw: &str) {
        self.draft.budget = coerce_number(raw);
    }

    pub const fn set_purpose(&mut self, purpose: Purpose) {
        self.draft.purpose = purpose;
    }

    pub const fn set_style(&mut self, style: Style) {
        self.draft.style = style;
    }

    /// Advance one step. From `Style`, enters `Generating` and hands back the
    /// draft to generate.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] while generating or after completion.
    pub fn next(&mut self) -> Result<Advance, CoreError> {
        self.ensure_open("next")?;
        let target = match self.step {
            WizardStep::SpaceBudget => WizardStep::Purpose,
            WizardStep::Purpose => WizardStep::Style,
            WizardStep::Style => WizardStep::Generating,
            WizardStep::Generating => return Err(self.invalid("next")),
        };
        self.move_to(target)?;
        Ok(if target == WizardStep::Generating {
            Advance::Generate(self.draft)
        } else {
            Advance::Moved(target)
        })
    }

    /// Go back one step, or signal exit from the first step.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] while generating or after completion.
    pub fn previous(&mut self) -> Result<Retreat, CoreError> {
        self.ensure_open("previous")?;
        let target = match self.step {
            WizardStep::SpaceBudget => return Ok(Retreat::Exit),
            WizardStep::Purpose => WizardStep::SpaceBudget,
            WizardStep::Style => WizardStep::Purpose,
            WizardStep::Generating => return Err(self.invalid("previous")),
        };
        self.move_to(target)?;
        Ok(Retreat::Moved(target))
    }

    /// Apply a generation result: success completes the wizard, any error
    /// returns to the style step with the draft intact.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] if the wizard is not generating.
    pub fn finish_generation(
        &mut self,
        result: Result<Configuration, GenerationError>,
    ) -> Result<Result<Configuration, GenerationError>, CoreError> {
        if self.step != WizardStep::Generating || self.is_complete() {
            return Err(self.invalid("finish_generation"));
        }
        match result {
            Ok(configuration) => {
                tracing::debug!(?configuration, "wizard complete");
                self.completed = Some(configuration);
                Ok(Ok(configuration))
            }
            Err(error) => {
                tracing::debug!(%error, "generation did not finish; back to style");
                self.move_to(WizardStep::Style)?;
                Ok(Err(error))
            }
        }
    }

    /// Drive the final step: `next()` from `Style`, generate, then apply the
    /// result.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidTransition`] if the wizard is not on the style step.
    pub async fn generate<P: Planner>(
        &mut self,
        planner: &P,
        cancel: CancelToken,
        timeout: Duration,
    ) -> Result<Result<Configuration, GenerationError>, CoreError> {
        if self.step != WizardStep::Style {
            return Err(self.invalid("generate"));
        }
        let Advance::Generate(draft) = self.next()? else {
            return Err(self.invalid("generate"));
        };
        let result = generate(planner, draft, cancel, timeout).await;
        self.finish_generation(result)
    }

    fn ensure_open(&self, action: &str) -> Result<(), CoreError> {
        if self.is_complete() {
            return Err(self.invalid(action));
        }
        Ok(())
    }

    fn move_to(&mut self, target: WizardStep) -> Result<(), CoreError> {
        if !self.step.can_transition_to(target) {
            return Err(self.invalid(target.as_str()));
        }
        tracing::debug!(from = %self.step, to = %target, "wizard step");
        self.step = target;
        Ok(())
    }

    fn invalid(&self, action: &str) -> CoreError {
        let from = if self.is_complete() {
            "complete"
        } else {
            self.step.as_str()
        };
        CoreError::InvalidTransition {
            entity_type: "wizard".to_string(),
            from: from.to_string(),
            action: action.to_string(),
        }
    }
}
