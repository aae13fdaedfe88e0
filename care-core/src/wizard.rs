//! Four-step estimate wizard.
//!
//! The wizard walks a user through grade selection, benefit-type selection
//! (with home-care sub-services), reduction-tier selection, and the computed
//! result. One [`Wizard`] exists per session; the caller creates it, feeds
//! it discrete selection events, and drops it when done. Nothing persists.
//!
//! Steps are linear. [`Wizard::advance`] gates each transition on the
//! current step's required selections and refuses to move with a
//! [`ValidationError`] when one is missing; the step never changes on a
//! rejected advance.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::{CostBreakdown, CostWorksheet, CostWorksheetInput};
use crate::{BenefitType, CareGrade, CostTable, HomeService, ReductionTier};

/// A required selection was missing for the attempted transition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("care grade must be selected before continuing")]
    GradeNotSelected,

    #[error("benefit type must be selected before continuing")]
    BenefitTypeNotSelected,

    #[error("at least one home-care service must be selected")]
    NoHomeServiceSelected,

    #[error("copay reduction tier must be selected before calculating")]
    ReductionTierNotSelected,
}

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    Grade,
    Benefit,
    Reduction,
    Result,
}

impl Step {
    /// 1-based step number shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            Self::Grade => 1,
            Self::Benefit => 2,
            Self::Reduction => 3,
            Self::Result => 4,
        }
    }

    fn next(&self) -> Step {
        match self {
            Self::Grade => Self::Benefit,
            Self::Benefit => Self::Reduction,
            Self::Reduction | Self::Result => Self::Result,
        }
    }

    fn prev(&self) -> Step {
        match self {
            Self::Grade | Self::Benefit => Self::Grade,
            Self::Reduction => Self::Benefit,
            Self::Result => Self::Reduction,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Grade
    }
}

/// Snapshot of the wizard's selections.
///
/// `Default` is the documented initial state: step 1, nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: Step,
    pub grade: Option<CareGrade>,
    pub benefit_type: Option<BenefitType>,
    pub home_services: BTreeSet<HomeService>,
    pub reduction_tier: Option<ReductionTier>,
}

/// The estimate wizard engine.
///
/// Selection operations are total: inputs come from closed enums the
/// presentation layer offers, so there is nothing to reject. Only
/// [`Wizard::advance`] and [`Wizard::compute_result`] can fail.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only snapshot of the current state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Sets the care grade. Clears nothing else.
    pub fn select_grade(
        &mut self,
        grade: CareGrade,
    ) {
        self.state.grade = Some(grade);
    }

    /// Sets the benefit type. Previously toggled home services are kept;
    /// they are simply ignored downstream for facility care.
    pub fn select_benefit_type(
        &mut self,
        benefit_type: BenefitType,
    ) {
        self.state.benefit_type = Some(benefit_type);
    }

    /// Adds `service` to the selection if absent, removes it if present.
    pub fn toggle_home_service(
        &mut self,
        service: HomeService,
    ) {
        if !self.state.home_services.remove(&service) {
            self.state.home_services.insert(service);
        }
    }

    /// Sets the copay reduction tier.
    pub fn select_reduction_tier(
        &mut self,
        tier: ReductionTier,
    ) {
        self.state.reduction_tier = Some(tier);
    }

    /// Moves to the next step after validating the current one.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when a selection required by the current
    /// step is missing; `state().step` is unchanged on failure.
    pub fn advance(&mut self) -> Result<Step, ValidationError> {
        self.validate_step(self.state.step)?;

        self.state.step = self.state.step.next();
        debug!(step = self.state.step.number(), "advanced");
        Ok(self.state.step)
    }

    /// Moves to the previous step. Never fails; stays on step 1.
    pub fn retreat(&mut self) -> Step {
        self.state.step = self.state.step.prev();
        self.state.step
    }

    /// Computes the cost breakdown from the current selections.
    ///
    /// Pure with respect to the wizard: the state is not modified and the
    /// same selections always produce the same breakdown.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when any required selection is missing.
    /// Every invariant is re-checked here rather than trusting the step
    /// gates, so a breakdown can never be built from partial state.
    pub fn compute_result(
        &self,
        table: &CostTable,
    ) -> Result<CostBreakdown, ValidationError> {
        let grade = self.state.grade.ok_or(ValidationError::GradeNotSelected)?;
        let benefit_type = self
            .state
            .benefit_type
            .ok_or(ValidationError::BenefitTypeNotSelected)?;
        if benefit_type == BenefitType::Home && self.state.home_services.is_empty() {
            return Err(ValidationError::NoHomeServiceSelected);
        }
        let reduction_tier = self
            .state
            .reduction_tier
            .ok_or(ValidationError::ReductionTierNotSelected)?;

        Ok(CostWorksheet::new(table).calculate(&CostWorksheetInput {
            grade,
            benefit_type,
            reduction_tier,
        }))
    }

    /// Restores the initial state: step 1, no selections.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("wizard reset");
    }

    fn validate_step(
        &self,
        step: Step,
    ) -> Result<(), ValidationError> {
        match step {
            Step::Grade => {
                if self.state.grade.is_none() {
                    return Err(ValidationError::GradeNotSelected);
                }
            }
            Step::Benefit => match self.state.benefit_type {
                None => return Err(ValidationError::BenefitTypeNotSelected),
                Some(BenefitType::Home) if self.state.home_services.is_empty() => {
                    return Err(ValidationError::NoHomeServiceSelected);
                }
                Some(_) => {}
            },
            Step::Reduction => {
                if self.state.reduction_tier.is_none() {
                    return Err(ValidationError::ReductionTierNotSelected);
                }
            }
            // Step 4 is terminal; advance is bounded there.
            Step::Result => {}
        }
        Ok(())
    }
}
