//! Monthly cost worksheet for long-term-care benefits.
//!
//! This module computes the self-pay / government split for one month of
//! care, given a care grade, a benefit type, and the recipient's copay
//! reduction tier.
//!
//! # Worksheet Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Base cost: monthly home ceiling, or daily facility rate × billing days |
//! | 2    | Base copay rate for the benefit type (15% home / 20% facility) |
//! | 3    | Effective copay rate: Line 2 × reduction-tier multiplier |
//! | 4    | Self-pay amount: Line 1 × Line 3 |
//! | 5    | Government support: Line 1 − Line 4 |
//!
//! The reduction tier names the percentage *removed* from the copay, so its
//! multiplier is the inverted remainder (60% reduction → ×0.4). Lines 4 and
//! 5 always sum back to Line 1 exactly; nothing is rounded here.
//!
//! A grade with no facility benefit (cognitive support) produces a zero base
//! cost and an all-zero breakdown, which is a valid result, not an error.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use care_core::calculations::{CostWorksheet, CostWorksheetInput};
//! use care_core::{BenefitType, CareGrade, CostTable, ReductionTier};
//!
//! let table = CostTable::benefit_year_2025();
//! let worksheet = CostWorksheet::new(&table);
//!
//! let breakdown = worksheet.calculate(&CostWorksheetInput {
//!     grade: CareGrade::Three,
//!     benefit_type: BenefitType::Facility,
//!     reduction_tier: ReductionTier::Sixty,
//! });
//!
//! assert_eq!(breakdown.base_cost, dec!(2305800));
//! assert_eq!(breakdown.effective_copay_rate, dec!(0.080));
//! assert_eq!(breakdown.self_pay, dec!(184464.000));
//! assert_eq!(breakdown.government_support, dec!(2121336.000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{BenefitType, CareGrade, CostTable, ReductionTier};

/// A completed set of selections for one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostWorksheetInput {
    pub grade: CareGrade,
    pub benefit_type: BenefitType,
    pub reduction_tier: ReductionTier,
}

/// Result of the cost worksheet, all amounts exact (unrounded) won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total monthly cost before the copay split (Line 1).
    pub base_cost: Decimal,

    /// Copay rate for the benefit type before any reduction (Line 2).
    pub base_copay_rate: Decimal,

    /// Copay rate actually in effect after the reduction tier (Line 3).
    pub effective_copay_rate: Decimal,

    /// Amount borne by the recipient (Line 4).
    pub self_pay: Decimal,

    /// Amount covered by the insurance fund (Line 5).
    pub government_support: Decimal,
}

/// Calculator over a benefit-year [`CostTable`].
///
/// The worksheet is total: every combination of the closed input enums
/// produces a breakdown. Checking that the user actually made each
/// selection is the wizard's job, not this worksheet's.
#[derive(Debug, Clone)]
pub struct CostWorksheet<'a> {
    table: &'a CostTable,
}

impl<'a> CostWorksheet<'a> {
    pub fn new(table: &'a CostTable) -> Self {
        Self { table }
    }

    /// Computes the full breakdown for `input`.
    pub fn calculate(
        &self,
        input: &CostWorksheetInput,
    ) -> CostBreakdown {
        let base_cost = self.base_cost(input.grade, input.benefit_type);
        let base_copay_rate = self.table.copay_rate(input.benefit_type);
        let effective_copay_rate = base_copay_rate * input.reduction_tier.copay_multiplier();

        let self_pay = base_cost * effective_copay_rate;
        let government_support = base_cost - self_pay;

        if base_cost.is_zero() {
            warn!(
                grade = input.grade.as_str(),
                benefit = input.benefit_type.as_str(),
                "no benefit payable for this grade and benefit type"
            );
        }

        CostBreakdown {
            base_cost,
            base_copay_rate,
            effective_copay_rate,
            self_pay,
            government_support,
        }
    }

    /// Line 1: the monthly ceiling for home care, or the daily facility rate
    /// over one billing month.
    fn base_cost(
        &self,
        grade: CareGrade,
        benefit_type: BenefitType,
    ) -> Decimal {
        match benefit_type {
            BenefitType::Home => self.table.home_monthly_limit(grade),
            BenefitType::Facility => {
                self.table.facility_daily_rate(grade) * self.table.facility_billing_days
            }
        }
    }
}
