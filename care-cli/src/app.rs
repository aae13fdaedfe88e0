//! One-shot estimate runner.
//!
//! Turns a fully specified set of CLI selections into a formatted report by
//! driving a [`Wizard`] through its steps the same way the interactive
//! prompt does. Every gate goes through [`Wizard::advance`], so the CLI path
//! and the prompt path enforce identical validation.

use std::collections::BTreeSet;
use std::fmt;

use care_core::calculations::CostBreakdown;
use care_core::{BenefitType, CareGrade, CostTable, HomeService, ReductionTier, Wizard};

use crate::utils::{format_percent, format_won};

/// A complete set of selections parsed from the command line.
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    pub grade: CareGrade,
    pub benefit_type: BenefitType,
    pub home_services: Vec<HomeService>,
    pub reduction_tier: ReductionTier,
}

/// The finished estimate, ready for display.
#[derive(Debug, Clone)]
pub struct EstimateReport {
    pub benefit_year: i32,
    pub request: EstimateRequest,
    pub breakdown: CostBreakdown,
}

/// Walk the wizard once with the given selections and compute the result.
///
/// # Errors
///
/// Propagates [`care_core::ValidationError`] when the selections are
/// incomplete (e.g. home care with no sub-service).
pub fn run_estimate(
    table: &CostTable,
    request: &EstimateRequest,
) -> anyhow::Result<EstimateReport> {
    let mut wizard = Wizard::new();

    wizard.select_grade(request.grade);
    wizard.advance()?;

    wizard.select_benefit_type(request.benefit_type);
    // Dedupe first: toggling a repeated flag twice would deselect it.
    let services: BTreeSet<HomeService> = request.home_services.iter().copied().collect();
    for service in services {
        wizard.toggle_home_service(service);
    }
    wizard.advance()?;

    wizard.select_reduction_tier(request.reduction_tier);
    let breakdown = wizard.compute_result(table)?;
    wizard.advance()?;

    Ok(EstimateReport {
        benefit_year: table.benefit_year,
        request: request.clone(),
        breakdown,
    })
}

impl fmt::Display for EstimateReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "장기요양 비용 계산 결과 ({}년 기준)",
            self.benefit_year
        )?;
        writeln!(f, "  등급: {}", self.request.grade.label())?;
        writeln!(f, "  급여 유형: {}", self.request.benefit_type.label())?;

        if self.request.benefit_type == BenefitType::Home {
            let services: Vec<&str> = self
                .request
                .home_services
                .iter()
                .map(|s| s.label())
                .collect();
            writeln!(f, "  선택 서비스: {}", services.join(", "))?;
        }

        writeln!(
            f,
            "  본인부담 감경: {}",
            self.request.reduction_tier.label()
        )?;
        writeln!(f, "  월 총 비용: {}", format_won(self.breakdown.base_cost))?;
        writeln!(
            f,
            "  본인부담금: {} ({})",
            format_won(self.breakdown.self_pay),
            format_percent(self.breakdown.effective_copay_rate)
        )?;
        write!(
            f,
            "  공단부담금: {}",
            format_won(self.breakdown.government_support)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn run_estimate_facility_flow() {
        let table = CostTable::benefit_year_2025();
        let request = EstimateRequest {
            grade: CareGrade::Three,
            benefit_type: BenefitType::Facility,
            home_services: Vec::new(),
            reduction_tier: ReductionTier::Sixty,
        };

        let report = run_estimate(&table, &request).unwrap();

        assert_eq!(report.breakdown.self_pay, dec!(184464));
        assert_eq!(report.benefit_year, 2025);
    }

    #[test]
    fn run_estimate_rejects_home_without_services() {
        let table = CostTable::benefit_year_2025();
        let request = EstimateRequest {
            grade: CareGrade::One,
            benefit_type: BenefitType::Home,
            home_services: Vec::new(),
            reduction_tier: ReductionTier::None,
        };

        assert!(run_estimate(&table, &request).is_err());
    }

    #[test]
    fn report_display_shows_rounded_won() {
        let table = CostTable::benefit_year_2025();
        let request = EstimateRequest {
            grade: CareGrade::One,
            benefit_type: BenefitType::Home,
            home_services: vec![HomeService::VisitingCare],
            reduction_tier: ReductionTier::None,
        };

        let rendered = run_estimate(&table, &request).unwrap().to_string();

        assert!(rendered.contains("299,625원"));
        assert!(rendered.contains("1,697,875원"));
        assert!(rendered.contains("15%"));
        assert!(rendered.contains("방문요양"));
    }
}
