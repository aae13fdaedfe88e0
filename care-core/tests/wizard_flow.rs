//! End-to-end wizard flows against the 2025 cost table.
//!
//! These complement the unit tests in `wizard.rs` by walking the full
//! four-step session the way a presentation layer would, including the
//! recalculate loop.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use care_core::calculations::common::round_to_won;
use care_core::{
    BenefitType, CareGrade, CostTable, HomeService, ReductionTier, Step, Wizard, WizardState,
};

#[test]
fn home_care_session_grade_one_no_reduction() {
    let table = CostTable::benefit_year_2025();
    let mut wizard = Wizard::new();

    wizard.select_grade(CareGrade::One);
    wizard.advance().unwrap();

    wizard.select_benefit_type(BenefitType::Home);
    wizard.toggle_home_service(HomeService::VisitingCare);
    wizard.toggle_home_service(HomeService::DayNightCare);
    wizard.advance().unwrap();

    wizard.select_reduction_tier(ReductionTier::None);
    let breakdown = wizard.compute_result(&table).unwrap();
    wizard.advance().unwrap();

    assert_eq!(wizard.state().step, Step::Result);
    assert_eq!(breakdown.base_cost, dec!(1997500));
    assert_eq!(breakdown.self_pay, dec!(299625));
    assert_eq!(breakdown.government_support, dec!(1697875));
}

#[test]
fn facility_session_grade_three_sixty_percent_reduction() {
    let table = CostTable::benefit_year_2025();
    let mut wizard = Wizard::new();

    wizard.select_grade(CareGrade::Three);
    wizard.advance().unwrap();
    wizard.select_benefit_type(BenefitType::Facility);
    wizard.advance().unwrap();
    wizard.select_reduction_tier(ReductionTier::Sixty);

    let breakdown = wizard.compute_result(&table).unwrap();

    assert_eq!(breakdown.base_cost, dec!(2305800));
    assert_eq!(breakdown.effective_copay_rate, dec!(0.08));
    assert_eq!(breakdown.self_pay, dec!(184464));
    assert_eq!(breakdown.government_support, dec!(2121336));
}

#[test]
fn cognitive_grade_facility_yields_zero_breakdown_for_every_tier() {
    let table = CostTable::benefit_year_2025();

    for tier in ReductionTier::ALL {
        let mut wizard = Wizard::new();
        wizard.select_grade(CareGrade::CognitiveSupport);
        wizard.select_benefit_type(BenefitType::Facility);
        wizard.select_reduction_tier(tier);

        let breakdown = wizard.compute_result(&table).unwrap();

        assert_eq!(breakdown.base_cost, dec!(0), "{tier:?}");
        assert_eq!(breakdown.self_pay, dec!(0), "{tier:?}");
        assert_eq!(breakdown.government_support, dec!(0), "{tier:?}");
    }
}

#[test]
fn going_back_and_changing_benefit_type_changes_the_result() {
    let table = CostTable::benefit_year_2025();
    let mut wizard = Wizard::new();

    wizard.select_grade(CareGrade::Two);
    wizard.advance().unwrap();
    wizard.select_benefit_type(BenefitType::Facility);
    wizard.advance().unwrap();
    wizard.select_reduction_tier(ReductionTier::None);
    let facility = wizard.compute_result(&table).unwrap();

    // Back to step 2, switch to home care.
    assert_eq!(wizard.retreat(), Step::Benefit);
    wizard.select_benefit_type(BenefitType::Home);
    wizard.toggle_home_service(HomeService::VisitingNursing);
    wizard.advance().unwrap();
    let home = wizard.compute_result(&table).unwrap();

    assert_eq!(facility.base_cost, dec!(2500800));
    assert_eq!(home.base_cost, dec!(1869600));
    assert_eq!(home.base_copay_rate, dec!(0.15));
}

#[test]
fn recalculate_resets_to_a_fresh_session() {
    let mut wizard = Wizard::new();

    wizard.select_grade(CareGrade::Four);
    wizard.advance().unwrap();
    wizard.select_benefit_type(BenefitType::Home);
    wizard.toggle_home_service(HomeService::WelfareEquipment);
    wizard.advance().unwrap();
    wizard.select_reduction_tier(ReductionTier::Full);
    wizard.advance().unwrap();

    wizard.reset();

    assert_eq!(wizard.state(), &WizardState::default());
    // The fresh session gates again from step 1.
    assert!(wizard.advance().is_err());
}

#[test]
fn presentation_rounding_matches_whole_won_figures() {
    let table = CostTable::benefit_year_2025();
    let mut wizard = Wizard::new();

    wizard.select_grade(CareGrade::Five);
    wizard.select_benefit_type(BenefitType::Home);
    wizard.toggle_home_service(HomeService::ShortStay);
    wizard.select_reduction_tier(ReductionTier::Forty);

    let breakdown = wizard.compute_result(&table).unwrap();

    // 1,151,100 × 0.15 × 0.6 = 103,599 exactly; rounding is a no-op here
    // but is what the presentation layer applies.
    assert_eq!(round_to_won(breakdown.self_pay), dec!(103599));
    assert_eq!(round_to_won(breakdown.government_support), dec!(1047501));
}
