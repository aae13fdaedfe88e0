//! Interactive terminal wizard.
//!
//! Line-oriented front end over the four wizard steps. Reads commands from
//! any [`BufRead`] and writes to any [`Write`], so sessions are scriptable
//! in tests with in-memory buffers.
//!
//! Commands at every step: a selection token for the step, `next`, `back`,
//! `quit`. On the result step, `again` starts a fresh session. A rejected
//! `next` prints the validation message and stays on the step, mirroring
//! the original calculator's disabled next buttons.

use std::io::{self, BufRead, Write};

use care_core::{
    BenefitType, CareGrade, CostTable, HomeService, ReductionTier, Step, Wizard,
};

use crate::app::{EstimateReport, EstimateRequest};

/// Run an interactive session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    table: &CostTable,
) -> io::Result<()> {
    let mut wizard = Wizard::new();

    writeln!(
        output,
        "장기요양 비용 계산기 ({}년 기준)",
        table.benefit_year
    )?;
    show_step(&mut output, &wizard)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        match command {
            "quit" | "q" => break,
            "back" => {
                wizard.retreat();
            }
            "again" if wizard.state().step == Step::Result => {
                wizard.reset();
            }
            "next" => match wizard.advance() {
                Ok(Step::Result) => {
                    // compute_result cannot fail here: every earlier gate
                    // has already passed through advance.
                    match wizard.compute_result(table) {
                        Ok(breakdown) => {
                            let report = EstimateReport {
                                benefit_year: table.benefit_year,
                                request: EstimateRequest {
                                    grade: wizard.state().grade.unwrap_or(CareGrade::One),
                                    benefit_type: wizard
                                        .state()
                                        .benefit_type
                                        .unwrap_or(BenefitType::Home),
                                    home_services: wizard
                                        .state()
                                        .home_services
                                        .iter()
                                        .copied()
                                        .collect(),
                                    reduction_tier: wizard
                                        .state()
                                        .reduction_tier
                                        .unwrap_or(ReductionTier::None),
                                },
                                breakdown,
                            };
                            writeln!(output, "{report}")?;
                        }
                        Err(err) => writeln!(output, "⚠ {err}")?,
                    }
                }
                Ok(_) => {}
                Err(err) => writeln!(output, "⚠ {err}")?,
            },
            token => apply_selection(&mut output, &mut wizard, token)?,
        }

        show_step(&mut output, &wizard)?;
    }

    Ok(())
}

/// Apply a step-specific selection token.
fn apply_selection<W: Write>(
    output: &mut W,
    wizard: &mut Wizard,
    token: &str,
) -> io::Result<()> {
    match wizard.state().step {
        Step::Grade => match CareGrade::parse(token) {
            Some(grade) => wizard.select_grade(grade),
            None => writeln!(output, "⚠ 알 수 없는 등급: {token}")?,
        },
        Step::Benefit => {
            if let Some(benefit_type) = BenefitType::parse(token) {
                wizard.select_benefit_type(benefit_type);
            } else if let Some(service) = HomeService::parse(token) {
                wizard.toggle_home_service(service);
            } else {
                writeln!(output, "⚠ 알 수 없는 선택: {token}")?;
            }
        }
        Step::Reduction => match ReductionTier::parse(token) {
            Some(tier) => wizard.select_reduction_tier(tier),
            None => writeln!(output, "⚠ 알 수 없는 감경 구분: {token}")?,
        },
        Step::Result => writeln!(output, "⚠ 'again' 또는 'quit'을 입력하세요")?,
    }
    Ok(())
}

/// Print the menu for the wizard's current step, marking selections.
fn show_step<W: Write>(
    output: &mut W,
    wizard: &Wizard,
) -> io::Result<()> {
    let state = wizard.state();
    writeln!(output, "[단계 {}/4]", state.step.number())?;

    match state.step {
        Step::Grade => {
            writeln!(output, "등급을 선택하세요:")?;
            for grade in CareGrade::ALL {
                let marker = if state.grade == Some(grade) { "●" } else { "○" };
                writeln!(output, "  {marker} {} — {}", grade.as_str(), grade.label())?;
            }
        }
        Step::Benefit => {
            writeln!(output, "급여 유형을 선택하세요 (home / facility):")?;
            for benefit_type in [BenefitType::Home, BenefitType::Facility] {
                let marker = if state.benefit_type == Some(benefit_type) {
                    "●"
                } else {
                    "○"
                };
                writeln!(
                    output,
                    "  {marker} {} — {}",
                    benefit_type.as_str(),
                    benefit_type.label()
                )?;
            }
            if state.benefit_type == Some(BenefitType::Home) {
                writeln!(output, "재가 서비스를 하나 이상 선택하세요:")?;
                for service in HomeService::ALL {
                    let marker = if state.home_services.contains(&service) {
                        "☑"
                    } else {
                        "☐"
                    };
                    writeln!(
                        output,
                        "  {marker} {} — {}",
                        service.as_str(),
                        service.label()
                    )?;
                }
            }
        }
        Step::Reduction => {
            writeln!(output, "본인부담 감경 구분을 선택하세요:")?;
            for tier in ReductionTier::ALL {
                let marker = if state.reduction_tier == Some(tier) {
                    "●"
                } else {
                    "○"
                };
                writeln!(output, "  {marker} {} — {}", tier.percent(), tier.label())?;
            }
        }
        Step::Result => {
            writeln!(output, "다시 계산하려면 'again', 종료하려면 'quit'")?;
        }
    }

    write!(output, "> ")?;
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(script: &str) -> String {
        let table = CostTable::benefit_year_2025();
        let mut output = Vec::new();
        run(script.as_bytes(), &mut output, &table).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_facility_session_prints_breakdown() {
        let output = run_session("3\nnext\nfacility\nnext\n60\nnext\nquit\n");

        assert!(output.contains("184,464원"));
        assert!(output.contains("2,121,336원"));
        assert!(output.contains("시설급여"));
    }

    #[test]
    fn next_without_grade_shows_validation_message() {
        let output = run_session("next\nquit\n");

        assert!(output.contains("care grade must be selected"));
        // Still prompting on step 1 afterwards.
        assert!(output.contains("[단계 1/4]"));
    }

    #[test]
    fn home_session_requires_service_then_succeeds() {
        let output = run_session(
            "1\nnext\nhome\nnext\nvisiting-care\nnext\n0\nnext\nquit\n",
        );

        assert!(output.contains("at least one home-care service"));
        assert!(output.contains("299,625원"));
    }

    #[test]
    fn again_resets_to_step_one() {
        let output = run_session("2\nnext\nfacility\nnext\n100\nnext\nagain\nquit\n");

        assert!(output.contains("0원"));
        // After `again` the step-1 menu appears a second time.
        assert!(output.matches("[단계 1/4]").count() >= 2);
    }

    #[test]
    fn back_returns_to_previous_step() {
        let output = run_session("4\nnext\nback\nquit\n");

        let step_one = output.matches("[단계 1/4]").count();
        assert!(step_one >= 2, "expected to land back on step 1:\n{output}");
    }
}
