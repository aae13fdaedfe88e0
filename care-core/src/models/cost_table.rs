use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BenefitType, CareGrade};

/// Reference-data row for one care grade in one benefit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRate {
    pub benefit_year: i32,
    pub grade: CareGrade,
    /// Monthly home-care benefit ceiling, in won.
    pub home_monthly_limit: Decimal,
    /// Daily facility rate, in won. Zero when the grade has no facility
    /// benefit (cognitive-support grade).
    pub facility_daily_rate: Decimal,
}

/// Immutable cost reference data for a single benefit year.
///
/// Lookups return [`Decimal::ZERO`] for a grade with no row rather than
/// failing; a zero base cost is a valid result (notably facility care for
/// the cognitive-support grade).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostTable {
    pub benefit_year: i32,
    pub grade_rates: Vec<GradeRate>,
    /// Recipient copay fraction for home benefits.
    pub home_copay_rate: Decimal,
    /// Recipient copay fraction for facility benefits.
    pub facility_copay_rate: Decimal,
    /// Days billed per month for facility care.
    pub facility_billing_days: Decimal,
}

impl CostTable {
    /// Official 2025 benefit-year amounts (NHIS notice).
    pub fn benefit_year_2025() -> Self {
        let rates = [
            (CareGrade::One, 1_997_500, 83_360),
            (CareGrade::Two, 1_869_600, 83_360),
            (CareGrade::Three, 1_455_800, 76_860),
            (CareGrade::Four, 1_341_800, 76_860),
            (CareGrade::Five, 1_151_100, 76_860),
            (CareGrade::CognitiveSupport, 642_400, 0),
        ];

        Self::from_rates(
            2025,
            rates
                .into_iter()
                .map(|(grade, home, daily)| GradeRate {
                    benefit_year: 2025,
                    grade,
                    home_monthly_limit: Decimal::from(home),
                    facility_daily_rate: Decimal::from(daily),
                })
                .collect(),
        )
    }

    /// Build a table for `benefit_year` from loaded grade rows, using the
    /// statutory copay rates (home 15%, facility 20%) and 30 billing days.
    pub fn from_rates(
        benefit_year: i32,
        grade_rates: Vec<GradeRate>,
    ) -> Self {
        Self {
            benefit_year,
            grade_rates,
            home_copay_rate: Decimal::new(15, 2),
            facility_copay_rate: Decimal::new(20, 2),
            facility_billing_days: Decimal::from(30),
        }
    }

    pub fn grade_rate(
        &self,
        grade: CareGrade,
    ) -> Option<&GradeRate> {
        self.grade_rates.iter().find(|r| r.grade == grade)
    }

    /// Monthly home-care ceiling for `grade`, or zero when unlisted.
    pub fn home_monthly_limit(
        &self,
        grade: CareGrade,
    ) -> Decimal {
        self.grade_rate(grade)
            .map_or(Decimal::ZERO, |r| r.home_monthly_limit)
    }

    /// Daily facility rate for `grade`, or zero when unlisted.
    pub fn facility_daily_rate(
        &self,
        grade: CareGrade,
    ) -> Decimal {
        self.grade_rate(grade)
            .map_or(Decimal::ZERO, |r| r.facility_daily_rate)
    }

    /// Copay fraction borne by the recipient before any reduction.
    pub fn copay_rate(
        &self,
        benefit_type: BenefitType,
    ) -> Decimal {
        match benefit_type {
            BenefitType::Home => self.home_copay_rate,
            BenefitType::Facility => self.facility_copay_rate,
        }
    }
}
