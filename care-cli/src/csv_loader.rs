//! CSV loader for benefit-year cost reference data.
//!
//! The built-in table covers the 2025 benefit year; NHIS revises the
//! ceilings and daily rates annually, so the CLI accepts a CSV override.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does **not** matter. Header
//! names are case-sensitive.
//!
//! | Column                | Required | Type    | Notes                                   |
//! |-----------------------|----------|---------|-----------------------------------------|
//! | `benefit_year`        | yes      | integer | e.g. `2025`                             |
//! | `grade`               | yes      | string  | One of: `1`..`5`, `cognitive`           |
//! | `home_monthly_limit`  | yes      | decimal | Monthly home-care ceiling, won          |
//! | `facility_daily_rate` | yes      | decimal | Daily facility rate, won (`0` = none)   |
//!
//! ### Example
//!
//! ```csv
//! benefit_year,grade,home_monthly_limit,facility_daily_rate
//! 2025,1,1997500,83360
//! 2025,cognitive,642400,0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use care_core::{CareGrade, GradeRate};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    benefit_year: i32,
    grade: String,
    home_monthly_limit: Decimal,
    facility_daily_rate: Decimal,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading cost reference data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `grade` cell contained a value that is not a recognised grade
    /// code. The row number is 1-based (header = row 0).
    #[error("unrecognised care grade '{grade}' on row {row}")]
    InvalidGrade { grade: String, row: usize },

    /// The file contained no data rows.
    #[error("no grade rows found in the CSV")]
    Empty,
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a GradeRate.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<GradeRate, CsvLoadError> {
    let grade = CareGrade::parse(&row.grade).ok_or_else(|| CsvLoadError::InvalidGrade {
        grade: row.grade.clone(),
        row: row_number,
    })?;

    Ok(GradeRate {
        benefit_year: row.benefit_year,
        grade,
        home_monthly_limit: row.home_monthly_limit,
        facility_daily_rate: row.facility_daily_rate,
    })
}

/// Load grade rates from any reader producing CSV with a header row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<GradeRate>, CsvLoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rates = Vec::new();

    for (i, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        rates.push(convert_row(record?, i + 1)?);
    }

    if rates.is_empty() {
        return Err(CsvLoadError::Empty);
    }
    Ok(rates)
}

/// Load grade rates from a CSV file on disk.
pub fn load_from_file(path: &Path) -> Result<Vec<GradeRate>, CsvLoadError> {
    let file = File::open(path).map_err(csv::Error::from)?;
    load_from_reader(file)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn load_minimal_csv() {
        let csv = "\
benefit_year,grade,home_monthly_limit,facility_daily_rate
2025,1,1997500,83360
2025,cognitive,642400,0
";

        let rates = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(rates.len(), 2);
        assert_eq!(rates[0].grade, CareGrade::One);
        assert_eq!(rates[0].home_monthly_limit, dec!(1997500));
        assert_eq!(rates[1].grade, CareGrade::CognitiveSupport);
        assert_eq!(rates[1].facility_daily_rate, dec!(0));
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "\
grade,facility_daily_rate,benefit_year,home_monthly_limit
3,76860,2025,1455800
";

        let rates = load_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(rates[0].grade, CareGrade::Three);
        assert_eq!(rates[0].benefit_year, 2025);
        assert_eq!(rates[0].home_monthly_limit, dec!(1455800));
    }

    #[test]
    fn unknown_grade_reports_row_number() {
        let csv = "\
benefit_year,grade,home_monthly_limit,facility_daily_rate
2025,1,1997500,83360
2025,7,0,0
";

        let err = load_from_reader(csv.as_bytes()).unwrap_err();

        match err {
            CsvLoadError::InvalidGrade { grade, row } => {
                assert_eq!(grade, "7");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidGrade, got {other:?}"),
        }
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let csv = "\
benefit_year,grade,home_monthly_limit
2025,1,1997500
";

        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(CsvLoadError::Parse(_))
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let csv = "benefit_year,grade,home_monthly_limit,facility_daily_rate\n";

        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(CsvLoadError::Empty)
        ));
    }
}
