//! Cost calculation modules for long-term-care benefit estimates.
//!
//! The worksheet in [`cost_worksheet`] turns a completed set of selections
//! plus a benefit-year [`crate::CostTable`] into a self-pay / government
//! split.

pub mod common;
pub mod cost_worksheet;

pub use cost_worksheet::{CostBreakdown, CostWorksheet, CostWorksheetInput};
