//! Shared helpers for cost calculations.

use rust_decimal::Decimal;

/// Rounds a won amount to a whole won using half-up rounding.
///
/// Apply this at presentation time only; intermediate amounts stay exact so
/// repeated recomputation never compounds rounding error.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use care_core::calculations::common::round_to_won;
///
/// assert_eq!(round_to_won(dec!(299625.4)), dec!(299625));
/// assert_eq!(round_to_won(dec!(299625.5)), dec!(299626));
/// ```
pub fn round_to_won(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
