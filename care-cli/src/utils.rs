use rust_decimal::Decimal;

use care_core::calculations::common::round_to_won;

/// Formats a won amount for display: rounded to a whole won, comma thousands
/// separators, `원` suffix (e.g. `1,997,500원`).
pub fn format_won(amount: Decimal) -> String {
    let rounded = round_to_won(amount);
    let raw = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}원")
}

/// Formats a copay fraction as a whole percentage (e.g. `0.08` → `8%`).
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", round_to_won(rate * Decimal::ONE_HUNDRED))
}
