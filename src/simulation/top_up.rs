//! Suggested daily top-up calculation.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Computes the whole-currency-unit daily top-up needed to close the gap
/// between the initial deposit and the savings target over the horizon.
///
/// The division truncates toward zero, so the suggestion slightly
/// undershoots the target rather than overshooting it. A target below the
/// initial deposit yields a negative suggestion: the caller is expected to
/// surface it as-is and let the user decide, not clamp or reject it. A
/// zero-day horizon degrades to a suggestion of 0.
///
/// # Example
///
/// ```
/// use savings_engine::simulation::suggest_daily_top_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let top_up = suggest_daily_top_up(
///     Decimal::from_str("10000").unwrap(),
///     6,
///     Decimal::from_str("300000").unwrap(),
///     30,
/// );
/// assert_eq!(top_up, 1611);
/// ```
pub fn suggest_daily_top_up(
    initial_deposit: Decimal,
    period_months: u32,
    savings_target: Decimal,
    days_per_month: u32,
) -> i64 {
    let total_days = i64::from(period_months) * i64::from(days_per_month);
    if total_days == 0 {
        return 0;
    }

    let remaining = savings_target - initial_deposit;
    let per_day = (remaining / Decimal::from(total_days)).trunc();

    // Saturate instead of panicking for magnitudes no savings account will
    // ever see.
    per_day.to_i64().unwrap_or(if per_day.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
