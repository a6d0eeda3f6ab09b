//! Monthly downsampling of the daily trajectory.

use rust_decimal::Decimal;

/// Downsamples a daily balance series for monthly display.
///
/// Every `days_per_month`-th balance is taken counting *backward* from the
/// final day, so the series is anchored to the end of the horizon and each
/// kept point is the last day of a month. At most `period_months + 1`
/// points are kept and they are returned in forward chronological order.
///
/// For the canonical case where the series has exactly
/// `period_months * days_per_month + 1` entries, the result is the
/// balances at days `0, days_per_month, 2 * days_per_month, ...`.
///
/// # Example
///
/// ```
/// use savings_engine::simulation::monthly_balances;
/// use rust_decimal::Decimal;
///
/// let daily: Vec<Decimal> = (0..=60).map(Decimal::from).collect();
/// let monthly = monthly_balances(&daily, 30, 2);
/// assert_eq!(monthly, vec![Decimal::from(0), Decimal::from(30), Decimal::from(60)]);
/// ```
pub fn monthly_balances(
    balance_by_day: &[Decimal],
    days_per_month: u32,
    period_months: u32,
) -> Vec<Decimal> {
    if balance_by_day.is_empty() || days_per_month == 0 {
        return Vec::new();
    }

    let mut selected: Vec<Decimal> = balance_by_day
        .iter()
        .rev()
        .step_by(days_per_month as usize)
        .take(period_months as usize + 1)
        .copied()
        .collect();
    selected.reverse();
    selected
}
