//! The daily forward projection loop.
//!
//! This module implements the engine's core operation: an inherently
//! sequential day-by-day scan in which each day's balance is derived from
//! the previous day's balance, the rate in force, and the recurring top-up.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{InterestPolicy, Projection, ProjectionTotals, SavingsPlan};

use super::daily_rate::daily_rate;
use super::rate_lookup::select_tier;

/// Runs the forward simulation for a savings plan.
///
/// Day 0 is the initial deposit; no interest or top-up applies to it. Every
/// following day, in order:
///
/// 1. The annual nominal rate in force is determined — the configured rate
///    for flat policies, or the tier covering the balance *entering* the
///    day for tiered policies.
/// 2. The balance compounds by the daily equivalent of that rate and the
///    daily top-up is added.
///
/// The function is pure and deterministic: the same plan always produces
/// the same projection.
///
/// # Errors
///
/// * [`EngineError::InvalidTierTable`] — a tiered policy carries a
///   malformed table.
/// * [`EngineError::BalanceOutsideTiers`] — the trajectory left the range
///   covered by the table.
/// * [`EngineError::CalculationError`] — a rate at or below -100% cannot
///   be converted to a daily rate.
///
/// [`EngineError::InvalidTierTable`]: crate::error::EngineError::InvalidTierTable
/// [`EngineError::BalanceOutsideTiers`]: crate::error::EngineError::BalanceOutsideTiers
/// [`EngineError::CalculationError`]: crate::error::EngineError::CalculationError
pub fn simulate(plan: &SavingsPlan) -> EngineResult<Projection> {
    plan.policy.validate()?;

    let total_days = plan.total_days();
    let mut balance_by_day = Vec::with_capacity(total_days as usize + 1);
    balance_by_day.push(plan.initial_deposit);

    let mut balance = plan.initial_deposit;
    let mut total_top_ups = Decimal::ZERO;

    let rate_by_day = match &plan.policy {
        InterestPolicy::Flat { annual_rate_pct } => {
            let growth = Decimal::ONE + daily_rate(*annual_rate_pct)?;
            for _ in 1..=total_days {
                balance = balance * growth + plan.daily_top_up;
                total_top_ups += plan.daily_top_up;
                balance_by_day.push(balance);
            }
            None
        }
        InterestPolicy::Tiered { tiers } => {
            // One rate conversion per tier; the day loop only scans ranges.
            let growth_by_tier = tiers
                .iter()
                .map(|tier| daily_rate(tier.annual_rate_pct).map(|rate| Decimal::ONE + rate))
                .collect::<EngineResult<Vec<_>>>()?;

            let mut rates = Vec::with_capacity(total_days as usize + 1);
            // Day 0 records the rate of the tier covering the initial
            // deposit, which is the rate day 1 applies.
            let opening = select_tier(tiers, balance, 0)?;
            rates.push(tiers[opening].annual_rate_pct);

            for day in 1..=total_days {
                // Tier selection uses the balance entering the day, before
                // that day's interest and top-up land.
                let index = select_tier(tiers, balance, day)?;
                balance = balance * growth_by_tier[index] + plan.daily_top_up;
                total_top_ups += plan.daily_top_up;
                balance_by_day.push(balance);
                rates.push(tiers[index].annual_rate_pct);
            }
            Some(rates)
        }
    };

    let total_capital = plan.initial_deposit + total_top_ups;
    let total_gains = balance - total_capital;

    Ok(Projection {
        balance_by_day,
        rate_by_day,
        totals: ProjectionTotals {
            final_balance: balance,
            total_capital,
            total_gains,
        },
    })
}
