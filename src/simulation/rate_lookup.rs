//! Tier selection for balance-dependent rates.
//!
//! This module resolves which tier of a rate table applies to a given
//! balance. The lookup is total over a validated table: any balance the
//! table does not cover is a typed error, never a silently reused rate.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::RateTier;

/// Selects the tier covering `balance`, scanning the table in configured
/// order and matching against each half-open `[min_balance, max_balance)`
/// range.
///
/// The `day` is carried into the error for diagnostics only; it does not
/// affect selection.
///
/// # Errors
///
/// Returns [`EngineError::BalanceOutsideTiers`] when no tier covers the
/// balance (e.g. the trajectory grew past the last tier's `max_balance`, or
/// a negative top-up pulled it below the first tier's `min_balance`).
///
/// # Example
///
/// ```
/// use savings_engine::models::RateTier;
/// use savings_engine::simulation::select_tier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tiers = vec![RateTier {
///     min_balance: Decimal::ZERO,
///     max_balance: Decimal::from_str("50000").unwrap(),
///     annual_rate_pct: Decimal::from_str("10.0").unwrap(),
/// }];
/// let index = select_tier(&tiers, Decimal::from_str("100").unwrap(), 1).unwrap();
/// assert_eq!(index, 0);
/// ```
pub fn select_tier(tiers: &[RateTier], balance: Decimal, day: u32) -> EngineResult<usize> {
    tiers
        .iter()
        .position(|tier| tier.contains(balance))
        .ok_or(EngineError::BalanceOutsideTiers { balance, day })
}
