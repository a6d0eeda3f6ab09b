//! Projection result models.
//!
//! This module contains the [`Projection`] type produced by the simulator:
//! the full daily balance trajectory plus summary totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated totals for a projection.
///
/// `final_balance` always equals `total_capital + total_gains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionTotals {
    /// The balance at the end of the horizon.
    pub final_balance: Decimal,
    /// The money the saver put in: initial deposit plus every top-up.
    pub total_capital: Decimal,
    /// Interest earned: final balance minus total capital. Negative only
    /// when the policy carries negative rates.
    pub total_gains: Decimal,
}

/// The full output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// The balance at the end of each day. Index 0 is the initial deposit;
    /// the vector has `total_days + 1` entries.
    pub balance_by_day: Vec<Decimal>,
    /// For tiered policies, the annual nominal rate percent in effect on
    /// each day, aligned with `balance_by_day` (entry 0 carries the rate of
    /// the tier containing the initial deposit). `None` for flat policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_by_day: Option<Vec<Decimal>>,
    /// Summary totals over the whole horizon.
    pub totals: ProjectionTotals,
}

impl Projection {
    /// Returns the number of simulated days (one less than the number of
    /// recorded balances).
    pub fn days(&self) -> usize {
        self.balance_by_day.len().saturating_sub(1)
    }
}
