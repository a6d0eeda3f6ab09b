//! Savings plan model.
//!
//! This module defines the [`SavingsPlan`] value record that fully describes
//! one simulation run: starting conditions, horizon, recurring top-up, and
//! the interest policy in force.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::InterestPolicy;

/// The month length used when no other value is configured.
///
/// Together with the fixed 360-day rate year (30 x 12) this forms the
/// engine's banking-day convention.
pub const DEFAULT_DAYS_PER_MONTH: u32 = 30;

/// A complete description of one savings scenario.
///
/// Plans are immutable value records constructed fresh per invocation; the
/// engine holds no state between projections.
///
/// # Example
///
/// ```
/// use savings_engine::models::{InterestPolicy, SavingsPlan, DEFAULT_DAYS_PER_MONTH};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let plan = SavingsPlan {
///     initial_deposit: Decimal::from_str("10000").unwrap(),
///     period_months: 6,
///     days_per_month: DEFAULT_DAYS_PER_MONTH,
///     daily_top_up: Decimal::from_str("1611").unwrap(),
///     policy: InterestPolicy::Flat {
///         annual_rate_pct: Decimal::from_str("10.0").unwrap(),
///     },
/// };
/// assert_eq!(plan.total_days(), 180);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// The balance at day zero.
    pub initial_deposit: Decimal,
    /// The savings horizon in months.
    pub period_months: u32,
    /// The number of simulated days per month.
    pub days_per_month: u32,
    /// The amount deposited at the end of every simulated day. A negative
    /// top-up is accepted (the user may be planning withdrawals against a
    /// target already exceeded).
    pub daily_top_up: Decimal,
    /// The interest policy in force.
    pub policy: InterestPolicy,
}

impl SavingsPlan {
    /// Returns the total number of simulated days in the horizon.
    pub fn total_days(&self) -> u32 {
        self.period_months.saturating_mul(self.days_per_month)
    }

    /// Validates the basic range invariants of the plan.
    ///
    /// Checks that the initial deposit is not negative, that the horizon
    /// and month length are at least one, and that a tiered policy carries
    /// a well-formed tier table. Anything beyond these basic range
    /// constraints is trusted input.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPlan`] or
    /// [`EngineError::InvalidTierTable`] for the first violation found.
    pub fn validate(&self) -> EngineResult<()> {
        if self.initial_deposit < Decimal::ZERO {
            return Err(EngineError::InvalidPlan {
                field: "initial_deposit".to_string(),
                message: "must not be negative".to_string(),
            });
        }
        if self.period_months == 0 {
            return Err(EngineError::InvalidPlan {
                field: "period_months".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.days_per_month == 0 {
            return Err(EngineError::InvalidPlan {
                field: "days_per_month".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        self.policy.validate()
    }
}
