//! Interest rate policy types.
//!
//! This module defines the [`InterestPolicy`] applied by the simulator and
//! the [`RateTier`] rows used by balance-dependent policies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A balance range with an associated annual nominal interest rate.
///
/// The range is half-open: a balance is covered when
/// `min_balance <= balance < max_balance`. A balance exactly equal to
/// `max_balance` belongs to the next tier up.
///
/// # Example
///
/// ```
/// use savings_engine::models::RateTier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tier = RateTier {
///     min_balance: Decimal::ZERO,
///     max_balance: Decimal::from_str("50000").unwrap(),
///     annual_rate_pct: Decimal::from_str("10.0").unwrap(),
/// };
/// assert!(tier.contains(Decimal::from_str("49999.99").unwrap()));
/// assert!(!tier.contains(Decimal::from_str("50000").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    /// The lowest balance covered by this tier (inclusive).
    pub min_balance: Decimal,
    /// The balance at which the next tier takes over (exclusive).
    pub max_balance: Decimal,
    /// The annual nominal rate, as a percentage (e.g. 12.5 for 12.5%).
    pub annual_rate_pct: Decimal,
}

impl RateTier {
    /// Returns whether the given balance falls inside this tier's
    /// half-open `[min_balance, max_balance)` range.
    pub fn contains(&self, balance: Decimal) -> bool {
        self.min_balance <= balance && balance < self.max_balance
    }
}

/// The interest rate policy applied by the simulator.
///
/// Either a single flat annual nominal rate regardless of balance, or an
/// ordered table of balance tiers each carrying its own rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum InterestPolicy {
    /// One annual nominal rate for every balance.
    Flat {
        /// The annual nominal rate, as a percentage.
        annual_rate_pct: Decimal,
    },
    /// Balance-dependent rates from an ordered, contiguous tier table.
    Tiered {
        /// The tier table, ascending by balance range.
        tiers: Vec<RateTier>,
    },
}

impl InterestPolicy {
    /// Returns whether this policy is balance-dependent.
    pub fn is_tiered(&self) -> bool {
        matches!(self, InterestPolicy::Tiered { .. })
    }

    /// Validates the policy.
    ///
    /// Flat policies are always valid (negative rates are accepted, see the
    /// simulator's handling of rates at or below -100%). Tiered policies
    /// must carry a well-formed tier table per [`validate_tiers`].
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            InterestPolicy::Flat { .. } => Ok(()),
            InterestPolicy::Tiered { tiers } => validate_tiers(tiers),
        }
    }
}

/// Validates a tier table.
///
/// A valid table is non-empty, every tier has `min_balance < max_balance`,
/// and consecutive tiers are contiguous: each tier starts exactly where the
/// previous one ends. This makes the rate lookup total over
/// `[first.min_balance, last.max_balance)`; a simulated balance escaping
/// that range is reported as [`EngineError::BalanceOutsideTiers`] rather
/// than silently reusing a stale rate.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTierTable`] describing the first violation
/// found.
pub fn validate_tiers(tiers: &[RateTier]) -> EngineResult<()> {
    if tiers.is_empty() {
        return Err(EngineError::InvalidTierTable {
            message: "tier table is empty".to_string(),
        });
    }

    for (index, tier) in tiers.iter().enumerate() {
        if tier.min_balance >= tier.max_balance {
            return Err(EngineError::InvalidTierTable {
                message: format!(
                    "tier {} has min_balance {} not below max_balance {}",
                    index + 1,
                    tier.min_balance,
                    tier.max_balance
                ),
            });
        }
    }

    for (index, pair) in tiers.windows(2).enumerate() {
        if pair[1].min_balance != pair[0].max_balance {
            return Err(EngineError::InvalidTierTable {
                message: format!(
                    "tier {} starts at {} but tier {} ends at {}",
                    index + 2,
                    pair[1].min_balance,
                    index + 1,
                    pair[0].max_balance
                ),
            });
        }
    }

    Ok(())
}
