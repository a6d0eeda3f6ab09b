//! Configuration types for the simulation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{RateTier, validate_tiers};

/// Default plan values presented to the user before any input.
///
/// These seed API requests that omit optional fields, so an empty request
/// runs the same scenario a freshly opened form would show.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanDefaults {
    /// The default savings target.
    pub savings_target: Decimal,
    /// The default initial deposit.
    pub initial_deposit: Decimal,
    /// The default horizon in months.
    pub period_months: u32,
    /// The default flat annual nominal rate percent.
    pub annual_rate_pct: Decimal,
    /// The number of simulated days per month.
    pub days_per_month: u32,
}

/// Tier table configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TierTableConfig {
    /// The configured tiers, ascending by balance range.
    pub tiers: Vec<RateTier>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Default plan values.
    defaults: PlanDefaults,
    /// The default tier table (sorted by min_balance, validated).
    tiers: Vec<RateTier>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// Tiers are sorted by `min_balance` and the resulting table is
    /// validated, so a loaded configuration is always usable as a tiered
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidTierTable`] when the
    /// sorted table is empty, overlapping, or leaves gaps.
    pub fn new(defaults: PlanDefaults, tiers: Vec<RateTier>) -> EngineResult<Self> {
        let mut sorted_tiers = tiers;
        sorted_tiers.sort_by(|a, b| a.min_balance.cmp(&b.min_balance));
        validate_tiers(&sorted_tiers)?;
        Ok(Self {
            defaults,
            tiers: sorted_tiers,
        })
    }

    /// Returns the default plan values.
    pub fn defaults(&self) -> &PlanDefaults {
        &self.defaults
    }

    /// Returns the default tier table.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }
}
