//! Request types for the simulation engine API.
//!
//! This module defines the JSON request structures for the `/simulate` and
//! `/top-up` endpoints. Every field is optional: the engine fills omitted
//! fields from the configured defaults, mirroring a form that arrives
//! pre-filled. In particular, when `daily_top_up` is omitted it is derived
//! from the savings target, the same way a form pre-computes the suggestion
//! before the user overrides it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::models::{InterestPolicy, RateTier, SavingsPlan};
use crate::simulation::suggest_daily_top_up;

/// Request body for the `/simulate` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The balance at day zero. Defaults to the configured value.
    #[serde(default)]
    pub initial_deposit: Option<Decimal>,
    /// The savings horizon in months. Defaults to the configured value.
    #[serde(default)]
    pub period_months: Option<u32>,
    /// The number of simulated days per month. Defaults to the configured
    /// value; front-ends normally do not expose it.
    #[serde(default)]
    pub days_per_month: Option<u32>,
    /// The savings target used to derive the suggested top-up.
    #[serde(default)]
    pub savings_target: Option<Decimal>,
    /// Overrides the suggested daily top-up.
    #[serde(default)]
    pub daily_top_up: Option<Decimal>,
    /// The interest policy. Defaults to a flat policy at the configured
    /// rate.
    #[serde(default)]
    pub policy: Option<PolicyRequest>,
}

/// Interest policy selection in a simulation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PolicyRequest {
    /// A flat annual nominal rate.
    Flat {
        /// The rate percent; defaults to the configured value.
        #[serde(default)]
        annual_rate_pct: Option<Decimal>,
    },
    /// Balance-dependent tiered rates.
    Tiered {
        /// An inline tier table; defaults to the configured table.
        #[serde(default)]
        tiers: Option<Vec<RateTier>>,
    },
}

/// Request body for the `/top-up` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopUpRequest {
    /// The balance at day zero. Defaults to the configured value.
    #[serde(default)]
    pub initial_deposit: Option<Decimal>,
    /// The savings horizon in months. Defaults to the configured value.
    #[serde(default)]
    pub period_months: Option<u32>,
    /// The savings target. Defaults to the configured value.
    #[serde(default)]
    pub savings_target: Option<Decimal>,
    /// The number of simulated days per month. Defaults to the configured
    /// value.
    #[serde(default)]
    pub days_per_month: Option<u32>,
}

/// A simulation request with every field resolved against the defaults.
#[derive(Debug, Clone)]
pub struct ResolvedSimulation {
    /// The fully-specified plan to simulate.
    pub plan: SavingsPlan,
    /// The savings target the suggestion was derived from.
    pub savings_target: Decimal,
    /// The suggested daily top-up toward the target.
    pub suggested_daily_top_up: i64,
}

impl SimulationRequest {
    /// Resolves the request into a concrete [`SavingsPlan`], filling every
    /// omitted field from the configured defaults and deriving the daily
    /// top-up from the savings target when no override is given.
    pub fn resolve(self, config: &ConfigLoader) -> ResolvedSimulation {
        let defaults = config.defaults();

        let initial_deposit = self.initial_deposit.unwrap_or(defaults.initial_deposit);
        let period_months = self.period_months.unwrap_or(defaults.period_months);
        let days_per_month = self.days_per_month.unwrap_or(defaults.days_per_month);
        let savings_target = self.savings_target.unwrap_or(defaults.savings_target);

        let suggested_daily_top_up =
            suggest_daily_top_up(initial_deposit, period_months, savings_target, days_per_month);
        let daily_top_up = self
            .daily_top_up
            .unwrap_or_else(|| Decimal::from(suggested_daily_top_up));

        let policy = match self.policy {
            None => config.flat_policy(),
            Some(PolicyRequest::Flat { annual_rate_pct }) => InterestPolicy::Flat {
                annual_rate_pct: annual_rate_pct.unwrap_or(defaults.annual_rate_pct),
            },
            Some(PolicyRequest::Tiered { tiers }) => match tiers {
                Some(tiers) => InterestPolicy::Tiered { tiers },
                None => config.tiered_policy(),
            },
        };

        ResolvedSimulation {
            plan: SavingsPlan {
                initial_deposit,
                period_months,
                days_per_month,
                daily_top_up,
                policy,
            },
            savings_target,
            suggested_daily_top_up,
        }
    }
}

impl TopUpRequest {
    /// Resolves the request against the configured defaults and returns
    /// the suggested daily top-up.
    pub fn resolve(self, config: &ConfigLoader) -> i64 {
        let defaults = config.defaults();

        suggest_daily_top_up(
            self.initial_deposit.unwrap_or(defaults.initial_deposit),
            self.period_months.unwrap_or(defaults.period_months),
            self.savings_target.unwrap_or(defaults.savings_target),
            self.days_per_month.unwrap_or(defaults.days_per_month),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn loader() -> ConfigLoader {
        ConfigLoader::load("./config/default").expect("Failed to load config")
    }

    #[test]
    fn test_empty_request_resolves_to_configured_defaults() {
        let resolved = SimulationRequest::default().resolve(&loader());

        assert_eq!(resolved.plan.initial_deposit, dec("10000"));
        assert_eq!(resolved.plan.period_months, 6);
        assert_eq!(resolved.plan.days_per_month, 30);
        assert_eq!(resolved.savings_target, dec("300000"));
        assert_eq!(resolved.suggested_daily_top_up, 1611);
        assert_eq!(resolved.plan.daily_top_up, dec("1611"));
        assert_eq!(
            resolved.plan.policy,
            InterestPolicy::Flat {
                annual_rate_pct: dec("10.0")
            }
        );
    }

    #[test]
    fn test_explicit_top_up_overrides_suggestion() {
        let request = SimulationRequest {
            daily_top_up: Some(dec("2000")),
            ..Default::default()
        };

        let resolved = request.resolve(&loader());

        assert_eq!(resolved.plan.daily_top_up, dec("2000"));
        assert_eq!(resolved.suggested_daily_top_up, 1611);
    }

    #[test]
    fn test_tiered_mode_without_table_uses_configured_tiers() {
        let request = SimulationRequest {
            policy: Some(PolicyRequest::Tiered { tiers: None }),
            ..Default::default()
        };

        let resolved = request.resolve(&loader());

        match resolved.plan.policy {
            InterestPolicy::Tiered { tiers } => assert_eq!(tiers.len(), 5),
            other => panic!("Expected tiered policy, got {:?}", other),
        }
    }

    #[test]
    fn test_inline_tier_table_is_kept_verbatim() {
        let inline = vec![RateTier {
            min_balance: Decimal::ZERO,
            max_balance: dec("500"),
            annual_rate_pct: dec("1.0"),
        }];
        let request = SimulationRequest {
            policy: Some(PolicyRequest::Tiered {
                tiers: Some(inline.clone()),
            }),
            ..Default::default()
        };

        let resolved = request.resolve(&loader());

        assert_eq!(
            resolved.plan.policy,
            InterestPolicy::Tiered { tiers: inline }
        );
    }

    #[test]
    fn test_deserialize_flat_request() {
        let json = r#"{
            "initial_deposit": "10000",
            "period_months": 6,
            "savings_target": "300000",
            "policy": { "mode": "flat", "annual_rate_pct": "10.0" }
        }"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.initial_deposit, Some(dec("10000")));
        assert!(matches!(
            request.policy,
            Some(PolicyRequest::Flat {
                annual_rate_pct: Some(_)
            })
        ));
    }

    #[test]
    fn test_deserialize_tiered_request_with_inline_table() {
        let json = r#"{
            "policy": {
                "mode": "tiered",
                "tiers": [
                    { "min_balance": "0", "max_balance": "50000", "annual_rate_pct": "10.0" }
                ]
            }
        }"#;

        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        match request.policy {
            Some(PolicyRequest::Tiered { tiers: Some(tiers) }) => {
                assert_eq!(tiers.len(), 1);
                assert_eq!(tiers[0].max_balance, dec("50000"));
            }
            other => panic!("Expected inline tiered policy, got {:?}", other),
        }
    }

    #[test]
    fn test_top_up_request_resolution() {
        let request = TopUpRequest {
            savings_target: Some(dec("5000")),
            ..Default::default()
        };

        // Target below the default deposit: the suggestion goes negative.
        assert_eq!(request.resolve(&loader()), -27);
    }
}
