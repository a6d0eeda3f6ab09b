//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! defaults from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{InterestPolicy, RateTier};

use super::types::{EngineConfig, PlanDefaults, TierTableConfig};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the default plan values and the default tier table.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── plan.yaml   # Default plan values (target, deposit, horizon, rate)
/// └── tiers.yaml  # Default balance tier table
/// ```
///
/// # Example
///
/// ```no_run
/// use savings_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Default target: {}", loader.defaults().savings_target);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tier table is empty, overlapping, or leaves gaps
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load plan.yaml
        let plan_path = path.join("plan.yaml");
        let defaults = Self::load_yaml::<PlanDefaults>(&plan_path)?;

        // Load tiers.yaml
        let tiers_path = path.join("tiers.yaml");
        let tier_table = Self::load_yaml::<TierTableConfig>(&tiers_path)?;

        let config = EngineConfig::new(defaults, tier_table.tiers)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the default plan values.
    pub fn defaults(&self) -> &PlanDefaults {
        self.config.defaults()
    }

    /// Returns the default tier table.
    pub fn tiers(&self) -> &[RateTier] {
        self.config.tiers()
    }

    /// Builds a flat policy from the configured default rate.
    pub fn flat_policy(&self) -> InterestPolicy {
        InterestPolicy::Flat {
            annual_rate_pct: self.defaults().annual_rate_pct,
        }
    }

    /// Builds a tiered policy from the configured default tier table.
    pub fn tiered_policy(&self) -> InterestPolicy {
        InterestPolicy::Tiered {
            tiers: self.tiers().to_vec(),
        }
    }
}
