//! Configuration loading and management for the simulation engine.
//!
//! This module provides functionality to load engine defaults from YAML
//! files: the default plan values and the default balance tier table.
//!
//! # Example
//!
//! ```no_run
//! use savings_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default horizon: {} months", config.defaults().period_months);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, PlanDefaults, TierTableConfig};
