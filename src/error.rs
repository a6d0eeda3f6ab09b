//! Error types for the Micro-Savings Simulation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration or
//! running a projection.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Micro-Savings Simulation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use savings_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A savings plan field violated a basic range invariant.
    #[error("Invalid plan field '{field}': {message}")]
    InvalidPlan {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A tier table was empty, out of order, overlapping, or left gaps.
    #[error("Invalid tier table: {message}")]
    InvalidTierTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// A simulated balance fell outside every configured tier range.
    #[error("Balance {balance} on day {day} is outside all configured tiers")]
    BalanceOutsideTiers {
        /// The balance that no tier covered.
        balance: Decimal,
        /// The simulation day on which the lookup failed.
        day: u32,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
