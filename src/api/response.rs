//! Response types for the simulation engine API.
//!
//! This module defines the success payloads for the `/simulate` and
//! `/top-up` endpoints, plus the error response structures and error
//! handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::ProjectionTotals;

/// Response body for the `/simulate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResponse {
    /// Unique identifier for this simulation run.
    pub simulation_id: Uuid,
    /// When the simulation was computed.
    pub timestamp: DateTime<Utc>,
    /// The engine version that produced the result.
    pub engine_version: String,
    /// The savings target the top-up suggestion was derived from.
    pub savings_target: Decimal,
    /// The suggested whole-unit daily top-up toward the target. May be
    /// negative when the target sits below the initial deposit.
    pub suggested_daily_top_up: i64,
    /// The daily top-up actually simulated (the caller's override, or the
    /// suggestion when none was given).
    pub daily_top_up: Decimal,
    /// The balance at the end of each day; index 0 is the initial deposit.
    pub balance_by_day: Vec<Decimal>,
    /// For tiered policies, the annual nominal rate percent in effect on
    /// each day.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_by_day: Option<Vec<Decimal>>,
    /// The monthly downsample of the balance trajectory, for charting.
    pub monthly_balances: Vec<Decimal>,
    /// Summary totals over the whole horizon.
    pub totals: ProjectionTotals,
}

/// Response body for the `/top-up` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopUpResponse {
    /// The suggested whole-unit daily top-up toward the target.
    pub daily_top_up: i64,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPlan { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PLAN",
                    format!("Invalid plan field '{}': {}", field, message),
                    "The plan violates a basic range constraint",
                ),
            },
            EngineError::InvalidTierTable { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "TIER_TABLE_INVALID",
                    format!("Invalid tier table: {}", message),
                    "Tiers must be non-empty, ascending, and contiguous",
                ),
            },
            EngineError::BalanceOutsideTiers { balance, day } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "BALANCE_OUTSIDE_TIERS",
                    format!(
                        "Balance {} on day {} is outside all configured tiers",
                        balance, day
                    ),
                    "Extend the tier table to cover every balance the plan can reach",
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
        }
    }
}
