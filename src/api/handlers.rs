//! HTTP request handlers for the simulation engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! engine recomputes the full projection synchronously on every request;
//! there is no cached state between calls.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::simulation::{monthly_balances, simulate};

use super::request::{SimulationRequest, TopUpRequest};
use super::response::{ApiError, ApiErrorResponse, SimulationResponse, TopUpResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .route("/top-up", post(top_up_handler))
        .with_state(state)
}

/// Turns a JSON extraction failure into the API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /simulate endpoint.
///
/// Resolves the request against the configured defaults, runs the daily
/// projection, and returns the trajectory plus summary totals.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let resolved = request.resolve(state.config());

    // Enforce the basic range constraints a front-end form would apply
    if let Err(err) = resolved.plan.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Plan validation failed"
        );
        let api_error: ApiErrorResponse = err.into();
        return (
            api_error.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(api_error.error),
        )
            .into_response();
    }

    // Run the projection
    let start_time = Instant::now();
    match simulate(&resolved.plan) {
        Ok(projection) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                days = projection.days(),
                final_balance = %projection.totals.final_balance,
                duration_us = duration.as_micros(),
                "Simulation completed successfully"
            );

            let monthly = monthly_balances(
                &projection.balance_by_day,
                resolved.plan.days_per_month,
                resolved.plan.period_months,
            );
            let response = SimulationResponse {
                simulation_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                savings_target: resolved.savings_target,
                suggested_daily_top_up: resolved.suggested_daily_top_up,
                daily_top_up: resolved.plan.daily_top_up,
                balance_by_day: projection.balance_by_day,
                rate_by_day: projection.rate_by_day,
                monthly_balances: monthly,
                totals: projection.totals,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /top-up endpoint.
///
/// Returns the suggested daily top-up for a target; never fails for
/// numeric inputs.
async fn top_up_handler(
    State(state): State<AppState>,
    payload: Result<Json<TopUpRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing top-up request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let daily_top_up = request.resolve(state.config());
    info!(
        correlation_id = %correlation_id,
        daily_top_up,
        "Top-up suggestion computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(TopUpResponse { daily_top_up }),
    )
        .into_response()
}
