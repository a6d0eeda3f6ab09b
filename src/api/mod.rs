//! HTTP API module for the Micro-Savings Simulation Engine.
//!
//! This module provides the REST API endpoints for running savings
//! projections and computing suggested daily top-ups.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PolicyRequest, ResolvedSimulation, SimulationRequest, TopUpRequest};
pub use response::{ApiError, SimulationResponse, TopUpResponse};
pub use state::AppState;
