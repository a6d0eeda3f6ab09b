//! Micro-Savings Simulation Engine
//!
//! This crate simulates the growth of a savings account under daily
//! compounded interest, with either a flat annual nominal rate or
//! balance-dependent tiered rates, and computes the daily top-up needed to
//! reach a savings goal within a horizon.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
