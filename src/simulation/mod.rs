//! Simulation logic for the Micro-Savings Simulation Engine.
//!
//! This module contains the engine's calculation functions: the nominal
//! annual to daily rate conversion, tier selection for balance-dependent
//! policies, the suggested daily top-up, the forward projection loop, and
//! the monthly downsampling used for charting.

mod daily_rate;
mod monthly;
mod projection;
mod rate_lookup;
mod top_up;

pub use daily_rate::{RATE_YEAR_DAYS, daily_rate};
pub use monthly::monthly_balances;
pub use projection::simulate;
pub use rate_lookup::select_tier;
pub use top_up::suggest_daily_top_up;
