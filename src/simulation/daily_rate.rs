//! Nominal annual to daily rate conversion.
//!
//! The engine quotes interest as an annual nominal rate percent (TANB) and
//! compounds it daily over a fixed 360-day rate year.

use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{EngineError, EngineResult};

/// The number of days in the nominal rate year.
///
/// 360 is the 30-day-month banking convention (30 x 12), deliberately
/// decoupled from the plan's `days_per_month`. Changing it changes every
/// projected total.
pub const RATE_YEAR_DAYS: u32 = 360;

/// Converts an annual nominal rate percent to a daily compounding rate.
///
/// Applies `(1 + annual_rate_pct / 100)^(1 / 360) - 1`, so that compounding
/// the result over a full rate year reproduces the annual rate.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] when the rate cannot be
/// compounded, i.e. a nominal rate at or below -100%.
///
/// # Example
///
/// ```
/// use savings_engine::simulation::daily_rate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = daily_rate(Decimal::from_str("10.0").unwrap()).unwrap();
/// assert!(rate > Decimal::ZERO);
/// ```
pub fn daily_rate(annual_rate_pct: Decimal) -> EngineResult<Decimal> {
    // A zero rate needs no conversion and must stay exactly zero.
    if annual_rate_pct.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let annual_growth = Decimal::ONE + annual_rate_pct / Decimal::ONE_HUNDRED;
    if annual_growth <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!(
                "cannot compound an annual nominal rate of {}%",
                annual_rate_pct
            ),
        });
    }

    let exponent = Decimal::ONE / Decimal::from(RATE_YEAR_DAYS);
    let daily_growth =
        annual_growth
            .checked_powd(exponent)
            .ok_or_else(|| EngineError::CalculationError {
                message: format!(
                    "daily rate conversion failed for an annual nominal rate of {}%",
                    annual_rate_pct
                ),
            })?;

    Ok(daily_growth - Decimal::ONE)
}
