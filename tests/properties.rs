//! Property tests for the simulator invariants.
//!
//! These exercise the forward projection over randomly drawn plans rather
//! than hand-picked scenarios: day-0 identity, monotonic growth, exact
//! capital conservation, the gains definition, zero-rate idempotence, and
//! the truncation contract of the top-up suggestion.

use proptest::prelude::*;
use rust_decimal::Decimal;

use savings_engine::models::{InterestPolicy, SavingsPlan};
use savings_engine::simulation::{simulate, suggest_daily_top_up};

/// Builds a Decimal amount from cents.
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Builds a flat-rate plan from drawn components.
fn flat_plan(deposit_cents: i64, months: u32, top_up_cents: i64, rate_bp: i64) -> SavingsPlan {
    SavingsPlan {
        initial_deposit: money(deposit_cents),
        period_months: months,
        days_per_month: 30,
        daily_top_up: money(top_up_cents),
        policy: InterestPolicy::Flat {
            // Basis points of a percent keep the drawn rates in 0..=50%.
            annual_rate_pct: Decimal::new(rate_bp, 2),
        },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn day_zero_is_always_the_initial_deposit(
        deposit_cents in 0i64..=100_000_000,
        months in 1u32..=36,
        top_up_cents in 0i64..=1_000_000,
        rate_bp in 0i64..=5_000,
    ) {
        let plan = flat_plan(deposit_cents, months, top_up_cents, rate_bp);
        let projection = simulate(&plan).unwrap();

        prop_assert_eq!(projection.balance_by_day[0], plan.initial_deposit);
        prop_assert_eq!(projection.balance_by_day.len(), (months * 30 + 1) as usize);
    }

    #[test]
    fn balances_never_decrease_for_non_negative_inputs(
        deposit_cents in 0i64..=100_000_000,
        months in 1u32..=36,
        top_up_cents in 0i64..=1_000_000,
        rate_bp in 0i64..=5_000,
    ) {
        let plan = flat_plan(deposit_cents, months, top_up_cents, rate_bp);
        let projection = simulate(&plan).unwrap();

        for pair in projection.balance_by_day.windows(2) {
            prop_assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn capital_is_conserved_exactly(
        deposit_cents in 0i64..=100_000_000,
        months in 1u32..=36,
        top_up_cents in 0i64..=1_000_000,
        rate_bp in 0i64..=5_000,
    ) {
        let plan = flat_plan(deposit_cents, months, top_up_cents, rate_bp);
        let projection = simulate(&plan).unwrap();

        let days = Decimal::from(months * 30);
        prop_assert_eq!(
            projection.totals.total_capital,
            plan.initial_deposit + plan.daily_top_up * days
        );
    }

    #[test]
    fn gains_are_final_balance_minus_capital(
        deposit_cents in 0i64..=100_000_000,
        months in 1u32..=36,
        top_up_cents in 0i64..=1_000_000,
        rate_bp in 0i64..=5_000,
    ) {
        let plan = flat_plan(deposit_cents, months, top_up_cents, rate_bp);
        let projection = simulate(&plan).unwrap();

        let last = *projection.balance_by_day.last().unwrap();
        prop_assert_eq!(projection.totals.final_balance, last);
        prop_assert_eq!(
            projection.totals.total_gains,
            last - projection.totals.total_capital
        );
    }

    #[test]
    fn zero_rate_means_no_compounding(
        deposit_cents in 0i64..=100_000_000,
        months in 1u32..=36,
        top_up_cents in 0i64..=1_000_000,
    ) {
        let plan = flat_plan(deposit_cents, months, top_up_cents, 0);
        let projection = simulate(&plan).unwrap();

        let days = Decimal::from(months * 30);
        prop_assert_eq!(
            projection.totals.final_balance,
            plan.initial_deposit + plan.daily_top_up * days
        );
        prop_assert_eq!(projection.totals.total_gains, Decimal::ZERO);
    }

    #[test]
    fn suggestion_truncates_toward_the_target(
        deposit_cents in 0i64..=100_000_000,
        target_cents in 0i64..=200_000_000,
        months in 1u32..=36,
    ) {
        let deposit = money(deposit_cents);
        let target = money(target_cents);
        let suggested = suggest_daily_top_up(deposit, months, target, 30);

        let days = Decimal::from(months * 30);
        let remaining = target - deposit;
        let covered = Decimal::from(suggested) * days;

        // Truncation toward zero: the suggestion never overshoots the gap,
        // and one more unit per day always would.
        if remaining >= Decimal::ZERO {
            prop_assert!(covered <= remaining);
            prop_assert!(remaining < Decimal::from(suggested + 1) * days);
        } else {
            prop_assert!(covered >= remaining);
            prop_assert!(remaining > Decimal::from(suggested - 1) * days);
        }
    }
}
