//! Performance benchmarks for the Micro-Savings Simulation Engine.
//!
//! This benchmark suite verifies that the projection stays cheap enough to
//! recompute on every input change:
//! - Flat projection, 6-month horizon: well under 100μs mean
//! - Tiered projection, 36-month horizon: < 1ms mean
//! - Full API round trip: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use savings_engine::api::{AppState, create_router};
use savings_engine::config::ConfigLoader;
use savings_engine::models::{InterestPolicy, SavingsPlan};
use savings_engine::simulation::simulate;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// The reference flat-rate plan at a given horizon.
fn flat_plan(months: u32) -> SavingsPlan {
    SavingsPlan {
        initial_deposit: dec("10000"),
        period_months: months,
        days_per_month: 30,
        daily_top_up: dec("1611"),
        policy: InterestPolicy::Flat {
            annual_rate_pct: dec("10.0"),
        },
    }
}

/// The reference plan over the configured default tier table.
fn tiered_plan(months: u32) -> SavingsPlan {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    SavingsPlan {
        initial_deposit: dec("10000"),
        period_months: months,
        days_per_month: 30,
        daily_top_up: dec("500"),
        policy: InterestPolicy::Tiered {
            tiers: config.tiers().to_vec(),
        },
    }
}

/// Benchmark: flat projections across the supported horizons.
fn bench_flat_horizons(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_projection");

    for months in [1u32, 6, 12, 36] {
        let plan = flat_plan(months);
        group.throughput(Throughput::Elements(u64::from(months) * 30));
        group.bench_with_input(BenchmarkId::new("months", months), &plan, |b, plan| {
            b.iter(|| black_box(simulate(plan).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: tiered projection over the largest supported horizon.
fn bench_tiered_full_horizon(c: &mut Criterion) {
    let plan = tiered_plan(36);

    c.bench_function("tiered_projection_36_months", |b| {
        b.iter(|| black_box(simulate(&plan).unwrap()))
    });
}

/// Benchmark: full API round trip for the default scenario.
fn bench_api_simulate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = r#"{ "policy": { "mode": "tiered" } }"#;

    c.bench_function("api_simulate_default", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/simulate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_flat_horizons,
    bench_tiered_full_horizon,
    bench_api_simulate,
);
criterion_main!(benches);
