//! Performance benchmarks for the timeclock engine.
//!
//! This benchmark suite verifies that the hours engine meets performance targets:
//! - Pay period resolution: < 10μs mean
//! - Single-day timesheet: < 1ms mean
//! - Full biweekly timesheet (14 days): < 5ms mean
//! - Batch of 100 timesheets: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use timeclock_engine::api::{AppState, create_router};
use timeclock_engine::calculation::{compute_daily_totals, pair_punches, resolve_period};
use timeclock_engine::config::{
    EffectiveSettings, OrganizationSettings, PeriodType, TenantDirectory,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with a configured organization.
fn create_test_state() -> AppState {
    let mut org = OrganizationSettings::bare("org_bench", PeriodType::Biweekly);
    org.biweekly_anchor_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    org.auto_lunch_enabled = Some(true);
    org.overtime_daily_enabled = Some(true);
    AppState::new(TenantDirectory::from_parts(vec![org], Vec::new()))
}

fn bench_settings() -> EffectiveSettings {
    let mut settings = EffectiveSettings::with_defaults(PeriodType::Biweekly);
    settings.biweekly_anchor_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    settings.auto_lunch_enabled = true;
    settings.auto_lunch_minimum_shift_hours = Decimal::new(6, 0);
    settings.overtime_daily_enabled = true;
    settings
}

/// Creates IN/OUT punches for a 9-to-5 day.
fn punches_for_day(date: &str) -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({
            "direction": "in",
            "timestamp": format!("{}T09:00:00Z", date)
        }),
        serde_json::json!({
            "direction": "out",
            "timestamp": format!("{}T17:00:00Z", date)
        }),
    ]
}

/// Creates a timesheet request body spanning the given number of worked days.
fn create_request_with_days(employee_id: &str, day_count: usize) -> String {
    // Weekdays across the biweekly period anchored at 2024-01-01
    let base_dates = [
        "2024-01-01",
        "2024-01-02",
        "2024-01-03",
        "2024-01-04",
        "2024-01-05",
        "2024-01-08",
        "2024-01-09",
        "2024-01-10",
        "2024-01-11",
        "2024-01-12",
        "2024-01-06",
        "2024-01-07",
        "2024-01-13",
        "2024-01-14",
    ];

    let punches: Vec<serde_json::Value> = base_dates
        .iter()
        .take(day_count)
        .flat_map(|date| punches_for_day(date))
        .collect();

    let request_json = serde_json::json!({
        "auth": {
            "organization_id": "org_bench",
            "user_id": "usr_bench"
        },
        "employee_id": employee_id,
        "target_date": "2024-01-03",
        "punches": punches
    });

    request_json.to_string()
}

/// Benchmark: pay period resolution alone.
///
/// Target: < 10μs mean
fn bench_resolve_period(c: &mut Criterion) {
    let settings = bench_settings();
    let target = NaiveDate::from_ymd_opt(2024, 7, 19).unwrap();

    c.bench_function("resolve_period", |b| {
        b.iter(|| black_box(resolve_period(black_box(&settings), black_box(target))))
    });
}

/// Benchmark: pairing and daily calculation for one day, no HTTP overhead.
fn bench_daily_calculation(c: &mut Criterion) {
    let settings = bench_settings();
    let request: timeclock_engine::api::TimesheetRequest =
        serde_json::from_str(&create_request_with_days("emp_bench", 1)).unwrap();
    let punches = request.punch_events();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    c.bench_function("daily_calculation", |b| {
        b.iter(|| {
            let pairing = pair_punches(black_box(&punches));
            black_box(compute_daily_totals(date, &pairing, &settings))
        })
    });
}

/// Benchmark: single-day timesheet through the HTTP surface.
///
/// Target: < 1ms mean
fn bench_single_day_timesheet(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_with_days("emp_bench", 1);

    c.bench_function("single_day_timesheet", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/timesheet/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 timesheets.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary employee IDs for realistic scenario)
    let requests: Vec<String> = (0..100)
        .map(|i| create_request_with_days(&format!("emp_batch_{:03}", i), 10))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/timesheet/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: various worked-day counts to understand scaling behavior.
fn bench_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("scaling");

    for day_count in [1, 2, 4, 7, 14].iter() {
        let router = create_router(state.clone());
        let body = create_request_with_days("emp_bench", *day_count);

        group.throughput(Throughput::Elements(*day_count as u64));
        group.bench_with_input(BenchmarkId::new("days", day_count), day_count, |b, _| {
            b.to_async(&rt).iter(|| async {
                let router = router.clone();
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/timesheet/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve_period,
    bench_daily_calculation,
    bench_single_day_timesheet,
    bench_batch_100,
    bench_scaling,
);
criterion_main!(benches);
