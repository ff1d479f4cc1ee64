//! Dashboard orchestration: partial-failure tolerance and view-model state.
//!
//! These tests run against an unreachable backend; every source fails, and
//! the dashboard must degrade to an empty snapshot rather than error.

mod common;

use std::time::Duration;

use finanzas_sdk::dashboard::or_empty;
use finanzas_sdk::models::Expense;
use finanzas_sdk::{FinanzasError, FinanzasSdk, Period};

/// An SDK pointed at a port nothing listens on; requests fail fast.
fn unreachable_sdk() -> FinanzasSdk {
    FinanzasSdk::builder()
        .base_url("http://127.0.0.1:9")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// or_empty
// ---------------------------------------------------------------------------

#[test]
fn or_empty_passes_values_through() {
    let value: Vec<Expense> = or_empty("gastos", Ok(common::sample_expenses()));
    assert_eq!(value.len(), 3);
}

#[test]
fn or_empty_defaults_on_failure() {
    let failed: finanzas_sdk::Result<Vec<Expense>> = Err(FinanzasError::SessionExpired);
    let value = or_empty("gastos", failed);
    assert!(value.is_empty());

    let salary: f64 = or_empty("sueldos", Err(FinanzasError::SessionExpired));
    assert_eq!(salary, 0.0);
}

// ---------------------------------------------------------------------------
// Snapshot against a dead backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn snapshot_degrades_to_empty_when_every_source_fails() {
    let sdk = unreachable_sdk();
    let snapshot = sdk.dashboard().snapshot(Period::new(3, 2024)).await.unwrap();

    assert!(snapshot.expenses.is_empty());
    assert!(snapshot.invoices.is_empty());
    assert!(snapshot.loans.is_empty());
    assert!(snapshot.summaries.is_empty());
    assert!(snapshot.recent_payments.is_empty());
    assert_eq!(snapshot.summary.monthly_total_excluding_credit(), 0.0);
    assert_eq!(snapshot.summary.paid_installments, 0.0);
    assert_eq!(snapshot.summary.salary, 0.0);
}

#[tokio::test]
async fn view_model_clears_loading_and_keeps_no_error_on_degraded_refresh() {
    let sdk = unreachable_sdk();
    let mut vm = sdk.dashboard_view_model();
    assert!(!vm.loading);
    assert!(vm.snapshot.is_none());

    vm.refresh(Period::new(3, 2024)).await;

    // Individual source failures are tolerated: the refresh as a whole
    // succeeded, producing an empty snapshot.
    assert!(!vm.loading);
    assert!(vm.error.is_none());
    let snapshot = vm.snapshot.as_ref().expect("snapshot after refresh");
    assert_eq!(snapshot.period, Period::new(3, 2024));
    assert!(snapshot.expenses.is_empty());
}

#[tokio::test]
async fn expense_series_keeps_every_month_with_zero_totals() {
    let sdk = unreachable_sdk();
    let series = sdk
        .dashboard()
        .expense_series(Period::new(3, 2024), 6)
        .await;

    // One point per month even though every fetch failed.
    assert_eq!(series.len(), 6);
    assert_eq!(series[0].0, Period::new(10, 2023));
    assert_eq!(series[5].0, Period::new(3, 2024));
    assert!(series.iter().all(|(_, total)| *total == 0.0));
}

#[tokio::test]
async fn direct_queries_do_surface_errors() {
    // The isolation lives in the dashboard layer; plain queries still
    // return typed errors.
    let sdk = unreachable_sdk();
    let result = sdk.expenses().list(Some(3), Some(2024)).await;
    assert!(matches!(result, Err(FinanzasError::Http(_))));
}
