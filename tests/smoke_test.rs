//! Smoke test against a live backend.
//!
//! Exercises every read path and the dashboard snapshot end to end. Needs a
//! running API; point `FINANZAS_API_URL` at it (and `FINANZAS_API_TOKEN` if
//! the instance requires auth).
//!
//! Run with:
//! ```sh
//! FINANZAS_API_URL=http://127.0.0.1:8000 cargo test -- --ignored --nocapture
//! ```

use finanzas_sdk::config::EXPENSE_SERIES_MONTHS;
use finanzas_sdk::{FinanzasSdk, Period};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Print a section header to stderr.
fn section(name: &str) {
    eprintln!("\n{}", "=".repeat(60));
    eprintln!("  {}", name);
    eprintln!("{}", "=".repeat(60));
}

/// Counters for pass/fail reporting.
struct Counters {
    pass: usize,
    fail: usize,
}

impl Counters {
    fn new() -> Self {
        Self { pass: 0, fail: 0 }
    }

    fn check(&mut self, label: &str, condition: bool, detail: &str) {
        let status = if condition { "PASS" } else { "FAIL" };
        if condition {
            self.pass += 1;
        } else {
            self.fail += 1;
        }
        if detail.is_empty() {
            eprintln!("  [{}] {}", status, label);
        } else {
            eprintln!("  [{}] {} -- {}", status, label, detail);
        }
    }
}

fn live_sdk() -> FinanzasSdk {
    let base_url = std::env::var("FINANZAS_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());
    let mut builder = FinanzasSdk::builder().base_url(base_url);
    if let Ok(token) = std::env::var("FINANZAS_API_TOKEN") {
        builder = builder.token(token);
    }
    builder.build().unwrap()
}

// ---------------------------------------------------------------------------
// Main smoke test
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore]
async fn smoke_test() {
    let sdk = live_sdk();
    let mut c = Counters::new();
    let period = Period::new(3, 2024);

    // ================================================================
    // 1. CATALOGS
    // ================================================================
    section("Catalogs");

    let methods = sdk.catalog().payment_methods(None).await.unwrap();
    c.check(
        "payment_methods()",
        true,
        &format!("{} methods", methods.len()),
    );

    let concepts = sdk.catalog().concepts(None).await.unwrap();
    c.check("concepts(None)", true, &format!("{} concepts", concepts.len()));

    let active_concepts = sdk.catalog().concepts(Some(true)).await.unwrap();
    c.check(
        "concepts(Some(true)) is a subset",
        active_concepts.len() <= concepts.len(),
        &format!("{} active", active_concepts.len()),
    );

    let banks = sdk.catalog().banks(None).await.unwrap();
    c.check("banks()", true, &format!("{} banks", banks.len()));

    let cards = sdk.catalog().cards().await.unwrap();
    c.check("cards()", true, &format!("{} cards", cards.len()));

    // ================================================================
    // 2. EXPENSES AND INVOICES
    // ================================================================
    section("Expenses and invoices");

    let all_expenses = sdk.expenses().list(None, None).await.unwrap();
    c.check(
        "expenses().list(None, None)",
        true,
        &format!("{} expenses", all_expenses.len()),
    );

    let month_expenses = sdk
        .expenses()
        .list(Some(period.month), Some(period.year))
        .await
        .unwrap();
    c.check(
        "expenses().list for one month",
        month_expenses.len() <= all_expenses.len(),
        &format!("{} in {}", month_expenses.len(), period),
    );

    let invoices = sdk
        .invoices()
        .list(period.month, period.year, None)
        .await
        .unwrap();
    c.check(
        "invoices().list for one month",
        true,
        &format!("{} invoices", invoices.len()),
    );

    // ================================================================
    // 3. LOANS
    // ================================================================
    section("Loans");

    let loans = sdk.loans().list().await.unwrap();
    c.check("loans().list()", true, &format!("{} loans", loans.len()));

    match sdk.loans().summaries().await {
        Ok(summaries) => c.check(
            "loans().summaries()",
            true,
            &format!("{} summaries", summaries.len()),
        ),
        Err(err) => c.check("loans().summaries()", false, &err.to_string()),
    }

    let paid = sdk.loans().paid_in_month(period, &loans).await;
    c.check(
        "loans().paid_in_month()",
        paid >= 0.0,
        &format!("paid={:.2}", paid),
    );

    let salary = sdk.salaries().amount_for(period).await.unwrap();
    c.check(
        "salaries().amount_for()",
        salary >= 0.0,
        &format!("salary={:.2}", salary),
    );

    // ================================================================
    // 4. DASHBOARD
    // ================================================================
    section("Dashboard");

    let snapshot = sdk.dashboard().snapshot(period).await.unwrap();
    c.check(
        "snapshot() period",
        snapshot.period == period,
        &format!("{}", snapshot.period),
    );
    c.check(
        "snapshot() totals are finite",
        snapshot.summary.monthly_total_excluding_credit().is_finite()
            && snapshot.summary.total_debt.is_finite(),
        &format!(
            "monthly={:.2}, debt={:.2}",
            snapshot.summary.monthly_total_excluding_credit(),
            snapshot.summary.total_debt
        ),
    );
    c.check(
        "recent payments capped",
        snapshot.recent_payments.len() <= 6,
        &format!("{} recent", snapshot.recent_payments.len()),
    );

    let series = sdk
        .dashboard()
        .expense_series(period, EXPENSE_SERIES_MONTHS)
        .await;
    c.check(
        "expense_series() has one point per month",
        series.len() == EXPENSE_SERIES_MONTHS && series.last().map(|(p, _)| *p) == Some(period),
        &format!("{} points", series.len()),
    );

    let mut vm = sdk.dashboard_view_model();
    vm.refresh(period).await;
    c.check(
        "view model refresh",
        !vm.loading && vm.snapshot.is_some(),
        &format!("error={:?}", vm.error),
    );

    // ================================================================
    // Summary
    // ================================================================
    section("Summary");
    eprintln!("  pass={}  fail={}", c.pass, c.fail);
    assert_eq!(c.fail, 0, "{} smoke checks failed", c.fail);
}
