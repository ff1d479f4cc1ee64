//! Dashboard orchestration: concurrent fetch of the five data sources,
//! partial-failure tolerance, and the derived snapshot the UI renders.
//!
//! Each source degrades to an empty/zero value when its request fails; a
//! failing expenses endpoint never hides the loan KPIs. The one retry-ish
//! behavior is the documented paid-installments fallback in
//! [`LoanQuery::paid_in_month`](crate::queries::loans::LoanQuery::paid_in_month)
//! -- there are no retries with backoff and no
//! caching, a refresh always re-fetches everything.

use crate::aggregate::{expense_total, recent_payments, MonthlySummary, RecentPayment};
use crate::client::ApiClient;
use crate::config::{DASHBOARD_LOAD_ERROR, RECENT_PAYMENTS_LIMIT};
use crate::error::Result;
use crate::models::{Expense, Invoice, Loan, LoanSummary};
use crate::period::Period;
use crate::queries::expenses::ExpenseQuery;
use crate::queries::invoices::InvoiceQuery;
use crate::queries::loans::LoanQuery;
use crate::queries::salaries::SalaryQuery;

// ---------------------------------------------------------------------------
// Partial-failure combinator
// ---------------------------------------------------------------------------

/// Settle one source's result: its value on success, the type's default on
/// failure. The failure is logged and swallowed -- source isolation is the
/// point, one broken endpoint must not abort the others.
pub fn or_empty<T: Default>(source: &str, result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(source, error = %err, "source failed; degrading to empty");
            T::default()
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardSnapshot
// ---------------------------------------------------------------------------

/// Everything one dashboard render needs: the raw collections (for list
/// views) plus the aggregated summary and the recent-payments rows.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub period: Period,
    pub expenses: Vec<Expense>,
    pub invoices: Vec<Invoice>,
    pub loans: Vec<Loan>,
    pub summaries: Vec<LoanSummary>,
    pub summary: MonthlySummary,
    pub recent_payments: Vec<RecentPayment>,
}

impl DashboardSnapshot {
    /// Invoices of the period still unpaid, for the "pendientes" list.
    pub fn pending_invoices(&self) -> Vec<&Invoice> {
        self.invoices.iter().filter(|i| !i.paid).collect()
    }
}

// ---------------------------------------------------------------------------
// DashboardQuery
// ---------------------------------------------------------------------------

/// Builds dashboard snapshots, bound to a client.
pub struct DashboardQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all five sources concurrently and aggregate them for `period`.
    ///
    /// Individual source failures degrade to empty collections (or 0 for
    /// the salary), so this only errors on failures outside the per-source
    /// requests.
    pub async fn snapshot(&self, period: Period) -> Result<DashboardSnapshot> {
        let expense_q = ExpenseQuery::new(self.client);
        let invoice_q = InvoiceQuery::new(self.client);
        let loan_q = LoanQuery::new(self.client);
        let salary_q = SalaryQuery::new(self.client);

        let (expenses, invoices, loans, summaries, salary) = tokio::join!(
            expense_q.list(Some(period.month), Some(period.year)),
            invoice_q.list(period.month, period.year, None),
            loan_q.list(),
            loan_q.summaries(),
            salary_q.amount_for(period),
        );

        let expenses = or_empty("gastos", expenses);
        let invoices = or_empty("facturas", invoices);
        let loans = or_empty("prestamos", loans);
        let summaries = or_empty("prestamos/resumen", summaries);
        let salary = or_empty("sueldos", salary);

        // Best-effort; carries its own fallback and never errors.
        let paid_installments = loan_q.paid_in_month(period, &loans).await;

        let summary = MonthlySummary::compute(
            period,
            &expenses,
            &invoices,
            &loans,
            &summaries,
            paid_installments,
            salary,
        );
        let recent_payments = recent_payments(&summaries, RECENT_PAYMENTS_LIMIT);

        Ok(DashboardSnapshot {
            period,
            expenses,
            invoices,
            loans,
            summaries,
            summary,
            recent_payments,
        })
    }

    /// Gross expense total per month over the `months` periods ending at
    /// `period`, oldest first, for the evolution chart
    /// ([`EXPENSE_SERIES_MONTHS`](crate::config::EXPENSE_SERIES_MONTHS) in
    /// the dashboard).
    ///
    /// Each month is fetched independently; a failed month degrades to 0
    /// rather than dropping the point or aborting the series, so the chart
    /// always has `months` points.
    pub async fn expense_series(&self, period: Period, months: usize) -> Vec<(Period, f64)> {
        let expense_q = ExpenseQuery::new(self.client);
        let mut series = Vec::with_capacity(months);
        for month in period.trailing(months) {
            let expenses = or_empty(
                "gastos",
                expense_q.list(Some(month.month), Some(month.year)).await,
            );
            series.push((month, expense_total(&expenses)));
        }
        series
    }
}

// ---------------------------------------------------------------------------
// DashboardViewModel
// ---------------------------------------------------------------------------

/// Stateful wrapper for UI hosts: tracks the last snapshot, a loading flag
/// and the last error message.
///
/// There is a single logical writer -- [`refresh`](Self::refresh) takes
/// `&mut self` -- so no locking is needed. Overlapping refreshes from the
/// caller's side resolve as last-write-wins; that is an accepted limitation,
/// not a guarantee.
pub struct DashboardViewModel {
    client: ApiClient,
    pub snapshot: Option<DashboardSnapshot>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardViewModel {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            snapshot: None,
            loading: false,
            error: None,
        }
    }

    /// Re-fetch everything for `period`.
    ///
    /// On failure the error is captured as a single message (the backend's
    /// detail when available, else a fixed fallback text) and the previous
    /// snapshot is kept. The loading flag is cleared on every path.
    pub async fn refresh(&mut self, period: Period) {
        self.loading = true;
        self.error = None;

        match DashboardQuery::new(&self.client).snapshot(period).await {
            Ok(snapshot) => self.snapshot = Some(snapshot),
            Err(err) => {
                let message = err
                    .api_message()
                    .unwrap_or(DASHBOARD_LOAD_ERROR)
                    .to_string();
                tracing::warn!(error = %err, "dashboard refresh failed");
                self.error = Some(message);
            }
        }

        self.loading = false;
    }
}
