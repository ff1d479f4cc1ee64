//! Dashboard aggregation over the raw monthly collections.
//!
//! This is the numeric core of the SDK: classify expenses into cash vs
//! credit, split invoices by paid state, sum installment obligations for
//! loans active in the selected period, and derive the KPI totals the
//! dashboard renders.

use crate::error::Result;
use crate::models::{Expense, Invoice, Loan, LoanPayment, LoanSummary};
use crate::period::Period;

// ---------------------------------------------------------------------------
// MonthlySummary
// ---------------------------------------------------------------------------

/// Per-period sums and KPI inputs for one dashboard view.
///
/// Credit-flagged expenses are tracked in `credit_month` but excluded from
/// [`monthly_total_excluding_credit`](Self::monthly_total_excluding_credit);
/// they are a visibility indicator, not cash flow.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub period: Period,
    /// Non-credit expenses already paid.
    pub ed_paid: f64,
    /// Non-credit expenses still pending.
    pub ed_pending: f64,
    /// Credit-flagged expenses (reported, never added to monthly totals).
    pub credit_month: f64,
    pub invoice_paid: f64,
    pub invoice_pending: f64,
    /// Sum of installment values over loans active in the period.
    pub expected_installments: f64,
    /// Installment payments registered against this accounting period.
    pub paid_installments: f64,
    /// Outstanding loan debt (summary endpoint preferred, else computed).
    pub total_debt: f64,
    pub salary: f64,
}

impl MonthlySummary {
    /// Aggregate the raw collections for `period`.
    ///
    /// `paid_installments` and `salary` are resolved upstream (they come
    /// from their own endpoints, with their own fallback rules) and are
    /// carried through unchanged.
    pub fn compute(
        period: Period,
        expenses: &[Expense],
        invoices: &[Invoice],
        loans: &[Loan],
        summaries: &[LoanSummary],
        paid_installments: f64,
        salary: f64,
    ) -> Self {
        let mut ed_paid = 0.0;
        let mut ed_pending = 0.0;
        let mut credit_month = 0.0;
        for expense in expenses {
            if expense.is_credit() {
                credit_month += expense.amount;
            } else if expense.paid {
                ed_paid += expense.amount;
            } else {
                ed_pending += expense.amount;
            }
        }

        let mut invoice_paid = 0.0;
        let mut invoice_pending = 0.0;
        for invoice in invoices {
            if invoice.paid {
                invoice_paid += invoice.amount();
            } else {
                invoice_pending += invoice.amount();
            }
        }

        let expected_installments = loans
            .iter()
            .filter(|loan| loan.is_active_in(period))
            .map(|loan| loan.installment_value)
            .sum();

        Self {
            period,
            ed_paid,
            ed_pending,
            credit_month,
            invoice_paid,
            invoice_pending,
            expected_installments,
            paid_installments,
            total_debt: total_debt(loans, summaries),
            salary,
        }
    }

    /// Cash expenses for the month (paid + pending, credit excluded).
    pub fn total_ed(&self) -> f64 {
        self.ed_paid + self.ed_pending
    }

    /// Card billing for the month (paid + pending).
    pub fn total_invoices(&self) -> f64 {
        self.invoice_paid + self.invoice_pending
    }

    /// Installments still owed for the period, clamped at zero.
    pub fn pending_installments(&self) -> f64 {
        (self.expected_installments - self.paid_installments).max(0.0)
    }

    /// The headline monthly total: cash expenses + expected installments +
    /// card billing. Credit-flagged expenses are deliberately left out.
    pub fn monthly_total_excluding_credit(&self) -> f64 {
        self.total_ed() + self.expected_installments + self.total_invoices()
    }
}

/// Gross expense total for one month: every amount, paid or not, credit
/// included. The evolution series reports total spending per month, not the
/// cash split the summary uses.
pub fn expense_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

// ---------------------------------------------------------------------------
// Debt and payment helpers
// ---------------------------------------------------------------------------

/// Total outstanding loan debt.
///
/// Prefers the summary endpoint's `deuda_restante` figures when any
/// summaries arrived; otherwise computes per loan from installment counts.
/// The two can disagree when the summary service lags the ledger -- the
/// summary wins whenever it is non-empty.
pub fn total_debt(loans: &[Loan], summaries: &[LoanSummary]) -> f64 {
    if !summaries.is_empty() {
        summaries.iter().map(|s| s.remaining_debt).sum()
    } else {
        loans.iter().map(Loan::remaining_debt).sum()
    }
}

/// Settle a batch of per-loan payment queries into a single paid total.
///
/// Each failed batch contributes 0 rather than an error; this is the
/// combinator behind the per-loan fallback when the aggregate
/// `/pagos-prestamo` query fails.
pub fn sum_payment_batches(batches: &[Result<Vec<LoanPayment>>]) -> f64 {
    batches
        .iter()
        .filter_map(|batch| batch.as_ref().ok())
        .flat_map(|payments| payments.iter())
        .map(LoanPayment::amount)
        .sum()
}

// ---------------------------------------------------------------------------
// Recent payments
// ---------------------------------------------------------------------------

/// One row of the "most recent loan payments" dashboard view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentPayment {
    pub loan_id: i64,
    pub name: String,
    /// Last payment period; `None` when the loan has no recorded or
    /// inferable payment.
    pub period: Option<Period>,
}

/// Resolve each summary's last payment (explicit fields or backfilled from
/// installment counts), order most-recent first, and keep `limit` rows.
/// Summaries without a resolvable period sort last.
pub fn recent_payments(summaries: &[LoanSummary], limit: usize) -> Vec<RecentPayment> {
    let mut rows: Vec<RecentPayment> = summaries
        .iter()
        .map(|summary| RecentPayment {
            loan_id: summary.id,
            name: summary.display_name(),
            period: summary.last_payment_period(),
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.period.map(Period::index).unwrap_or(i64::MIN)));
    rows.truncate(limit);
    rows
}
