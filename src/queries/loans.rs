//! Loan (prestamo) queries and mutations: the loan master, the derived
//! summary endpoint, and installment payments with the per-loan fallback.

use serde::Serialize;

use crate::aggregate::sum_payment_batches;
use crate::client::ApiClient;
use crate::config::paths;
use crate::error::Result;
use crate::models::{Loan, LoanPayment, LoanSummary};
use crate::period::Period;

// ---------------------------------------------------------------------------
// LoanQuery
// ---------------------------------------------------------------------------

/// Query interface for installment loans, bound to a client.
pub struct LoanQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> LoanQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// All loans.
    pub async fn list(&self) -> Result<Vec<Loan>> {
        self.client.get_list(paths::PRESTAMOS, &[]).await
    }

    /// Per-loan derived summaries (total paid, remaining debt, last payment).
    pub async fn summaries(&self) -> Result<Vec<LoanSummary>> {
        self.client.get_list(paths::PRESTAMOS_RESUMEN, &[]).await
    }

    /// Installment payments registered against the given accounting period,
    /// across all loans.
    pub async fn payments_for_period(&self, period: Period) -> Result<Vec<LoanPayment>> {
        let query = [
            ("mes_contable", period.month.to_string()),
            ("anio_contable", period.year.to_string()),
        ];
        self.client.get_list(paths::PAGOS_PRESTAMO, &query).await
    }

    /// Payments of one loan within a period.
    pub async fn payments(&self, id: i64, period: Period) -> Result<Vec<LoanPayment>> {
        let query = [
            ("mes", period.month.to_string()),
            ("anio", period.year.to_string()),
        ];
        self.client.get_list(&paths::prestamo_pagos(id), &query).await
    }

    /// Total amount of installments paid in `period`.
    ///
    /// Tries the aggregate `/pagos-prestamo` endpoint first; if that fails,
    /// falls back to querying each loan's payments in turn and summing the
    /// successful responses. Failures inside the fallback contribute 0 and
    /// are not surfaced, so this never errors -- worst case it reports 0.
    pub async fn paid_in_month(&self, period: Period, loans: &[Loan]) -> f64 {
        match self.payments_for_period(period).await {
            Ok(payments) => payments.iter().map(LoanPayment::amount).sum(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    %period,
                    "aggregate payment query failed; falling back to per-loan queries"
                );
                let mut batches = Vec::with_capacity(loans.len());
                for loan in loans {
                    batches.push(self.payments(loan.id, period).await);
                }
                sum_payment_batches(&batches)
            }
        }
    }

    pub async fn create(&self, draft: &LoanDraft) -> Result<serde_json::Value> {
        self.client.post(paths::PRESTAMOS, draft).await
    }

    pub async fn update(&self, id: i64, changes: &LoanUpdate) -> Result<serde_json::Value> {
        self.client.put(&paths::prestamo(id), changes).await
    }

    /// Delete a loan and its payments.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&paths::prestamo(id)).await
    }

    /// Register an installment payment against a loan. When `amount` is
    /// unset the backend charges the loan's installment value.
    pub async fn register_payment(
        &self,
        id: i64,
        payment: &PaymentDraft,
    ) -> Result<serde_json::Value> {
        self.client.post(&paths::prestamo_pagar(id), payment).await
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body for creating a loan.
#[derive(Debug, Clone, Serialize)]
pub struct LoanDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "valor_cuota")]
    pub installment_value: f64,
    #[serde(rename = "cuotas_totales")]
    pub total_installments: u32,
    #[serde(rename = "cuotas_pagadas", skip_serializing_if = "Option::is_none")]
    pub paid_installments: Option<u32>,
    #[serde(rename = "primer_mes", skip_serializing_if = "Option::is_none")]
    pub first_month: Option<u32>,
    #[serde(rename = "primer_anio", skip_serializing_if = "Option::is_none")]
    pub first_year: Option<i32>,
    #[serde(rename = "dia_vencimiento", skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(rename = "banco", skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

/// Partial update for a loan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoanUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "valor_cuota", skip_serializing_if = "Option::is_none")]
    pub installment_value: Option<f64>,
    #[serde(rename = "cuotas_totales", skip_serializing_if = "Option::is_none")]
    pub total_installments: Option<u32>,
    #[serde(rename = "primer_mes", skip_serializing_if = "Option::is_none")]
    pub first_month: Option<u32>,
    #[serde(rename = "primer_anio", skip_serializing_if = "Option::is_none")]
    pub first_year: Option<i32>,
    #[serde(rename = "banco", skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

/// Body for registering an installment payment.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentDraft {
    #[serde(rename = "mes_contable")]
    pub month: u32,
    #[serde(rename = "anio_contable")]
    pub year: i32,
    #[serde(rename = "monto_pagado", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl PaymentDraft {
    pub fn for_period(period: Period) -> Self {
        Self {
            month: period.month,
            year: period.year,
            amount: None,
        }
    }
}
