use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::period::Period;

// ---------------------------------------------------------------------------
// Loan -- an installment loan (prestamo)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "valor_cuota", default, deserialize_with = "null_as_default")]
    pub installment_value: f64,
    #[serde(
        rename = "cuotas_totales",
        default,
        deserialize_with = "null_as_default"
    )]
    pub total_installments: u32,
    #[serde(
        rename = "cuotas_pagadas",
        default,
        deserialize_with = "null_as_default"
    )]
    pub paid_installments: u32,
    #[serde(rename = "primer_mes", default)]
    pub first_month: Option<u32>,
    #[serde(rename = "primer_anio", default)]
    pub first_year: Option<i32>,
    #[serde(rename = "dia_vencimiento", default)]
    pub due_day: Option<u32>,
    #[serde(rename = "banco", default)]
    pub bank: Option<String>,
}

impl Loan {
    /// The period of the first installment, when both fields are set to a
    /// plausible value (month in 1..=12, positive year).
    pub fn first_period(&self) -> Option<Period> {
        first_period(self.first_month, self.first_year)
    }

    /// Whether an installment of this loan falls due in `period`.
    ///
    /// False when the first period or total installment count is unset/zero;
    /// otherwise true iff the month distance from the first period lies in
    /// `[0, total_installments)`.
    pub fn is_active_in(&self, period: Period) -> bool {
        let Some(first) = self.first_period() else {
            return false;
        };
        if self.total_installments == 0 {
            return false;
        }
        let elapsed = period.months_since(first);
        elapsed >= 0 && elapsed < self.total_installments as i64
    }

    /// Outstanding debt computed from the installment counts:
    /// `valor_cuota * max(cuotas_totales - cuotas_pagadas, 0)`.
    pub fn remaining_debt(&self) -> f64 {
        self.installment_value * self.total_installments.saturating_sub(self.paid_installments) as f64
    }
}

// ---------------------------------------------------------------------------
// LoanSummary -- /prestamos/resumen row (loan + derived payment state)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "valor_cuota", default, deserialize_with = "null_as_default")]
    pub installment_value: f64,
    #[serde(
        rename = "cuotas_totales",
        default,
        deserialize_with = "null_as_default"
    )]
    pub total_installments: u32,
    #[serde(
        rename = "cuotas_pagadas",
        default,
        deserialize_with = "null_as_default"
    )]
    pub paid_installments: u32,
    #[serde(rename = "primer_mes", default)]
    pub first_month: Option<u32>,
    #[serde(rename = "primer_anio", default)]
    pub first_year: Option<i32>,
    #[serde(rename = "total_pagado", default, deserialize_with = "null_as_default")]
    pub total_paid: f64,
    #[serde(
        rename = "deuda_restante",
        default,
        deserialize_with = "null_as_default"
    )]
    pub remaining_debt: f64,
    #[serde(rename = "ultimo_mes", default)]
    pub last_month: Option<u32>,
    #[serde(rename = "ultimo_anio", default)]
    pub last_year: Option<i32>,
}

impl LoanSummary {
    /// The period of the most recent recorded payment.
    ///
    /// Uses the explicit `ultimo_mes`/`ultimo_anio` fields when present;
    /// otherwise backfills from the first period plus paid installments
    /// (`first + cuotas_pagadas - 1` months). `None` when neither source
    /// yields a period.
    pub fn last_payment_period(&self) -> Option<Period> {
        if let Some(explicit) = first_period(self.last_month, self.last_year) {
            return Some(explicit);
        }
        if self.paid_installments > 0 {
            if let Some(first) = first_period(self.first_month, self.first_year) {
                return Some(first.plus_months(self.paid_installments as i64 - 1));
            }
        }
        None
    }

    /// Display name, defaulting to "Préstamo {id}" when unset.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Préstamo {}", self.id),
        }
    }
}

// ---------------------------------------------------------------------------
// LoanPayment -- a registered installment payment (pago)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPayment {
    #[serde(rename = "prestamo_id", default)]
    pub loan_id: Option<i64>,
    #[serde(rename = "mes_contable", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio_contable", default)]
    pub year: Option<i32>,
    // Older rows carry the amount as `valor_cuota` rather than `monto`.
    #[serde(default)]
    monto: Option<f64>,
    #[serde(rename = "valor_cuota", default)]
    installment_value: Option<f64>,
}

impl LoanPayment {
    /// The paid amount: `monto` when present, else `valor_cuota`, else 0.
    pub fn amount(&self) -> f64 {
        self.monto.or(self.installment_value).unwrap_or(0.0)
    }
}

/// Shared month/year-pair validation: both set, month in range, year positive.
/// The backend stores unset periods as 0/null, both of which mean "unknown".
fn first_period(month: Option<u32>, year: Option<i32>) -> Option<Period> {
    match (month, year) {
        (Some(m), Some(y)) if (1..=12).contains(&m) && y > 0 => Some(Period::new(m, y)),
        _ => None,
    }
}
