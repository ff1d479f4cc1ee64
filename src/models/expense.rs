use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::null_as_default;

/// The normalized payment-method label that marks an expense as credit.
pub const CREDIT_LABEL: &str = "CREDITO";

// ---------------------------------------------------------------------------
// Expense -- a gasto row
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "monto", default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
    #[serde(rename = "pagado", default, deserialize_with = "null_as_default")]
    pub paid: bool,
    /// Free-text payment method (e.g. "Efectivo", "Débito", "Crédito").
    #[serde(rename = "forma_pago", default)]
    pub payment_method: Option<String>,
    /// Structured credit flag; takes precedence over `payment_method`.
    #[serde(rename = "con_tarjeta", default)]
    pub with_card: Option<bool>,
}

impl Expense {
    /// Whether this expense was paid via a credit instrument.
    ///
    /// Prefers the structured `con_tarjeta` flag when present; otherwise the
    /// free-text payment method is normalized (see
    /// [`normalize_payment_method`]) and compared against [`CREDIT_LABEL`].
    /// A missing payment method is never credit.
    pub fn is_credit(&self) -> bool {
        if let Some(flag) = self.with_card {
            return flag;
        }
        self.payment_method
            .as_deref()
            .map(|raw| normalize_payment_method(raw) == CREDIT_LABEL)
            .unwrap_or(false)
    }
}

/// Canonical form of a free-text payment-method label.
///
/// The contract is: NFD-decompose, drop combining marks (diacritics), then
/// uppercase. This maps "crédito", "Crédito" and "CREDITO" to the same
/// string, so accent-inconsistent data classifies uniformly.
pub fn normalize_payment_method(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
}
