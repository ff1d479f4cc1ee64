use serde::{Deserialize, Serialize};

use super::null_as_default;

// ---------------------------------------------------------------------------
// Invoice -- a card billing period (factura)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "tarjeta_id", default)]
    pub card_id: Option<i64>,
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
    // The billed amount arrives under one of three names depending on the
    // endpoint/version; resolve through `amount()`.
    #[serde(default)]
    total: Option<f64>,
    #[serde(default)]
    monto: Option<f64>,
    #[serde(default)]
    total_facturado: Option<f64>,
    #[serde(
        rename = "pagada",
        alias = "pagado",
        default,
        deserialize_with = "null_as_default"
    )]
    pub paid: bool,
    #[serde(rename = "fecha_pago", default)]
    pub paid_on: Option<String>,
    #[serde(rename = "tarjeta_nombre", default)]
    pub card_name: Option<String>,
    #[serde(rename = "tarjeta", default)]
    pub card_label: Option<String>,
    #[serde(rename = "banco", default)]
    pub bank: Option<String>,
}

impl Invoice {
    /// The billed amount, taken from the first present of `total`, `monto`,
    /// `total_facturado`; 0 when none is set.
    pub fn amount(&self) -> f64 {
        self.total
            .or(self.monto)
            .or(self.total_facturado)
            .unwrap_or(0.0)
    }

    /// A display label for the billed card, falling back through the name
    /// variants the backend may populate.
    pub fn card_display(&self) -> String {
        self.card_name
            .clone()
            .or_else(|| self.card_label.clone())
            .or_else(|| self.bank.clone())
            .unwrap_or_else(|| match self.card_id {
                Some(id) => format!("Tarjeta {}", id),
                None => "Tarjeta".to_string(),
            })
    }
}
