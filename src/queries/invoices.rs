//! Card-invoice (factura) queries and mutations against `/facturas`.

use serde::Serialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::config::paths;
use crate::error::Result;
use crate::models::Invoice;

// ---------------------------------------------------------------------------
// InvoiceQuery
// ---------------------------------------------------------------------------

/// Query interface for card billing periods, bound to a client.
pub struct InvoiceQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> InvoiceQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List invoices for a period, optionally narrowed to one card.
    ///
    /// The backend has no card filter on this endpoint, so the narrowing is
    /// applied client-side after the fetch.
    pub async fn list(&self, month: u32, year: i32, card_id: Option<i64>) -> Result<Vec<Invoice>> {
        let query = [("mes", month.to_string()), ("anio", year.to_string())];
        let mut invoices: Vec<Invoice> = self.client.get_list(paths::FACTURAS, &query).await?;
        if let Some(card) = card_id {
            invoices.retain(|invoice| invoice.card_id == Some(card));
        }
        Ok(invoices)
    }

    pub async fn create(&self, draft: &InvoiceDraft) -> Result<serde_json::Value> {
        self.client.post(paths::FACTURAS, draft).await
    }

    pub async fn update(&self, id: i64, changes: &InvoiceUpdate) -> Result<serde_json::Value> {
        self.client.put(&paths::factura(id), changes).await
    }

    /// Mark an invoice paid/unpaid. Clearing the paid flag also clears the
    /// payment date (an explicit `null` on the wire).
    pub async fn set_paid(
        &self,
        id: i64,
        paid: bool,
        paid_on: Option<&str>,
    ) -> Result<serde_json::Value> {
        let body = json!({
            "pagada": paid,
            "fecha_pago": if paid { paid_on } else { None },
        });
        self.client.put(&paths::factura(id), &body).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&paths::factura(id)).await
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body for creating (or upserting) a card invoice.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceDraft {
    #[serde(rename = "tarjeta_id")]
    pub card_id: i64,
    #[serde(rename = "mes")]
    pub month: u32,
    #[serde(rename = "anio")]
    pub year: i32,
    pub total: f64,
}

/// Partial update for an invoice.
///
/// `paid_on` is doubly optional: `None` leaves the field untouched,
/// `Some(None)` sends an explicit `null` to clear the payment date.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InvoiceUpdate {
    #[serde(rename = "tarjeta_id", skip_serializing_if = "Option::is_none")]
    pub card_id: Option<i64>,
    #[serde(rename = "mes", skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(rename = "anio", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(rename = "pagada", skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(rename = "fecha_pago", skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<Option<String>>,
}
