//! Master-data queries: payment methods, concepts, banks and cards.

use serde::Serialize;
use serde_json::json;

use crate::client::ApiClient;
use crate::config::paths;
use crate::error::Result;
use crate::models::{Bank, Card, Concept, PaymentMethod};

fn active_filter(active: Option<bool>) -> Vec<(&'static str, String)> {
    match active {
        Some(flag) => vec![("activos", flag.to_string())],
        None => Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// CatalogQuery
// ---------------------------------------------------------------------------

/// Query interface for the master tables, bound to a client.
pub struct CatalogQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> CatalogQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    // -- Payment methods ---------------------------------------------------

    /// List payment methods, optionally only active/inactive ones.
    pub async fn payment_methods(&self, active: Option<bool>) -> Result<Vec<PaymentMethod>> {
        self.client
            .get_list(paths::FORMAS_PAGO, &active_filter(active))
            .await
    }

    pub async fn create_payment_method(&self, draft: &NamedDraft) -> Result<serde_json::Value> {
        self.client.post(paths::FORMAS_PAGO, draft).await
    }

    pub async fn update_payment_method(
        &self,
        id: i64,
        draft: &NamedDraft,
    ) -> Result<serde_json::Value> {
        self.client.put(&paths::forma_pago(id), draft).await
    }

    // -- Concepts ----------------------------------------------------------

    pub async fn concepts(&self, active: Option<bool>) -> Result<Vec<Concept>> {
        self.client
            .get_list(paths::CONCEPTOS, &active_filter(active))
            .await
    }

    pub async fn create_concept(&self, draft: &NamedDraft) -> Result<serde_json::Value> {
        self.client.post(paths::CONCEPTOS, draft).await
    }

    pub async fn update_concept(&self, id: i64, draft: &NamedDraft) -> Result<serde_json::Value> {
        self.client.patch(&paths::concepto(id), draft).await
    }

    pub async fn set_concept_active(&self, id: i64, active: bool) -> Result<serde_json::Value> {
        self.client
            .patch(&paths::concepto_activo(id), &json!({ "activo": active }))
            .await
    }

    // -- Banks -------------------------------------------------------------

    pub async fn banks(&self, active: Option<bool>) -> Result<Vec<Bank>> {
        self.client
            .get_list(paths::BANCOS, &active_filter(active))
            .await
    }

    pub async fn create_bank(&self, draft: &NamedDraft) -> Result<serde_json::Value> {
        self.client.post(paths::BANCOS, draft).await
    }

    pub async fn update_bank(&self, id: i64, draft: &NamedDraft) -> Result<serde_json::Value> {
        self.client.patch(&paths::banco(id), draft).await
    }

    pub async fn set_bank_active(&self, id: i64, active: bool) -> Result<serde_json::Value> {
        self.client
            .patch(&paths::banco_activo(id), &json!({ "activo": active }))
            .await
    }

    // -- Cards -------------------------------------------------------------

    pub async fn cards(&self) -> Result<Vec<Card>> {
        self.client.get_list(paths::TARJETAS, &[]).await
    }

    pub async fn create_card(&self, draft: &CardDraft) -> Result<serde_json::Value> {
        self.client.post(paths::TARJETAS, draft).await
    }

    pub async fn update_card(&self, id: i64, draft: &CardDraft) -> Result<serde_json::Value> {
        self.client.put(&paths::tarjeta(id), draft).await
    }

    pub async fn delete_card(&self, id: i64) -> Result<()> {
        self.client.delete(&paths::tarjeta(id)).await
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body for the name+active master rows (payment methods, concepts, banks).
#[derive(Debug, Clone, Serialize)]
pub struct NamedDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl NamedDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
        }
    }
}

/// Body for creating or updating a card.
#[derive(Debug, Clone, Serialize)]
pub struct CardDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "banco", skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(rename = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "limite", skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(rename = "cierre_dia", skip_serializing_if = "Option::is_none")]
    pub closing_day: Option<u32>,
    #[serde(rename = "vencimiento_dia", skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(rename = "activa")]
    pub active: bool,
}
