//! Expense (gasto) queries and mutations against `/gastos`.

use serde::Serialize;

use crate::client::ApiClient;
use crate::config::paths;
use crate::error::Result;
use crate::models::Expense;

// ---------------------------------------------------------------------------
// ExpenseQuery
// ---------------------------------------------------------------------------

/// Query interface for expenses, bound to a client.
pub struct ExpenseQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> ExpenseQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List expenses, optionally filtered by month and/or year.
    pub async fn list(&self, month: Option<u32>, year: Option<i32>) -> Result<Vec<Expense>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(m) = month {
            query.push(("mes", m.to_string()));
        }
        if let Some(y) = year {
            query.push(("anio", y.to_string()));
        }
        self.client.get_list(paths::GASTOS, &query).await
    }

    pub async fn create(&self, draft: &ExpenseDraft) -> Result<serde_json::Value> {
        self.client.post(paths::GASTOS, draft).await
    }

    pub async fn update(&self, id: i64, changes: &ExpenseUpdate) -> Result<serde_json::Value> {
        self.client.put(&paths::gasto(id), changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client.delete(&paths::gasto(id)).await
    }
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Body for creating an expense.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "mes", skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(rename = "anio", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "pagado")]
    pub paid: bool,
    #[serde(rename = "con_tarjeta", skip_serializing_if = "Option::is_none")]
    pub with_card: Option<bool>,
}

/// Partial update for an expense; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExpenseUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "monto", skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(rename = "mes", skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(rename = "anio", skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "pagado", skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
    #[serde(rename = "con_tarjeta", skip_serializing_if = "Option::is_none")]
    pub with_card: Option<bool>,
}
