//! Shared fixtures for the finanzas SDK integration tests.
//!
//! Builds model collections from `serde_json::json!` literals, exercising
//! the same wire-shape parsing the HTTP layer performs.

#![allow(dead_code)]

use serde::de::DeserializeOwned;

use finanzas_sdk::models::{Expense, Invoice, Loan, LoanSummary};

/// Parse a JSON literal into a model value, panicking on shape mismatch.
pub fn parse<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

/// Parse a JSON array literal into a model collection.
pub fn parse_list<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    serde_json::from_value(value).unwrap()
}

/// The expense split example: 1000 paid cash, 500 pending cash, 2000 credit.
pub fn sample_expenses() -> Vec<Expense> {
    parse_list(serde_json::json!([
        { "id": 1, "nombre": "Supermercado", "monto": 1000.0, "pagado": true,  "con_tarjeta": false },
        { "id": 2, "nombre": "Luz",          "monto": 500.0,  "pagado": false, "con_tarjeta": false },
        { "id": 3, "nombre": "Notebook",     "monto": 2000.0, "con_tarjeta": true },
    ]))
}

/// Invoices with the amount under three different field names.
pub fn sample_invoices() -> Vec<Invoice> {
    parse_list(serde_json::json!([
        { "id": 1, "tarjeta_id": 1, "mes": 3, "anio": 2024, "total": 300.0,           "pagada": true },
        { "id": 2, "tarjeta_id": 1, "mes": 3, "anio": 2024, "monto": 200.0,           "pagada": false },
        { "id": 3, "tarjeta_id": 2, "mes": 3, "anio": 2024, "total_facturado": 150.0, "pagada": false },
    ]))
}

/// Three loans: one active window starting 3/2024, one not yet started,
/// one with no schedule at all.
pub fn sample_loans() -> Vec<Loan> {
    parse_list(serde_json::json!([
        {
            "id": 1, "nombre": "Auto", "valor_cuota": 100.0,
            "cuotas_totales": 6, "cuotas_pagadas": 2,
            "primer_mes": 3, "primer_anio": 2024
        },
        {
            "id": 2, "nombre": "Moto", "valor_cuota": 50.0,
            "cuotas_totales": 12, "cuotas_pagadas": 0,
            "primer_mes": 1, "primer_anio": 2025
        },
        {
            "id": 3, "nombre": "Sin calendario", "valor_cuota": 80.0,
            "cuotas_totales": 0, "cuotas_pagadas": 0,
            "primer_mes": null, "primer_anio": null
        }
    ]))
}

pub fn sample_summaries() -> Vec<LoanSummary> {
    parse_list(serde_json::json!([
        {
            "id": 1, "nombre": "Auto", "valor_cuota": 100.0,
            "cuotas_totales": 6, "cuotas_pagadas": 2,
            "primer_mes": 3, "primer_anio": 2024,
            "total_pagado": 200.0, "deuda_restante": 400.0,
            "ultimo_mes": 4, "ultimo_anio": 2024
        },
        {
            "id": 2, "nombre": "Moto", "valor_cuota": 50.0,
            "cuotas_totales": 12, "cuotas_pagadas": 0,
            "primer_mes": 1, "primer_anio": 2025,
            "total_pagado": 0.0, "deuda_restante": 600.0,
            "ultimo_mes": null, "ultimo_anio": null
        }
    ]))
}
