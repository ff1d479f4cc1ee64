use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// How many loan summaries the "most recent payments" view keeps.
pub const RECENT_PAYMENTS_LIMIT: usize = 6;

/// How many months the expense-evolution series covers.
pub const EXPENSE_SERIES_MONTHS: usize = 6;

/// Fallback message when a dashboard refresh fails without a structured
/// error detail from the backend.
pub const DASHBOARD_LOAD_ERROR: &str = "No pude cargar el dashboard";

/// Backend endpoint paths, all relative to the base URL.
pub mod paths {
    pub const GASTOS: &str = "/gastos";
    pub const FACTURAS: &str = "/facturas";
    pub const PRESTAMOS: &str = "/prestamos";
    pub const PRESTAMOS_RESUMEN: &str = "/prestamos/resumen";
    pub const PAGOS_PRESTAMO: &str = "/pagos-prestamo";
    pub const SUELDOS: &str = "/sueldos";
    pub const FORMAS_PAGO: &str = "/formas-pago";
    pub const CONCEPTOS: &str = "/conceptos";
    pub const BANCOS: &str = "/bancos";
    pub const TARJETAS: &str = "/tarjetas";

    pub fn gasto(id: i64) -> String {
        format!("{}/{}", GASTOS, id)
    }

    pub fn factura(id: i64) -> String {
        format!("{}/{}", FACTURAS, id)
    }

    pub fn prestamo(id: i64) -> String {
        format!("{}/{}", PRESTAMOS, id)
    }

    /// Per-loan payment listing, the fallback for [`PAGOS_PRESTAMO`].
    pub fn prestamo_pagos(id: i64) -> String {
        format!("{}/{}/pagos", PRESTAMOS, id)
    }

    pub fn prestamo_pagar(id: i64) -> String {
        format!("{}/{}/pagar", PRESTAMOS, id)
    }

    pub fn forma_pago(id: i64) -> String {
        format!("{}/{}", FORMAS_PAGO, id)
    }

    pub fn concepto(id: i64) -> String {
        format!("{}/{}", CONCEPTOS, id)
    }

    pub fn concepto_activo(id: i64) -> String {
        format!("{}/{}/activo", CONCEPTOS, id)
    }

    pub fn banco(id: i64) -> String {
        format!("{}/{}", BANCOS, id)
    }

    pub fn banco_activo(id: i64) -> String {
        format!("{}/{}/activo", BANCOS, id)
    }

    pub fn tarjeta(id: i64) -> String {
        format!("{}/{}", TARJETAS, id)
    }
}
