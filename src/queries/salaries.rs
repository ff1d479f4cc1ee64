//! Salary (sueldo) queries against `/sueldos`.

use crate::client::ApiClient;
use crate::config::paths;
use crate::error::Result;
use crate::models::SalaryPayload;
use crate::period::Period;

/// Query interface for salary records, bound to a client.
pub struct SalaryQuery<'a> {
    client: &'a ApiClient,
}

impl<'a> SalaryQuery<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Raw `/sueldos` response for a period, in whichever of its shapes.
    pub async fn payload(&self, period: Period) -> Result<SalaryPayload> {
        let query = [
            ("mes", period.month.to_string()),
            ("anio", period.year.to_string()),
        ];
        self.client.get(paths::SUELDOS, &query).await
    }

    /// The salary figure for a period; 0 when no record applies.
    pub async fn amount_for(&self, period: Period) -> Result<f64> {
        Ok(self.payload(period).await?.amount_for(period))
    }
}
