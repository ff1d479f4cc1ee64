use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::period::Period;

// ---------------------------------------------------------------------------
// Salary -- a monthly salary record (sueldo)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salary {
    #[serde(rename = "mes", default)]
    pub month: Option<u32>,
    #[serde(rename = "anio", default)]
    pub year: Option<i32>,
    #[serde(rename = "monto", default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// SalaryPayload -- the three shapes /sueldos may answer with
// ---------------------------------------------------------------------------

/// The `/sueldos` response: a record list, a bare object carrying `monto`,
/// or an envelope whose `data` carries `monto`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SalaryPayload {
    Records(Vec<Salary>),
    Object(SalaryObject),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryObject {
    #[serde(default)]
    monto: Option<f64>,
    #[serde(default)]
    data: Option<SalaryInner>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryInner {
    #[serde(default)]
    monto: Option<f64>,
}

impl SalaryPayload {
    /// Resolve the salary figure for `period`.
    ///
    /// For a record list, the record matching the period wins, else the
    /// first record; for object shapes, the top-level `monto` wins over the
    /// nested `data.monto`. 0 when nothing applies.
    pub fn amount_for(&self, period: Period) -> f64 {
        match self {
            SalaryPayload::Records(records) => records
                .iter()
                .find(|r| r.month == Some(period.month) && r.year == Some(period.year))
                .or_else(|| records.first())
                .map(|r| r.amount)
                .unwrap_or(0.0),
            SalaryPayload::Object(object) => object
                .monto
                .or_else(|| object.data.as_ref().and_then(|inner| inner.monto))
                .unwrap_or(0.0),
        }
    }
}
