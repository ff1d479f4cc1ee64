pub mod catalog;
pub mod expense;
pub mod invoice;
pub mod loan;
pub mod salary;

pub use catalog::*;
pub use expense::*;
pub use invoice::*;
pub use loan::*;
pub use salary::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable wire field to its default.
///
/// The backend serializes unset optionals as explicit `null` (e.g.
/// `"pagado": null`, `"monto": null`); combined with `#[serde(default)]`
/// this treats missing and null identically.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
