//! Calendar periods -- (month, year) pairs identifying a billing cycle.
//!
//! Periods are totally ordered through a linear index (`year * 12 + month - 1`),
//! which makes "months between" arithmetic and installment-window checks plain
//! integer math.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Period
// ---------------------------------------------------------------------------

/// A (month, year) pair identifying a billing/accounting cycle.
///
/// `month` is 1-based (1 = January .. 12 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub month: u32,
    pub year: i32,
}

impl Period {
    /// Create a period. `month` must be in `1..=12`.
    pub fn new(month: u32, year: i32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
        Self { month, year }
    }

    /// Linear index of this period: `year * 12 + month - 1`.
    ///
    /// Strictly monotonic in (year, month) lexicographic order, so indices
    /// compare the way calendars do: `(12, y)` sorts right before `(1, y+1)`.
    pub fn index(self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    /// Inverse of [`index`](Self::index), normalizing any linear index back
    /// into a valid (month, year) pair via euclidean division.
    pub fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    /// This period shifted by `delta` months (negative deltas go backwards).
    ///
    /// Normalizes overflow across year boundaries: `(11, 2024) + 3 = (2, 2025)`.
    pub fn plus_months(self, delta: i64) -> Self {
        Self::from_index(self.index() + delta)
    }

    /// Number of months from `earlier` to `self` (negative if `self` precedes it).
    pub fn months_since(self, earlier: Period) -> i64 {
        self.index() - earlier.index()
    }

    /// The `n` consecutive periods ending at `self`, oldest first.
    pub fn trailing(self, n: usize) -> Vec<Period> {
        (0..n)
            .rev()
            .map(|back| self.plus_months(-(back as i64)))
            .collect()
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
