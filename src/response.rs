//! Response-shape normalization for list endpoints.
//!
//! The backend is inconsistent about list responses: some endpoints return a
//! bare JSON array, others wrap it as `{"ok": true, "data": [...]}` with
//! optional pagination metadata. Every list call site funnels through
//! [`ListResponse::into_items`] so the rest of the SDK only ever sees a `Vec`.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// ListResponse
// ---------------------------------------------------------------------------

/// A list endpoint response: either a bare array or an envelope object with
/// the items under a `data` key.
///
/// Unknown envelope keys (`ok`, backend-specific metadata) are ignored, so
/// both shapes of the same endpoint parse to the identical collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Bare(Vec<T>),
    Envelope {
        #[serde(default = "Vec::new")]
        data: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        page: Option<u64>,
        #[serde(default)]
        page_size: Option<u64>,
    },
}

impl<T> ListResponse<T> {
    /// Unwrap to the item collection, whichever shape arrived.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListResponse::Bare(items) => items,
            ListResponse::Envelope { data, .. } => data,
        }
    }

    /// Pagination total when the envelope carried one.
    pub fn total(&self) -> Option<u64> {
        match self {
            ListResponse::Bare(_) => None,
            ListResponse::Envelope { total, .. } => *total,
        }
    }

    /// Pagination page/page_size when the envelope carried them.
    pub fn page(&self) -> Option<(u64, u64)> {
        match self {
            ListResponse::Bare(_) => None,
            ListResponse::Envelope {
                page, page_size, ..
            } => (*page).zip(*page_size),
        }
    }
}
