//! Client SDK for the finanzas personal-finance backend.
//!
//! Wraps the REST API (expenses, card invoices, installment loans, salary,
//! master data) in typed query interfaces, and implements the dashboard
//! aggregation on top: per-period sums, loan activity windows, and the KPI
//! totals, with partial-failure tolerance across the data sources.
//!
//! # Quick start
//!
//! ```no_run
//! use finanzas_sdk::{FinanzasSdk, Period};
//!
//! # async fn run() -> finanzas_sdk::Result<()> {
//! let sdk = FinanzasSdk::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .token("secret")
//!     .build()?;
//!
//! // Typed endpoint queries
//! let gastos = sdk.expenses().list(Some(3), Some(2024)).await?;
//!
//! // One aggregated dashboard view
//! let snapshot = sdk.dashboard().snapshot(Period::new(3, 2024)).await?;
//! println!("{}", snapshot.summary.monthly_total_excluding_credit());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod period;
pub mod queries;
pub mod response;

pub use aggregate::{MonthlySummary, RecentPayment};
pub use client::{ApiClient, NoAuth, StaticToken, TokenProvider};
pub use dashboard::{DashboardQuery, DashboardSnapshot, DashboardViewModel};
pub use error::{FinanzasError, Result};
pub use period::Period;
pub use response::ListResponse;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FinanzasSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FinanzasSdk`] instance.
///
/// Use [`FinanzasSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](FinanzasSdkBuilder::build).
pub struct FinanzasSdkBuilder {
    base_url: String,
    timeout: Duration,
    tokens: Arc<dyn TokenProvider>,
}

impl Default for FinanzasSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            tokens: Arc::new(NoAuth),
        }
    }
}

impl FinanzasSdkBuilder {
    /// Set the backend base URL. Defaults to `http://127.0.0.1:8000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Authenticate with a fixed bearer token.
    pub fn token(self, token: impl Into<String>) -> Self {
        self.token_provider(StaticToken::new(token))
    }

    /// Authenticate through a custom [`TokenProvider`], e.g. one that
    /// refreshes the token externally.
    pub fn token_provider(mut self, provider: impl TokenProvider + 'static) -> Self {
        self.tokens = Arc::new(provider);
        self
    }

    /// Build the SDK, constructing the underlying HTTP client.
    pub fn build(self) -> Result<FinanzasSdk> {
        let client = ApiClient::new(self.base_url, self.timeout, self.tokens)?;
        Ok(FinanzasSdk { client })
    }
}

// ---------------------------------------------------------------------------
// FinanzasSdk
// ---------------------------------------------------------------------------

/// The main entry point for the finanzas SDK.
///
/// Wraps an [`ApiClient`] and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
pub struct FinanzasSdk {
    client: ApiClient,
}

impl FinanzasSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FinanzasSdkBuilder {
        FinanzasSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the expense (gastos) query interface.
    pub fn expenses(&self) -> queries::expenses::ExpenseQuery<'_> {
        queries::expenses::ExpenseQuery::new(&self.client)
    }

    /// Access the card-invoice (facturas) query interface.
    pub fn invoices(&self) -> queries::invoices::InvoiceQuery<'_> {
        queries::invoices::InvoiceQuery::new(&self.client)
    }

    /// Access the loan (prestamos) query interface.
    pub fn loans(&self) -> queries::loans::LoanQuery<'_> {
        queries::loans::LoanQuery::new(&self.client)
    }

    /// Access the salary (sueldos) query interface.
    pub fn salaries(&self) -> queries::salaries::SalaryQuery<'_> {
        queries::salaries::SalaryQuery::new(&self.client)
    }

    /// Access the master-data query interface (payment methods, concepts,
    /// banks, cards).
    pub fn catalog(&self) -> queries::catalog::CatalogQuery<'_> {
        queries::catalog::CatalogQuery::new(&self.client)
    }

    /// Access the dashboard snapshot builder.
    pub fn dashboard(&self) -> DashboardQuery<'_> {
        DashboardQuery::new(&self.client)
    }

    /// Create a stateful dashboard view-model sharing this SDK's client.
    pub fn dashboard_view_model(&self) -> DashboardViewModel {
        DashboardViewModel::new(self.client.clone())
    }

    /// Return a reference to the underlying [`ApiClient`] for advanced usage.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl fmt::Display for FinanzasSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FinanzasSdk(base_url={})", self.client.base_url())
    }
}
