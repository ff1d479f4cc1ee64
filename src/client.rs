//! HTTP client wrapper with bearer authentication and JSON decoding.
//!
//! [`ApiClient`] owns the `reqwest` client, the backend base URL and an
//! injected [`TokenProvider`]. The token is attached per request at send
//! time, so rotating credentials only requires the provider to return a new
//! value -- there is no ambient/global token state.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{FinanzasError, Result};
use crate::response::ListResponse;

// ---------------------------------------------------------------------------
// TokenProvider
// ---------------------------------------------------------------------------

/// Source of the bearer token attached to every request.
///
/// Implemented by [`StaticToken`] and [`NoAuth`], and by any
/// `Fn() -> Option<String>` closure for callers that refresh tokens
/// externally.
pub trait TokenProvider: Send + Sync {
    /// The current token, or `None` to send the request unauthenticated.
    fn token(&self) -> Option<String>;
}

/// A fixed token, set once at construction.
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No authentication; requests carry no `Authorization` header.
pub struct NoAuth;

impl TokenProvider for NoAuth {
    fn token(&self) -> Option<String> {
        None
    }
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Thin wrapper over `reqwest` that speaks the backend's conventions:
/// bearer auth on every request, FastAPI `detail` error bodies, and list
/// responses normalized through [`ListResponse`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Create a client for `base_url` (scheme + host, no trailing slash
    /// required) with the given request timeout and token provider.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FinanzasError::InvalidArgument(
                "base_url must not be empty".into(),
            ));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            tokens,
        })
    }

    /// The configured base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (if any) and send, mapping non-success
    /// statuses to typed errors.
    ///
    /// 401 becomes [`FinanzasError::SessionExpired`]; other failures become
    /// [`FinanzasError::Api`] with the FastAPI `detail` message when the
    /// error body carries one, else the raw body text.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request = match self.tokens.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(FinanzasError::SessionExpired);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_detail(&body).unwrap_or(body);
            if status == StatusCode::NOT_FOUND {
                return Err(FinanzasError::NotFound(message));
            }
            return Err(FinanzasError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// GET `path` and decode the JSON body into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send(self.http.get(self.url(path)).query(query)).await?;
        Ok(response.json().await?)
    }

    /// GET a list endpoint, accepting both the bare-array and enveloped
    /// response shapes.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>> {
        let payload: ListResponse<T> = self.get(path, query).await?;
        Ok(payload.into_items())
    }

    /// POST a JSON body, returning the (freeform) response body.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await.unwrap_or(serde_json::Value::Null))
    }

    /// PUT a JSON body, returning the (freeform) response body.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await.unwrap_or(serde_json::Value::Null))
    }

    /// PATCH a JSON body, returning the (freeform) response body.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let response = self
            .send(self.http.patch(self.url(path)).json(body))
            .await?;
        Ok(response.json().await.unwrap_or(serde_json::Value::Null))
    }

    /// DELETE `path`, discarding the response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}

/// Pull the FastAPI `detail` string out of an error body, if present.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}
