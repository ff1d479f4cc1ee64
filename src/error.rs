#[derive(Debug, thiserror::Error)]
pub enum FinanzasError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend answered 401; the bearer token is missing or no longer valid.
    #[error("session expired")]
    SessionExpired,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FinanzasError {
    /// The backend-provided message for API-level failures, if there is one.
    ///
    /// FastAPI errors carry a `detail` field which the client extracts into
    /// [`FinanzasError::Api`]; transport and decode errors have no
    /// user-presentable message and return `None`.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            FinanzasError::Api { message, .. } if !message.is_empty() => Some(message),
            FinanzasError::NotFound(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanzasError>;
