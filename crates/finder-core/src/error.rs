use thiserror::Error;

/// Common errors for all upstream backends
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

impl FinderError {
    /// Whether another credential may still succeed where this one failed
    pub fn is_quota_exhausted(&self) -> bool {
        matches!(self, FinderError::QuotaExhausted(_))
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
