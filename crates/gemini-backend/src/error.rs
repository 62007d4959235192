use finder_core::FinderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API key: {0}")]
    InvalidKey(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No content in response")]
    NoContent,
}

pub type Result<T> = std::result::Result<T, GeminiError>;

impl From<GeminiError> for FinderError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Http(e) => FinderError::Http(e.to_string()),
            GeminiError::Parse(e) => FinderError::Parse(e.to_string()),
            GeminiError::InvalidKey(_) => FinderError::Unauthorized,
            GeminiError::QuotaExceeded(message) => FinderError::QuotaExhausted(message),
            GeminiError::Api { status, message } => FinderError::Api { status, message },
            GeminiError::NoContent => {
                FinderError::EmptyResponse("Gemini returned no candidates".to_string())
            }
        }
    }
}
