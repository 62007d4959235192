use finder_core::FinderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for FinderError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => FinderError::Http(e.to_string()),
            GitHubError::Parse(e) => FinderError::Parse(e.to_string()),
            GitHubError::UserNotFound(name) => FinderError::NotFound(name),
            GitHubError::Unauthorized => FinderError::Unauthorized,
            GitHubError::RateLimited(message) => FinderError::RateLimited(message),
            GitHubError::Api { status, message } => FinderError::Api { status, message },
        }
    }
}
