use crate::error::Result;
use crate::models::{IssueRecord, RepoSummary};

/// Source-hosting platform the recommendations are drawn from
///
/// Implementations are blocking; each call is a single upstream request with no
/// retries.
pub trait CodeHost: Send + Sync {
    /// List repositories owned by `username`, most recently updated first
    fn list_owned_repos(&self, username: &str) -> Result<Vec<RepoSummary>>;

    /// Run an issue search, newest activity first, returning at most `per_page` items
    ///
    /// An upstream rate limit must surface as [`crate::FinderError::RateLimited`].
    fn search_issues(&self, query: &str, per_page: usize) -> Result<Vec<IssueRecord>>;
}

/// Generative text service used to explain issues
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`, authenticating with `credential`
    ///
    /// Quota or rate-limit failures must surface as
    /// [`crate::FinderError::QuotaExhausted`] so callers can fail over.
    fn generate(&self, credential: &str, prompt: &str) -> Result<String>;
}
