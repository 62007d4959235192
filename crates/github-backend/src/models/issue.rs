use serde::{Deserialize, Serialize};

/// Issue item from the search API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubIssue {
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
    /// API URL of the owning repository, e.g. `https://api.github.com/repos/owner/name`
    pub repository_url: String,
}

/// GitHub search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubSearchResult {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<GitHubIssue>,
}
