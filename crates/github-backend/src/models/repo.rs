use serde::{Deserialize, Serialize};

/// GitHub repository as returned by `GET /users/{username}/repos`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub full_name: String,
    /// Primary language; null for empty or unrecognised repositories
    pub language: Option<String>,
}
