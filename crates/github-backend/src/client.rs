use std::time::Duration;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

/// GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a GitHub client for `base_url` (api.github.com, GitHub Enterprise, or a test server)
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Try to read error body
        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // Try to parse as GitHub error response
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        // GitHub answers both primary and secondary rate limits with 403 (sometimes 429)
        match status {
            401 => Err(GitHubError::Unauthorized),
            403 | 429 => Err(GitHubError::RateLimited(message)),
            _ => Err(GitHubError::Api { status, message }),
        }
    }

    fn get(&self, url: &str) -> Result<ureq::http::Response<ureq::Body>> {
        log::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        self.check_response(response)
    }

    // ==================== Repository Operations ====================

    /// List repositories owned by a user, most recently updated first
    pub fn list_user_repos(&self, username: &str) -> Result<Vec<GitHubRepo>> {
        let url = format!(
            "{}/users/{}/repos?type=owner&sort=updated",
            self.base_url,
            urlencoding::encode(username)
        );

        let mut response = match self.get(&url) {
            Err(GitHubError::Api { status: 404, .. }) => {
                return Err(GitHubError::UserNotFound(username.to_string()));
            }
            other => other?,
        };
        let repos: Vec<GitHubRepo> = serde_json::from_reader(response.body_mut().as_reader())?;
        Ok(repos)
    }

    // ==================== Search Operations ====================

    /// Search issues using GitHub search syntax, most recently updated first
    pub fn search_issues(&self, query: &str, per_page: usize) -> Result<GitHubSearchResult> {
        let url = format!(
            "{}/search/issues?q={}&sort=updated&order=desc&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            per_page
        );

        let mut response = self.get(&url)?;
        let result: GitHubSearchResult = serde_json::from_reader(response.body_mut().as_reader())?;
        Ok(result)
    }
}
