//! Implementation of finder-core traits for GitHubClient

use finder_core::{CodeHost, IssueRecord, RepoSummary, Result};

use crate::client::GitHubClient;
use crate::models::{GitHubIssue, GitHubRepo};

fn repo_to_core(repo: GitHubRepo) -> RepoSummary {
    RepoSummary {
        language: repo.language,
    }
}

fn issue_to_core(issue: GitHubIssue) -> IssueRecord {
    IssueRecord::from_repository_url(&issue.repository_url, issue.title, issue.body, issue.html_url)
}

impl CodeHost for GitHubClient {
    fn list_owned_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        let repos = self.list_user_repos(username)?;
        Ok(repos.into_iter().map(repo_to_core).collect())
    }

    fn search_issues(&self, query: &str, per_page: usize) -> Result<Vec<IssueRecord>> {
        let result = GitHubClient::search_issues(self, query, per_page)?;
        Ok(result.items.into_iter().map(issue_to_core).collect())
    }
}
