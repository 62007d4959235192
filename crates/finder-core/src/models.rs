use serde::{Deserialize, Serialize};

/// The slice of a repository listing the profiler cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepoSummary {
    /// Primary language as declared by the hosting platform
    pub language: Option<String>,
}

impl RepoSummary {
    pub fn new(language: Option<&str>) -> Self {
        Self {
            language: language.map(str::to_string),
        }
    }
}

/// An open issue returned by the beginner-friendly issue search
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IssueRecord {
    /// Repository full name in `owner/name` form
    pub repo_name: String,
    pub title: String,
    pub body: Option<String>,
    /// Browser URL of the issue
    pub url: String,
}

impl IssueRecord {
    /// Build a record from the search item's `repository_url`.
    ///
    /// The full name is the last two `/`-separated segments of that URL, so
    /// `https://api.github.com/repos/rust-lang/rust` yields `rust-lang/rust`.
    pub fn from_repository_url(
        repository_url: &str,
        title: impl Into<String>,
        body: Option<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            repo_name: repo_full_name(repository_url),
            title: title.into(),
            body,
            url: url.into(),
        }
    }
}

/// Extract `owner/name` from a repository API URL
pub fn repo_full_name(repository_url: &str) -> String {
    let mut segments = repository_url.trim_end_matches('/').rsplit('/');
    let name = segments.next().unwrap_or_default();
    match segments.next() {
        Some(owner) => format!("{}/{}", owner, name),
        None => name.to_string(),
    }
}

/// An issue paired with its generated explanation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnnotatedIssue {
    pub repo_name: String,
    pub title: String,
    pub link: String,
    pub ai_reason: String,
}

impl AnnotatedIssue {
    pub fn new(issue: IssueRecord, ai_reason: String) -> Self {
        Self {
            repo_name: issue.repo_name,
            title: issue.title,
            link: issue.url,
            ai_reason,
        }
    }
}

/// The recommendation produced for one user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Recommendation {
    /// The first top language that yielded any issues
    pub language: String,
    pub issues: Vec<AnnotatedIssue>,
}
