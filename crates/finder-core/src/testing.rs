//! In-memory collaborators for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{FinderError, Result};
use crate::models::{IssueRecord, RepoSummary};
use crate::traits::{CodeHost, TextGenerator};

/// Canned outcome for a single upstream call
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    RateLimited,
    QuotaExhausted,
    Failed,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::RateLimited => Err(FinderError::RateLimited("limit reached".to_string())),
            Reply::QuotaExhausted => Err(FinderError::QuotaExhausted("quota".to_string())),
            Reply::Failed => Err(FinderError::Http("connection refused".to_string())),
        }
    }
}

pub struct FakeHost {
    repos: Reply<Vec<RepoSummary>>,
    searches: HashMap<String, Reply<Vec<IssueRecord>>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeHost {
    pub fn with_languages(languages: &[Option<&str>]) -> Self {
        Self::with_repos(Reply::Ok(
            languages.iter().map(|l| RepoSummary::new(*l)).collect(),
        ))
    }

    pub fn with_repos(repos: Reply<Vec<RepoSummary>>) -> Self {
        Self {
            repos,
            searches: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register the reply for searches in `language`
    pub fn search(mut self, language: &str, reply: Reply<Vec<IssueRecord>>) -> Self {
        self.searches.insert(language.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CodeHost for FakeHost {
    fn list_owned_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        self.calls.lock().unwrap().push(format!("repos:{}", username));
        self.repos.to_result()
    }

    fn search_issues(&self, query: &str, _per_page: usize) -> Result<Vec<IssueRecord>> {
        let rest = query.strip_prefix("language:").unwrap_or_default();
        let language = match rest.strip_prefix('"') {
            Some(quoted) => quoted.split('"').next(),
            None => rest.split_whitespace().next(),
        }
        .unwrap_or_default()
        .to_string();
        self.calls.lock().unwrap().push(format!("search:{}", language));
        self.searches
            .get(&language)
            .cloned()
            .unwrap_or(Reply::Ok(Vec::new()))
            .to_result()
    }
}

pub struct FakeGenerator {
    replies: HashMap<String, Reply<String>>,
    pub attempts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new(replies: &[(&str, Reply<String>)]) -> Self {
        Self {
            replies: replies
                .iter()
                .map(|(key, reply)| (key.to_string(), reply.clone()))
                .collect(),
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.lock().unwrap().clone()
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(&self, credential: &str, _prompt: &str) -> Result<String> {
        self.attempts.lock().unwrap().push(credential.to_string());
        self.replies
            .get(credential)
            .cloned()
            .unwrap_or(Reply::Failed)
            .to_result()
    }
}

pub fn issue(repo: &str, title: &str) -> IssueRecord {
    IssueRecord {
        repo_name: repo.to_string(),
        title: title.to_string(),
        body: Some(format!("Body of {}", title)),
        url: format!("https://github.com/{}/issues/1", repo),
    }
}
