//! Composes profiling, search and explanation into one recommendation

use thiserror::Error;

use crate::issues::find_issues;
use crate::models::{AnnotatedIssue, Recommendation};
use crate::profiler::{top_languages, DEFAULT_LANGUAGE_COUNT};
use crate::reason::ReasonGenerator;
use crate::traits::CodeHost;

/// Why no recommendation could be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("A GitHub username is required")]
    MissingUsername,

    #[error("Could not determine top languages for {0}")]
    NoLanguages(String),

    #[error("Could not find any suitable 'good first issues' in the top languages at the moment")]
    NoIssues,
}

pub struct Recommender<'a> {
    host: &'a dyn CodeHost,
    reasons: ReasonGenerator<'a>,
    language_count: usize,
}

impl<'a> Recommender<'a> {
    pub fn new(host: &'a dyn CodeHost, reasons: ReasonGenerator<'a>) -> Self {
        Self {
            host,
            reasons,
            language_count: DEFAULT_LANGUAGE_COUNT,
        }
    }

    /// Number of top languages to try, in order
    pub fn with_language_count(mut self, count: usize) -> Self {
        self.language_count = count;
        self
    }

    /// Recommend issues for `username`.
    ///
    /// Languages are tried most frequent first; the first one whose search returns
    /// any issues is used and the rest are never searched.
    pub fn recommend(&self, username: &str) -> Result<Recommendation, RecommendError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(RecommendError::MissingUsername);
        }

        let languages = top_languages(self.host, username, self.language_count);
        if languages.is_empty() {
            return Err(RecommendError::NoLanguages(username.to_string()));
        }

        let (language, issues) = languages
            .into_iter()
            .find_map(|language| match find_issues(self.host, &language) {
                Some(issues) if !issues.is_empty() => Some((language, issues)),
                _ => None,
            })
            .ok_or(RecommendError::NoIssues)?;

        log::info!("Explaining {} issues in {}", issues.len(), language);
        let issues = issues
            .into_iter()
            .map(|issue| {
                let reason = self.reasons.explain(&issue.title, issue.body.as_deref());
                AnnotatedIssue::new(issue, reason)
            })
            .collect();

        Ok(Recommendation { language, issues })
    }
}
