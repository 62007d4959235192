//! Beginner-friendly issue search

use crate::error::FinderError;
use crate::models::IssueRecord;
use crate::traits::CodeHost;

/// Maximum number of issues requested per language
pub const MAX_ISSUES: usize = 10;

/// Search query for open newcomer issues written in `language`
pub fn beginner_query(language: &str) -> String {
    format!(
        r#"language:{} (label:"good first issue" OR label:"help wanted") state:open is:issue"#,
        language_qualifier(language)
    )
}

/// Multi-word names such as "Jupyter Notebook" must be quoted to stay one qualifier
fn language_qualifier(language: &str) -> String {
    if language.contains(char::is_whitespace) {
        format!("\"{}\"", language)
    } else {
        language.to_string()
    }
}

/// Find up to [`MAX_ISSUES`] open beginner-friendly issues in `language`.
///
/// `Some(vec![])` means the search succeeded without matches. `None` means the
/// search could not be completed, whether rate limited or failed in transit.
pub fn find_issues(host: &dyn CodeHost, language: &str) -> Option<Vec<IssueRecord>> {
    log::info!("Searching for beginner-friendly issues in {}", language);

    match host.search_issues(&beginner_query(language), MAX_ISSUES) {
        Ok(mut issues) => {
            issues.truncate(MAX_ISSUES);
            Some(issues)
        }
        Err(FinderError::RateLimited(message)) => {
            log::error!(
                "GitHub API rate limit exceeded, please wait and try again ({})",
                message
            );
            None
        }
        Err(e) => {
            log::error!("Error searching for issues: {}", e);
            None
        }
    }
}
