//! Language profiling from a user's owned repositories

use crate::models::RepoSummary;
use crate::traits::CodeHost;

/// Number of top languages considered when none is configured
pub const DEFAULT_LANGUAGE_COUNT: usize = 3;

/// Count declared languages, keeping first-appearance order
pub fn tally_languages(repos: &[RepoSummary]) -> Vec<(String, usize)> {
    let mut tally: Vec<(String, usize)> = Vec::new();

    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        match tally.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => tally.push((language.to_string(), 1)),
        }
    }

    tally
}

/// The `count` most frequent languages, most frequent first.
///
/// Ties keep the order in which the languages were first seen, and the listing is
/// sorted by recency, so the more recently active language wins a tie.
pub fn rank_languages(repos: &[RepoSummary], count: usize) -> Vec<String> {
    let mut tally = tally_languages(repos);
    // stable sort preserves first-appearance order among equal counts
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.into_iter().take(count).map(|(name, _)| name).collect()
}

/// Determine the top `count` languages for `username`.
///
/// Returns an empty list when the listing fails, the user has no repositories, or
/// none of them declares a language. The cases are logged but not distinguished.
pub fn top_languages(host: &dyn CodeHost, username: &str, count: usize) -> Vec<String> {
    log::info!("Finding top {} languages for user: {}", count, username);

    let repos = match host.list_owned_repos(username) {
        Ok(repos) => repos,
        Err(e) => {
            log::error!("Error fetching repositories: {}", e);
            return Vec::new();
        }
    };

    if repos.is_empty() {
        log::warn!("No public repositories found for {}", username);
        return Vec::new();
    }

    let languages = rank_languages(&repos, count);
    if languages.is_empty() {
        log::warn!("No repositories with a specified language");
        return languages;
    }

    log::info!("Top languages found: {}", languages.join(", "));
    languages
}
