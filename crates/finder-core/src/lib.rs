pub mod error;
pub mod issues;
pub mod models;
pub mod profiler;
pub mod reason;
pub mod recommend;
pub mod traits;

#[cfg(test)]
mod testing;

pub use error::{FinderError, Result};
pub use issues::{beginner_query, find_issues, MAX_ISSUES};
pub use models::*;
pub use profiler::{top_languages, DEFAULT_LANGUAGE_COUNT};
pub use reason::{ReasonGenerator, REASON_FAILED};
pub use recommend::{RecommendError, Recommender};
pub use traits::{CodeHost, TextGenerator};
