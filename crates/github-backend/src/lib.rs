pub mod client;
pub mod error;
pub mod models;
mod trait_impl;


pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export finder-core types for convenience
pub use finder_core::{CodeHost, FinderError};
