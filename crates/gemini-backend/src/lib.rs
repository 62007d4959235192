//! Gemini `generateContent` client
//!
//! The API key is supplied per call so one client can serve every configured
//! credential during failover.

pub mod client;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use error::{GeminiError, Result};
pub use models::*;
