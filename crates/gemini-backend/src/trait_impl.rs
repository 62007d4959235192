//! Implementation of finder-core traits for GeminiClient

use finder_core::{Result, TextGenerator};

use crate::client::GeminiClient;

impl TextGenerator for GeminiClient {
    fn generate(&self, credential: &str, prompt: &str) -> Result<String> {
        Ok(self.generate_content(credential, prompt)?)
    }
}
