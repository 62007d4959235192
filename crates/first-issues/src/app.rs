use finder_core::{
    CodeHost, ReasonGenerator, RecommendError, Recommendation, Recommender, TextGenerator,
};
use gemini_backend::GeminiClient;
use github_backend::GitHubClient;

use crate::config::Config;

/// Long-lived collaborators shared by the CLI run and the HTTP handler
pub struct App {
    host: Box<dyn CodeHost>,
    generator: Box<dyn TextGenerator>,
    credentials: Vec<String>,
    language_count: usize,
}

impl App {
    pub fn new(
        host: Box<dyn CodeHost>,
        generator: Box<dyn TextGenerator>,
        credentials: Vec<String>,
        language_count: usize,
    ) -> Self {
        Self {
            host,
            generator,
            credentials,
            language_count,
        }
    }

    /// Build the GitHub and Gemini clients from a validated config
    pub fn from_config(config: &Config) -> Self {
        let github = GitHubClient::with_base_url(&config.github_url, config.github_token());
        let gemini = GeminiClient::with_base_url(&config.gemini_url).with_model(&config.gemini_model);

        Self::new(
            Box::new(github),
            Box::new(gemini),
            config.gemini_api_keys.clone(),
            config.language_count,
        )
    }

    /// Run one blocking recommendation for `username`
    pub fn recommend(&self, username: &str) -> Result<Recommendation, RecommendError> {
        let reasons = ReasonGenerator::new(self.generator.as_ref(), &self.credentials);
        Recommender::new(self.host.as_ref(), reasons)
            .with_language_count(self.language_count)
            .recommend(username)
    }
}
