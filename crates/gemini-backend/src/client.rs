use std::time::Duration;
use ureq::Agent;

use crate::error::{GeminiError, Result};
use crate::models::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini generative language API client
pub struct GeminiClient {
    agent: Agent,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for `base_url`, normally [`DEFAULT_BASE_URL`]
    pub fn with_base_url(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Map a failed response onto the error taxonomy used for key failover
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let detail = serde_json::from_str::<ErrorResponse>(&body).ok().map(|r| r.error);
        let message = match &detail {
            Some(detail) if !detail.message.is_empty() => detail.message.clone(),
            _ if body.is_empty() => format!("HTTP {}", status),
            _ => body,
        };
        let exhausted = detail
            .as_ref()
            .and_then(|d| d.status.as_deref())
            .is_some_and(|s| s == "RESOURCE_EXHAUSTED");

        if status == 429 || exhausted {
            return Err(GeminiError::QuotaExceeded(message));
        }

        match status {
            401 | 403 => Err(GeminiError::InvalidKey(message)),
            _ => Err(GeminiError::Api { status, message }),
        }
    }

    /// Generate content for a single text prompt using `api_key`
    pub fn generate_content(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        log::debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .send_json(GenerateContentRequest::from_prompt(prompt))
            .map_err(GeminiError::Http)?;

        let mut response = self.check_response(response)?;
        let body: GenerateContentResponse = serde_json::from_reader(response.body_mut().as_reader())?;

        body.text().map(str::to_string).ok_or(GeminiError::NoContent)
    }
}
