//! One-sentence issue explanations with credential failover

use std::ops::ControlFlow;

use crate::traits::TextGenerator;

/// Returned when no credential produced an explanation
pub const REASON_FAILED: &str = "AI analysis failed: All API keys are rate-limited or invalid.";

/// Characters of the issue body included in the prompt
pub const BODY_PREVIEW_CHARS: usize = 500;

const MISSING_BODY: &str = "No description provided.";

/// Build the prompt asking for a single sentence about the issue
pub fn build_prompt(title: &str, body: Option<&str>) -> String {
    let preview: String = match body {
        Some(body) if !body.is_empty() => body.chars().take(BODY_PREVIEW_CHARS).collect(),
        _ => MISSING_BODY.to_string(),
    };

    format!(
        "You are helping a developer pick their first open-source contribution.\n\
         In one concise sentence, describe what kind of task this GitHub issue is \
         (for example a bug fix, documentation update, new feature, test or refactoring) \
         and why it suits a newcomer.\n\n\
         Issue title: {}\n\
         Issue body: {}",
        title, preview
    )
}

/// Explains issues through a [`TextGenerator`], trying credentials in order
pub struct ReasonGenerator<'a> {
    generator: &'a dyn TextGenerator,
    credentials: &'a [String],
}

impl<'a> ReasonGenerator<'a> {
    pub fn new(generator: &'a dyn TextGenerator, credentials: &'a [String]) -> Self {
        Self {
            generator,
            credentials,
        }
    }

    /// Explain the issue in one sentence, or return [`REASON_FAILED`].
    ///
    /// A quota error moves on to the next credential. Any other error stops the
    /// failover immediately.
    pub fn explain(&self, title: &str, body: Option<&str>) -> String {
        let prompt = build_prompt(title, body);

        let outcome = self
            .credentials
            .iter()
            .enumerate()
            .try_for_each(|(index, credential)| {
                match self.generator.generate(credential, &prompt) {
                    Ok(text) => ControlFlow::Break(Some(text.trim().to_string())),
                    Err(e) if e.is_quota_exhausted() => {
                        log::warn!("API key #{} is rate-limited, trying the next one", index + 1);
                        ControlFlow::Continue(())
                    }
                    Err(e) => {
                        log::error!("API key #{} failed: {}", index + 1, e);
                        ControlFlow::Break(None)
                    }
                }
            });

        match outcome {
            ControlFlow::Break(Some(text)) => text,
            _ => REASON_FAILED.to_string(),
        }
    }
}
