use crate::cli::OutputFormat;
use colored::Colorize;
use finder_core::Recommendation;
use serde::Serialize;

/// Error payload shared by the CLI JSON output and the HTTP API
#[derive(Serialize)]
pub struct JsonError {
    pub error: String,
}

impl JsonError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

pub fn output_recommendation(result: &Recommendation, username: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", render_recommendation(result, username));
        }
    }
}

/// Numbered, human-readable listing of the recommended issues
pub fn render_recommendation(result: &Recommendation, username: &str) -> String {
    let mut output = format!(
        "\n--- Top {} Recommended Issues in {} for {} ---",
        result.issues.len(),
        result.language.cyan().bold(),
        username.bold()
    );

    for (i, issue) in result.issues.iter().enumerate() {
        output.push_str(&format!(
            "\n{}. [{}] - {}\n   {}: {}\n   {}: {}\n",
            i + 1,
            issue.repo_name.magenta(),
            issue.title.white().bold(),
            "Link".dimmed(),
            issue.link,
            "Why".dimmed(),
            issue.ai_reason
        ));
    }

    output
}

/// Report a non-fatal "nothing found" outcome
pub fn output_notice(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&JsonError::new(message)) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => println!("\n{}", message.yellow()),
    }
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&JsonError::new(format!("{:#}", err)))
            .unwrap_or_else(|_| format!(r#"{{"error": "{}"}}"#, err)),
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}
