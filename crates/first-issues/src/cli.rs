use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "first-issues",
    version,
    about = "Recommend beginner-friendly GitHub issues in a developer's top languages"
)]
pub struct Cli {
    /// GitHub username to analyze
    #[arg(conflicts_with = "serve")]
    pub username: Option<String>,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Log verbosity (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Path to a TOML config file
    #[arg(long, env = "FIRST_ISSUES_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of top languages to try (overrides config file)
    #[arg(long, short = 'n', value_name = "N")]
    pub count: Option<usize>,

    /// GitHub API token (overrides config file and GITHUB_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Serve the HTTP API instead of running once
    #[arg(long)]
    pub serve: bool,

    /// Address to bind in --serve mode
    #[arg(long, requires = "serve")]
    pub host: Option<String>,

    /// Port to bind in --serve mode
    #[arg(long, requires = "serve")]
    pub port: Option<u16>,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_username_is_optional_positional() {
        let cli = Cli::try_parse_from(["first-issues", "octocat", "-o", "json"]).unwrap();
        assert_eq!(cli.username.as_deref(), Some("octocat"));
        assert_eq!(cli.format, OutputFormat::Json);

        let cli = Cli::try_parse_from(["first-issues"]).unwrap();
        assert!(cli.username.is_none());
        assert!(!cli.serve);
    }

    #[test]
    fn test_serve_conflicts_with_username() {
        assert!(Cli::try_parse_from(["first-issues", "octocat", "--serve"]).is_err());
        assert!(Cli::try_parse_from(["first-issues", "--port", "9000"]).is_err());

        let cli = Cli::try_parse_from(["first-issues", "--serve", "--port", "9000"]).unwrap();
        assert_eq!(cli.port, Some(9000));
    }
}
