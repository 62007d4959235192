mod app;
mod cli;
mod color;
mod config;
mod output;
mod server;

use anyhow::{Context, Result};
use app::App;
use clap::{CommandFactory, Parser};
use cli::{Cli, LogLevel};
use config::Config;
use finder_core::RecommendError;
use output::{output_error, output_notice, output_recommendation};
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    // A missing .env is fine; variables may come from the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    color::init(cli.color);
    init_logger(cli.log_level);

    let format = cli.format;
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            output_error(&e, format);
            ExitCode::from(1)
        }
    }
}

fn init_logger(level: LogLevel) {
    let env = env_logger::Env::default().filter_or("RUST_LOG", level.as_filter());

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    if !cli.serve && cli.username.as_deref().is_none_or(|u| u.trim().is_empty()) {
        eprintln!("{}", Cli::command().render_usage());
        return Ok(ExitCode::from(1));
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.github_token.clone(), cli.count, cli.host.clone(), cli.port);
    config.validate()?;

    let app = App::from_config(&config);

    if cli.serve {
        return serve(app, &config);
    }

    let username = cli.username.as_deref().unwrap_or_default().trim();
    match app.recommend(username) {
        Ok(recommendation) => {
            output_recommendation(&recommendation, username, cli.format);
            Ok(ExitCode::SUCCESS)
        }
        // Finding nothing is still a successful run
        Err(RecommendError::NoIssues) => {
            output_notice(&RecommendError::NoIssues.to_string(), cli.format);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e.into()),
    }
}

fn serve(app: App, config: &Config) -> Result<ExitCode> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(server::serve(Arc::new(app), addr))?;
    Ok(ExitCode::SUCCESS)
}
