use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

/// Process-wide configuration, built once at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Token for the GitHub REST and search APIs
    pub github_token: Option<String>,
    pub github_url: String,
    /// Gemini API keys, tried in order when one runs out of quota
    #[serde(default, deserialize_with = "key_list")]
    pub gemini_api_keys: Vec<String>,
    pub gemini_url: String,
    pub gemini_model: String,
    /// Number of top languages searched, most frequent first
    pub language_count: usize,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_token: None,
            github_url: "https://api.github.com".to_string(),
            gemini_api_keys: Vec::new(),
            gemini_url: gemini_backend::DEFAULT_BASE_URL.to_string(),
            gemini_model: gemini_backend::DEFAULT_MODEL.to_string(),
            language_count: finder_core::DEFAULT_LANGUAGE_COUNT,
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Accept either a list of keys or one comma-separated string
fn key_list<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Keys {
        List(Vec<String>),
        Joined(String),
    }

    let keys = match Keys::deserialize(deserializer)? {
        Keys::List(keys) => keys,
        Keys::Joined(joined) => joined.split(',').map(str::to_string).collect(),
    };

    Ok(keys
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect())
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        // Conventional variable names first, FIRST_ISSUES_* wins over them
        figment = figment
            .merge(Env::raw().only(&["GEMINI_API_KEY"]).map(|_| "gemini_api_keys".into()))
            .merge(Env::raw().only(&["GITHUB_TOKEN", "GEMINI_API_KEYS"]))
            .merge(Env::prefixed("FIRST_ISSUES_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        github_token: Option<String>,
        language_count: Option<usize>,
        host: Option<String>,
        port: Option<u16>,
    ) {
        if let Some(token) = github_token {
            self.github_token = Some(token);
        }
        if let Some(count) = language_count {
            self.language_count = count;
        }
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.github_token.as_deref().is_none_or(|t| t.trim().is_empty()) {
            return Err(anyhow!(
                "GitHub token not configured. Set via --github-token, GITHUB_TOKEN env var, or config file"
            ));
        }
        if self.gemini_api_keys.is_empty() {
            return Err(anyhow!(
                "Gemini API keys not configured. Set GEMINI_API_KEYS (comma-separated) or gemini_api_keys in the config file"
            ));
        }
        if self.language_count == 0 {
            return Err(anyhow!("language_count must be at least 1"));
        }
        Ok(())
    }

    /// The validated GitHub token
    pub fn github_token(&self) -> &str {
        self.github_token.as_deref().unwrap_or_default()
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "first-issues").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("first-issues").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("first-issues")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("first-issues.toml"))
}
