use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::{ConfigFields, validate_config};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the sports API, without the key segment. Should include https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key inserted as the first path segment of every request.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// League fetched when no `--league` is given.
    #[serde(default = "default_league")]
    pub default_league: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_api_key() -> String {
    constants::DEFAULT_API_KEY.to_string()
}

fn default_league() -> String {
    constants::DEFAULT_LEAGUE.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: default_api_key(),
            default_league: default_league(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

/// Adds an https:// scheme when missing and drops trailing slashes.
/// Plain http is kept only for loopback hosts.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let is_loopback =
        trimmed.starts_with("http://localhost") || trimmed.starts_with("http://127.0.0.1");
    if trimmed.starts_with("https://") || is_loopback {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches("http://"))
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing file yields the built-in defaults; nothing is written.
    ///
    /// # Environment Variables
    /// - `STADIUM_API_BASE_URL` - Override API base URL
    /// - `STADIUM_API_KEY` - Override API key
    /// - `STADIUM_LEAGUE` - Override default league
    /// - `STADIUM_LOG_FILE` - Override log file path
    /// - `STADIUM_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `STADIUM_*` environment variables on top of the current values.
    /// An unparsable timeout is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base;
        }
        if let Ok(key) = std::env::var(env_vars::API_KEY) {
            self.api_key = key;
        }
        if let Ok(league) = std::env::var(env_vars::LEAGUE) {
            self.default_league = league;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&ConfigFields {
            api_base_url: &self.api_base_url,
            api_key: &self.api_key,
            default_league: &self.default_league,
            log_file_path: &self.log_file_path,
            http_timeout_seconds: self.http_timeout_seconds,
        })
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed and normalizes the base URL
    /// before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("API Key:");
        println!("{}", config.api_key);
        println!("────────────────────────────────────");
        println!("Default League:");
        println!("{}", config.default_league);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }
}
