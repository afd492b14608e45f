use crate::constants::{env_vars, fuzzy};
use crate::error::AppError;
use crate::resolver::Thresholds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_data_dir_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding `teams.{toml,json}` and `players.{toml,json}`.
    #[serde(default = "get_data_dir_path")]
    pub data_dir: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Jaro similarity above which a fuzzy guess is accepted.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    /// Edit distance below which a fuzzy guess is accepted.
    #[serde(default = "default_distance_threshold")]
    pub distance_threshold: usize,
}

fn default_similarity_threshold() -> f64 {
    fuzzy::SIMILARITY_THRESHOLD
}

fn default_distance_threshold() -> usize {
    fuzzy::DISTANCE_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: get_data_dir_path(),
            log_file_path: None,
            similarity_threshold: default_similarity_threshold(),
            distance_threshold: default_distance_threshold(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `GRIDIRON_DATA_DIR` - Override reference data directory
    /// - `GRIDIRON_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `GRIDIRON_*` environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(data_dir) = std::env::var(env_vars::DATA_DIR) {
            self.data_dir = data_dir;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.data_dir,
            &self.log_file_path,
            self.similarity_threshold,
        )
    }

    /// Fuzzy acceptance thresholds for the player resolver.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            similarity: self.similarity_threshold,
            distance: self.distance_threshold,
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

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
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Data Directory:");
        println!("{}", config.data_dir);
        println!("────────────────────────────────────");
        println!("Fuzzy Thresholds:");
        println!(
            "similarity > {}, distance < {}",
            config.similarity_threshold, config.distance_threshold
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::DEFAULT_LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating parent directories.
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
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
