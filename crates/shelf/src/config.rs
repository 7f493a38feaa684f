use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Application configuration stored in a TOML file.
///
/// Every field has a default, so a partial (or empty) file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            database: DatabaseConfig::default(),
            omdb: OmdbConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Config {
    fn default_log_level() -> String {
        "warn".to_string()
    }

    /// Load config from file, or create it with defaults if it doesn't exist.
    pub async fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }

                let default = Self::default();
                tokio::fs::write(path, toml::to_string_pretty(&default)?).await?;
                Ok(default)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// SQLite store location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_path")]
    pub path: PathBuf,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            max_connections: Self::default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("data/movies.db")
    }

    fn default_max_connections() -> u32 {
        1
    }

    /// sqlx connection URL, creating the file on first use.
    pub fn url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path.display())
    }
}

/// OMDb lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// API key from https://www.omdbapi.com/apikey.aspx
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "OmdbConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "OmdbConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl OmdbConfig {
    fn default_base_url() -> String {
        omdb::DEFAULT_BASE_URL.to_string()
    }

    fn default_timeout_secs() -> u64 {
        5
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Gallery generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "SiteConfig::default_template_path")]
    pub template_path: PathBuf,
    #[serde(default = "SiteConfig::default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "SiteConfig::default_page_title")]
    pub page_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            template_path: Self::default_template_path(),
            output_path: Self::default_output_path(),
            page_title: Self::default_page_title(),
        }
    }
}

impl SiteConfig {
    fn default_template_path() -> PathBuf {
        PathBuf::from("_static/index_template.html")
    }

    fn default_output_path() -> PathBuf {
        PathBuf::from("_static/index.html")
    }

    fn default_page_title() -> String {
        "My Movie Collection".to_string()
    }
}
