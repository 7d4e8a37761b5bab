//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use careerelite_domain::Profile;
use careerelite_engine::EngineConfig;
use careerelite_sources::{sample_profile, SourceConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// CLI configuration.
///
/// ```toml
/// profile_path = "/home/me/profile.toml"
///
/// [settings]
/// format = "table"
/// color = true
/// log_level = "info"
///
/// [engine]
/// scrape_interval_hours = 6
///
/// [sources]
/// linkedin_ms = 1000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Profile file (TOML or JSON); the built-in sample profile when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Scheduler and tracker settings
    #[serde(default)]
    pub engine: EngineConfig,

    /// Simulated collaborator latencies
    #[serde(default)]
    pub sources: SourceConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".careerelite").join("config.toml"))
    }

    /// Load configuration from the default path, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            return Self::load_from(&path);
        }

        let config = Self::default();
        if let Err(e) = config.save_to(&path) {
            tracing::debug!("Could not write default config to {}: {}", path.display(), e);
        }
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check engine limits and the log level.
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;
        if !LOG_LEVELS.contains(&self.settings.log_level.as_str()) {
            return Err(CliError::Config(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.settings.log_level
            )));
        }
        Ok(())
    }

    /// Load the candidate profile.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load_profile(&self) -> Result<Profile> {
        let Some(path) = &self.profile_path else {
            return Ok(sample_profile()?);
        };

        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let profile = if is_json {
            serde_json::from_str(&contents)?
        } else {
            toml::from_str(&contents)?
        };
        Ok(profile)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            log_level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_level() -> String {
    "warn".to_string()
}
