//! Configuration for the engine
//!
//! Scrape schedule, contact lookup bound and apply behaviour.

use crate::error::EngineError;
use careerelite_domain::MAX_CONTACTS_PER_LOOKUP;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest allowed scrape interval, in hours
pub const MIN_SCRAPE_INTERVAL_HOURS: u64 = 1;

/// Longest allowed scrape interval, in hours
pub const MAX_SCRAPE_INTERVAL_HOURS: u64 = 24;

/// What to do with a scrape requested while another is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Manual triggers fail with [`EngineError::ScrapeInProgress`]
    #[default]
    Reject,
    /// Manual triggers return an empty, skipped report
    Skip,
}

/// Configuration for the engine
///
/// # Examples
///
/// ```
/// use careerelite_engine::EngineConfig;
/// use std::time::Duration;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.scrape_interval(), Duration::from_secs(6 * 3600));
/// assert_eq!(config.max_contacts, 5);
///
/// let config = EngineConfig::from_toml("scrape_interval_hours = 12").unwrap();
/// assert_eq!(config.scrape_interval_hours, 12);
/// assert!(config.generate_cover_letter);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How often the scheduler scrapes (in hours, 1-24)
    /// Default: 6
    #[serde(default = "default_scrape_interval_hours")]
    pub scrape_interval_hours: u64,

    /// Contacts requested per lookup (0-5)
    /// Default: 5
    #[serde(default = "default_max_contacts")]
    pub max_contacts: u8,

    /// Generate a cover letter alongside the resume when applying
    /// Default: true
    #[serde(default = "default_true")]
    pub generate_cover_letter: bool,

    /// Behaviour of overlapping scrape requests
    /// Default: reject
    #[serde(default)]
    pub overlap_policy: OverlapPolicy,

    /// Mirror scrape results and applications to the spreadsheet
    /// Default: true
    #[serde(default = "default_true")]
    pub sync_to_sheet: bool,
}

fn default_scrape_interval_hours() -> u64 {
    6
}

fn default_max_contacts() -> u8 {
    MAX_CONTACTS_PER_LOOKUP
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scrape_interval_hours: default_scrape_interval_hours(),
            max_contacts: default_max_contacts(),
            generate_cover_letter: true,
            overlap_policy: OverlapPolicy::Reject,
            sync_to_sheet: true,
        }
    }
}

impl EngineConfig {
    /// Get scrape interval as Duration
    pub fn scrape_interval(&self) -> Duration {
        Duration::from_secs(self.scrape_interval_hours * 3600)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_SCRAPE_INTERVAL_HOURS..=MAX_SCRAPE_INTERVAL_HOURS).contains(&self.scrape_interval_hours) {
            return Err(EngineError::Config(format!(
                "scrape_interval_hours must be between {} and {}, got {}",
                MIN_SCRAPE_INTERVAL_HOURS, MAX_SCRAPE_INTERVAL_HOURS, self.scrape_interval_hours
            )));
        }
        if self.max_contacts > MAX_CONTACTS_PER_LOOKUP {
            return Err(EngineError::Config(format!(
                "max_contacts must be at most {}, got {}",
                MAX_CONTACTS_PER_LOOKUP, self.max_contacts
            )));
        }
        Ok(())
    }

    /// Parse and validate from TOML
    pub fn from_toml(s: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(s).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, EngineError> {
        toml::to_string_pretty(self).map_err(|e| EngineError::Config(e.to_string()))
    }
}
