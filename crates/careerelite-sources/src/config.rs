//! Configuration for the simulated collaborators
//!
//! Every adapter in this crate stands in for a remote service and waits a
//! fixed latency before answering. The latencies are configurable so tests
//! and demos can run without waiting.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulated latencies, in milliseconds
///
/// # Examples
///
/// ```
/// use careerelite_sources::SourceConfig;
/// use std::time::Duration;
///
/// let config = SourceConfig::default();
/// assert_eq!(config.linkedin_latency(), Duration::from_millis(1000));
///
/// // No waiting at all
/// let config = SourceConfig::instant();
/// assert_eq!(config.resume_latency(), Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// LinkedIn job search
    /// Default: 1000 ms
    #[serde(default = "default_linkedin_ms")]
    pub linkedin_ms: u64,

    /// Naukrigulf job search
    /// Default: 1200 ms
    #[serde(default = "default_naukrigulf_ms")]
    pub naukrigulf_ms: u64,

    /// People search for contacts
    /// Default: 1800 ms
    #[serde(default = "default_contacts_ms")]
    pub contacts_ms: u64,

    /// Resume generation
    /// Default: 2000 ms
    #[serde(default = "default_resume_ms")]
    pub resume_ms: u64,

    /// Cover letter generation
    /// Default: 1500 ms
    #[serde(default = "default_cover_letter_ms")]
    pub cover_letter_ms: u64,

    /// Profile and job matches sheet sync
    /// Default: 1500 ms
    #[serde(default = "default_sheet_sync_ms")]
    pub sheet_sync_ms: u64,

    /// Single application row sync
    /// Default: 1000 ms
    #[serde(default = "default_application_sync_ms")]
    pub application_sync_ms: u64,
}

fn default_linkedin_ms() -> u64 {
    1000
}

fn default_naukrigulf_ms() -> u64 {
    1200
}

fn default_contacts_ms() -> u64 {
    1800
}

fn default_resume_ms() -> u64 {
    2000
}

fn default_cover_letter_ms() -> u64 {
    1500
}

fn default_sheet_sync_ms() -> u64 {
    1500
}

fn default_application_sync_ms() -> u64 {
    1000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            linkedin_ms: default_linkedin_ms(),
            naukrigulf_ms: default_naukrigulf_ms(),
            contacts_ms: default_contacts_ms(),
            resume_ms: default_resume_ms(),
            cover_letter_ms: default_cover_letter_ms(),
            sheet_sync_ms: default_sheet_sync_ms(),
            application_sync_ms: default_application_sync_ms(),
        }
    }
}

impl SourceConfig {
    /// All latencies zero
    pub fn instant() -> Self {
        Self {
            linkedin_ms: 0,
            naukrigulf_ms: 0,
            contacts_ms: 0,
            resume_ms: 0,
            cover_letter_ms: 0,
            sheet_sync_ms: 0,
            application_sync_ms: 0,
        }
    }

    /// LinkedIn search latency
    pub fn linkedin_latency(&self) -> Duration {
        Duration::from_millis(self.linkedin_ms)
    }

    /// Naukrigulf search latency
    pub fn naukrigulf_latency(&self) -> Duration {
        Duration::from_millis(self.naukrigulf_ms)
    }

    /// Contact lookup latency
    pub fn contacts_latency(&self) -> Duration {
        Duration::from_millis(self.contacts_ms)
    }

    /// Resume generation latency
    pub fn resume_latency(&self) -> Duration {
        Duration::from_millis(self.resume_ms)
    }

    /// Cover letter generation latency
    pub fn cover_letter_latency(&self) -> Duration {
        Duration::from_millis(self.cover_letter_ms)
    }

    /// Bulk sheet sync latency
    pub fn sheet_sync_latency(&self) -> Duration {
        Duration::from_millis(self.sheet_sync_ms)
    }

    /// Application row sync latency
    pub fn application_sync_latency(&self) -> Duration {
        Duration::from_millis(self.application_sync_ms)
    }
}

/// Sleep for `latency`, skipping the timer entirely when it is zero
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
