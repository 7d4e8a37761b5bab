//! Fixture-backed job boards
//!
//! Neither board is actually contacted. Each search waits the configured
//! latency and returns the same sample postings, stamped with the current
//! time. A real HTTP client can replace these behind [`JobSource`] without
//! touching scoring or merge logic.

use crate::config::{simulate_latency, SourceConfig};
use async_trait::async_trait;
use careerelite_domain::traits::{Clock, JobSource, SystemClock};
use careerelite_domain::{JobPosting, PostingId, PostingSource, SourceFetchError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

struct Fixture {
    key: &'static str,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    requirements: [&'static str; 3],
    category: &'static str,
}

static LINKEDIN_FIXTURES: [Fixture; 2] = [
    Fixture {
        key: "1",
        title: "Project Manager - ESG Initiatives",
        company: "Global Sustainability Corp",
        location: "Remote, India",
        description: "Looking for a Project Manager to lead our ESG compliance initiatives...",
        requirements: ["Project management", "ESG knowledge", "Stakeholder engagement"],
        category: "ESG/Climate",
    },
    Fixture {
        key: "2",
        title: "Operations Analyst",
        company: "International Banking Group",
        location: "Mumbai, India",
        description: "Seeking an Operations Analyst to support our banking operations...",
        requirements: ["Banking operations", "Data analysis", "Excel"],
        category: "Operations",
    },
];

static NAUKRIGULF_FIXTURES: [Fixture; 2] = [
    Fixture {
        key: "1",
        title: "Process Design Engineer",
        company: "Engineering Solutions UAE",
        location: "Dubai, UAE",
        description: "Seeking a Process Design Engineer with chemical engineering background...",
        requirements: ["Chemical engineering", "Process design", "Engineering"],
        category: "Engineering",
    },
    Fixture {
        key: "2",
        title: "ESG Consultant",
        company: "Global Consulting Firm",
        location: "Remote",
        description: "Looking for an ESG Consultant to help clients with sustainability initiatives...",
        requirements: ["ESG", "Consulting", "Sustainability"],
        category: "ESG/Climate",
    },
];

/// A job board answering every search with its sample postings
///
/// # Examples
///
/// ```
/// use careerelite_domain::traits::JobSource;
/// use careerelite_domain::PostingSource;
/// use careerelite_sources::{FixtureSource, SourceConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = FixtureSource::naukrigulf(&SourceConfig::instant());
/// let postings = source.fetch(&["ESG".to_string()]).await.unwrap();
///
/// assert_eq!(source.source(), PostingSource::Naukrigulf);
/// assert_eq!(postings[1].id.to_string(), "ng-2");
/// # }
/// ```
pub struct FixtureSource {
    source: PostingSource,
    latency: Duration,
    clock: Arc<dyn Clock>,
}

impl FixtureSource {
    /// LinkedIn, with the configured search latency
    pub fn linkedin(config: &SourceConfig) -> Self {
        Self::new(PostingSource::LinkedIn, config.linkedin_latency())
    }

    /// Naukrigulf, with the configured search latency
    pub fn naukrigulf(config: &SourceConfig) -> Self {
        Self::new(PostingSource::Naukrigulf, config.naukrigulf_latency())
    }

    /// Both boards in acquisition order
    pub fn all(config: &SourceConfig) -> Vec<Arc<dyn JobSource>> {
        vec![
            Arc::new(Self::linkedin(config)),
            Arc::new(Self::naukrigulf(config)),
        ]
    }

    fn new(source: PostingSource, latency: Duration) -> Self {
        Self {
            source,
            latency,
            clock: Arc::new(SystemClock),
        }
    }

    /// Stamp postings with `clock` instead of the wall clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn fixtures(&self) -> &'static [Fixture] {
        match self.source {
            PostingSource::LinkedIn => &LINKEDIN_FIXTURES,
            PostingSource::Naukrigulf => &NAUKRIGULF_FIXTURES,
        }
    }

    fn posting(&self, fixture: &Fixture, posted_at: DateTime<Utc>) -> JobPosting {
        let id = PostingId::new(self.source, fixture.key);
        let url = match self.source {
            PostingSource::LinkedIn => format!("https://linkedin.com/jobs/view/{}", id),
            PostingSource::Naukrigulf => format!("https://naukrigulf.com/jobs/view/{}", id),
        };

        JobPosting::new(id, fixture.title, fixture.company, fixture.location, posted_at)
            .with_description(fixture.description)
            .with_requirements(fixture.requirements)
            .with_url(url)
            .with_category(fixture.category)
    }
}

#[async_trait]
impl JobSource for FixtureSource {
    fn source(&self) -> PostingSource {
        self.source
    }

    async fn fetch(&self, keywords: &[String]) -> Result<Vec<JobPosting>, SourceFetchError> {
        tracing::debug!("Searching {} for keywords: {:?}", self.source, keywords);
        simulate_latency(self.latency).await;

        let posted_at = self.clock.now();
        Ok(self
            .fixtures()
            .iter()
            .map(|fixture| self.posting(fixture, posted_at))
            .collect())
    }
}
