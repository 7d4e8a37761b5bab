//! Acquisition pipeline
//!
//! Keywords from the profile, one search per source, concatenation in source
//! order, scoring, stable ranking. A failing source contributes nothing and
//! does not stop the others.

use careerelite_domain::traits::{JobSource, SheetSync};
use careerelite_domain::{extract_keywords, rank, JobPosting, PostingSource, Profile, SourceFetchError};
use futures::future::join_all;
use std::sync::Arc;

/// Result of one acquisition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquisitionOutcome {
    /// Scored postings, highest score first
    pub postings: Vec<JobPosting>,
    /// Keywords the sources were searched with
    pub keywords: Vec<String>,
    /// Postings returned per successful source, in source order
    pub fetched: Vec<(PostingSource, usize)>,
    /// Sources that failed
    pub failures: Vec<SourceFetchError>,
}

impl AcquisitionOutcome {
    /// Whether every source failed
    pub fn all_failed(&self) -> bool {
        self.fetched.is_empty() && !self.failures.is_empty()
    }

    /// The ranked postings
    pub fn into_postings(self) -> Vec<JobPosting> {
        self.postings
    }
}

/// Fetches postings from every configured source
///
/// # Examples
///
/// ```
/// use careerelite_engine::Acquisition;
/// use careerelite_sources::{sample_profile, FixtureSource, SourceConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let acquisition = Acquisition::new(FixtureSource::all(&SourceConfig::instant()));
/// let outcome = acquisition.acquire(&sample_profile().unwrap()).await;
///
/// assert_eq!(outcome.postings.len(), 4);
/// assert!(outcome.failures.is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct Acquisition {
    sources: Vec<Arc<dyn JobSource>>,
    sheet: Option<Arc<dyn SheetSync>>,
}

impl Acquisition {
    /// Pipeline over `sources`, searched and concatenated in this order
    pub fn new(sources: Vec<Arc<dyn JobSource>>) -> Self {
        Self { sources, sheet: None }
    }

    /// Mirror each ranked result to a spreadsheet
    pub fn with_sheet_sync(mut self, sheet: Arc<dyn SheetSync>) -> Self {
        self.sheet = Some(sheet);
        self
    }

    /// Sources in acquisition order
    pub fn sources(&self) -> Vec<PostingSource> {
        self.sources.iter().map(|s| s.source()).collect()
    }

    /// Search one source
    pub async fn fetch_from_source(
        source: &dyn JobSource,
        keywords: &[String],
    ) -> Result<Vec<JobPosting>, SourceFetchError> {
        let postings = source.fetch(keywords).await?;
        tracing::debug!("{} returned {} postings", source.source(), postings.len());
        Ok(postings)
    }

    /// Acquire, score and rank postings for `profile`
    ///
    /// Sources are searched concurrently; results are still concatenated in
    /// source order before the stable sort, so equal scores keep that order.
    pub async fn acquire(&self, profile: &Profile) -> AcquisitionOutcome {
        let keywords = extract_keywords(profile);
        tracing::debug!("Using search keywords: {:?}", keywords);

        let results = join_all(
            self.sources
                .iter()
                .map(|source| Self::fetch_from_source(source.as_ref(), &keywords)),
        )
        .await;

        let mut outcome = AcquisitionOutcome::default();
        let mut postings = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(found) => {
                    outcome.fetched.push((source.source(), found.len()));
                    postings.extend(found);
                }
                Err(e) => {
                    tracing::warn!("Fetch from {} failed: {}", source.source(), e);
                    outcome.failures.push(e);
                }
            }
        }

        outcome.postings = rank(postings, profile);
        outcome.keywords = keywords;

        if let Some(sheet) = &self.sheet {
            if let Err(e) = sheet.sync_job_matches(&outcome.postings).await {
                tracing::warn!("Job matches sync failed: {}", e);
            }
        }

        tracing::info!(
            "Acquired {} postings ({} sources failed)",
            outcome.postings.len(),
            outcome.failures.len()
        );
        outcome
    }
}
