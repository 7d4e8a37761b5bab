//! Simulated document generation
//!
//! Stands in for a document store. Nothing is rendered; each request waits
//! the configured latency, registers the posting's folder and returns an
//! identifier of the form `cv-{millis}-{posting}` or `cover-{millis}-{posting}`.
//!
//! Folders follow `/Jobs/{category} – {company} – {posting id}/` and are
//! registered at most once, so retrying a generation never duplicates them.

use crate::config::{simulate_latency, SourceConfig};
use async_trait::async_trait;
use careerelite_domain::traits::{Clock, DocumentGenerator, SystemClock};
use careerelite_domain::{DocumentGenerationError, DocumentId, JobPosting, Profile};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Document generator that only records folder paths
#[derive(Clone)]
pub struct SimulatedDocumentGenerator {
    resume_latency: Duration,
    cover_letter_latency: Duration,
    clock: Arc<dyn Clock>,
    folders: Arc<Mutex<BTreeSet<String>>>,
    resume_outage: Option<String>,
    cover_letter_outage: Option<String>,
}

impl SimulatedDocumentGenerator {
    /// Generator with the configured latencies
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            resume_latency: config.resume_latency(),
            cover_letter_latency: config.cover_letter_latency(),
            clock: Arc::new(SystemClock),
            folders: Arc::new(Mutex::new(BTreeSet::new())),
            resume_outage: None,
            cover_letter_outage: None,
        }
    }

    /// Derive identifiers from `clock` instead of the wall clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Make every resume request fail with `reason`
    pub fn failing_resumes(mut self, reason: impl Into<String>) -> Self {
        self.resume_outage = Some(reason.into());
        self
    }

    /// Make every cover letter request fail with `reason`
    pub fn failing_cover_letters(mut self, reason: impl Into<String>) -> Self {
        self.cover_letter_outage = Some(reason.into());
        self
    }

    /// Folders created so far, sorted
    pub fn folders(&self) -> Vec<String> {
        self.folders
            .lock()
            .map(|folders| folders.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn register_folder(&self, posting: &JobPosting) -> Result<String, DocumentGenerationError> {
        let folder = posting.document_folder();
        let mut folders = self
            .folders
            .lock()
            .map_err(|_| DocumentGenerationError::Storage("folder registry poisoned".to_string()))?;
        if folders.insert(folder.clone()) {
            tracing::debug!("Created folder {}", folder);
        }
        Ok(folder)
    }

    fn document_id(&self, prefix: &str, posting: &JobPosting) -> DocumentId {
        DocumentId::new(format!(
            "{}-{}-{}",
            prefix,
            self.clock.now().timestamp_millis(),
            posting.id
        ))
    }
}

#[async_trait]
impl DocumentGenerator for SimulatedDocumentGenerator {
    async fn generate_resume(
        &self,
        profile: &Profile,
        posting: &JobPosting,
    ) -> Result<DocumentId, DocumentGenerationError> {
        tracing::info!(
            "Generating resume for {} ({} at {})",
            profile.name,
            posting.title,
            posting.company
        );
        simulate_latency(self.resume_latency).await;

        if let Some(reason) = &self.resume_outage {
            return Err(DocumentGenerationError::Resume {
                posting: posting.id.clone(),
                reason: reason.clone(),
            });
        }

        let folder = self.register_folder(posting)?;
        let id = self.document_id("cv", posting);
        tracing::debug!("Resume {} stored in {}", id, folder);
        Ok(id)
    }

    async fn generate_cover_letter(
        &self,
        profile: &Profile,
        posting: &JobPosting,
    ) -> Result<DocumentId, DocumentGenerationError> {
        tracing::info!(
            "Generating cover letter for {} ({} at {})",
            profile.name,
            posting.title,
            posting.company
        );
        simulate_latency(self.cover_letter_latency).await;

        if let Some(reason) = &self.cover_letter_outage {
            return Err(DocumentGenerationError::CoverLetter {
                posting: posting.id.clone(),
                reason: reason.clone(),
            });
        }

        let folder = self.register_folder(posting)?;
        let id = self.document_id("cover", posting);
        tracing::debug!("Cover letter {} stored in {}", id, folder);
        Ok(id)
    }
}
