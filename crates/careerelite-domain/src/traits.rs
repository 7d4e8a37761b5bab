//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the outside
//! world. Implementations live in `careerelite-sources`; the engine only ever
//! holds them as `Arc<dyn ...>`.

use crate::error::{ContactLookupError, DocumentGenerationError, SheetSyncError, SourceFetchError};
use crate::posting::{ApplicationDocuments, Contact, DocumentId, JobPosting, PostingSource};
use crate::profile::Profile;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A job board that can be searched for postings
///
/// Returned postings are unscored (`match_score == 0`), have status `New`,
/// and carry ids qualified with [`JobSource::source`].
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Which board this is
    fn source(&self) -> PostingSource;

    /// Search the board with the given keywords
    async fn fetch(&self, keywords: &[String]) -> Result<Vec<JobPosting>, SourceFetchError>;
}

/// People search at a posting's employer
#[async_trait]
pub trait ContactFinder: Send + Sync {
    /// Find at most `max` contacts for `posting`
    ///
    /// `max` above [`crate::MAX_CONTACTS_PER_LOOKUP`] is rejected with
    /// [`ContactLookupError::LimitExceeded`].
    async fn find_contacts(
        &self,
        posting: &JobPosting,
        max: u8,
    ) -> Result<Vec<Contact>, ContactLookupError>;
}

/// Tailored document generation backed by an external document store
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Generate a resume tailored to `posting`
    async fn generate_resume(
        &self,
        profile: &Profile,
        posting: &JobPosting,
    ) -> Result<DocumentId, DocumentGenerationError>;

    /// Generate a cover letter tailored to `posting`
    async fn generate_cover_letter(
        &self,
        profile: &Profile,
        posting: &JobPosting,
    ) -> Result<DocumentId, DocumentGenerationError>;
}

/// Mirror of dashboard data into an external spreadsheet
#[async_trait]
pub trait SheetSync: Send + Sync {
    /// Replace the profile sheet
    async fn sync_profile(&self, profile: &Profile) -> Result<(), SheetSyncError>;

    /// Replace the job matches sheet
    async fn sync_job_matches(&self, postings: &[JobPosting]) -> Result<(), SheetSyncError>;

    /// Append one application row, with the documents sent
    async fn sync_application(
        &self,
        posting: &JobPosting,
        applied_at: DateTime<Utc>,
        documents: &ApplicationDocuments,
    ) -> Result<(), SheetSyncError>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
