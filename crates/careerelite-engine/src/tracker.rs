//! Tracked job set
//!
//! The in-memory set of postings the user works with: merged from scrape
//! results, filtered for display, and updated by status changes, contact
//! lookups and applications. Nothing is persisted.

use crate::error::{EngineError, Result};
use careerelite_domain::scoring::sort_by_score;
use careerelite_domain::traits::{Clock, ContactFinder, DocumentGenerator, SheetSync, SystemClock};
use careerelite_domain::{
    match_score, ApplicationDocuments, ApplicationStatus, Contact, DashboardStats, DocumentId,
    JobPosting, PostingFilter, PostingId, Profile, MAX_CONTACTS_PER_LOOKUP,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

/// How a batch of postings changed the tracked set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeSummary {
    /// Postings not seen before
    pub added: usize,
    /// Postings whose id was already tracked, dropped
    pub duplicates: usize,
}

/// Documents produced by a successful application
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReceipt {
    /// Posting applied to
    pub posting: PostingId,
    /// Tailored resume
    pub resume_id: DocumentId,
    /// Cover letter, if one was requested
    pub cover_letter_id: Option<DocumentId>,
    /// Folder both documents live in
    pub folder: String,
    /// When the application was recorded
    pub applied_at: DateTime<Utc>,
}

/// In-memory set of postings, ordered by score
pub struct JobTracker {
    postings: Vec<JobPosting>,
    contact_finder: Arc<dyn ContactFinder>,
    documents: Arc<dyn DocumentGenerator>,
    sheet: Option<Arc<dyn SheetSync>>,
    clock: Arc<dyn Clock>,
    max_contacts: u8,
}

impl JobTracker {
    /// Empty tracker using the given collaborators
    pub fn new(contact_finder: Arc<dyn ContactFinder>, documents: Arc<dyn DocumentGenerator>) -> Self {
        Self {
            postings: Vec::new(),
            contact_finder,
            documents,
            sheet: None,
            clock: Arc::new(SystemClock),
            max_contacts: MAX_CONTACTS_PER_LOOKUP,
        }
    }

    /// Record applications in a spreadsheet
    pub fn with_sheet_sync(mut self, sheet: Arc<dyn SheetSync>) -> Self {
        self.sheet = Some(sheet);
        self
    }

    /// Timestamp applications with `clock`
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Contacts requested per lookup, capped at [`MAX_CONTACTS_PER_LOOKUP`]
    pub fn with_max_contacts(mut self, max: u8) -> Self {
        self.max_contacts = max.min(MAX_CONTACTS_PER_LOOKUP);
        self
    }

    /// Number of tracked postings
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Whether nothing is tracked yet
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Every tracked posting, highest score first
    pub fn all(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Look up a posting
    pub fn get(&self, id: &PostingId) -> Option<&JobPosting> {
        self.postings.iter().find(|p| &p.id == id)
    }

    fn get_mut(&mut self, id: &PostingId) -> Result<&mut JobPosting> {
        self.postings
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| EngineError::UnknownPosting(id.clone()))
    }

    /// Add unseen postings, dropping those whose id is already tracked
    ///
    /// Existing entries keep their status, contacts and score. The set stays
    /// sorted by score, stable, so new postings follow existing ones of equal
    /// score.
    pub fn merge(&mut self, postings: Vec<JobPosting>) -> MergeSummary {
        let mut seen: HashSet<PostingId> = self.postings.iter().map(|p| p.id.clone()).collect();
        let mut summary = MergeSummary::default();

        for posting in postings {
            if seen.insert(posting.id.clone()) {
                self.postings.push(posting);
                summary.added += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        sort_by_score(&mut self.postings);
        tracing::debug!(
            "Merged postings: {} added, {} duplicates",
            summary.added,
            summary.duplicates
        );
        summary
    }

    /// Filtered, ordered view
    pub fn list(&self, filter: &PostingFilter) -> Vec<JobPosting> {
        filter.apply(&self.postings)
    }

    /// Mark a posting as opened; only `new` postings change
    pub fn mark_viewed(&mut self, id: &PostingId) -> Result<ApplicationStatus> {
        let posting = self.get_mut(id)?;
        if posting.status == ApplicationStatus::New {
            posting.status = ApplicationStatus::Viewed;
        }
        Ok(posting.status)
    }

    /// Set a posting's status
    pub fn set_status(&mut self, id: &PostingId, status: ApplicationStatus) -> Result<()> {
        let posting = self.get_mut(id)?;
        tracing::debug!("Status of {}: {} -> {}", posting.id, posting.status, status);
        posting.status = status;
        Ok(())
    }

    /// Recompute every score, e.g. after a profile edit
    pub fn rescore(&mut self, profile: &Profile) {
        for posting in &mut self.postings {
            posting.match_score = match_score(posting, profile);
        }
        sort_by_score(&mut self.postings);
    }

    /// Postings with an application in any stage
    pub fn applications(&self) -> Vec<&JobPosting> {
        self.postings
            .iter()
            .filter(|p| p.status.is_application())
            .collect()
    }

    /// Dashboard totals
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_postings(&self.postings)
    }

    /// Contacts for a posting, looked up on first request
    ///
    /// A posting that already has contacts is answered without a lookup. A
    /// failed lookup yields an empty list, the same as finding nobody.
    pub async fn contacts_for(&mut self, id: &PostingId) -> Result<Vec<Contact>> {
        let max = self.max_contacts;
        let finder = Arc::clone(&self.contact_finder);
        let posting = self.get_mut(id)?;
        if !posting.contacts.is_empty() {
            return Ok(posting.contacts.clone());
        }

        match finder.find_contacts(posting, max).await {
            Ok(contacts) => {
                posting.contacts = contacts;
                Ok(posting.contacts.clone())
            }
            Err(e) => {
                tracing::warn!("Contact lookup for {} failed: {}", id, e);
                Ok(Vec::new())
            }
        }
    }

    /// Generate application documents and mark the posting applied
    ///
    /// # Errors
    ///
    /// [`EngineError::Document`] if either document fails; the status is
    /// left unchanged and the attempt can be retried.
    pub async fn apply(
        &mut self,
        id: &PostingId,
        profile: &Profile,
        with_cover_letter: bool,
    ) -> Result<ApplicationReceipt> {
        let documents = Arc::clone(&self.documents);
        let posting = self.get_mut(id)?.clone();

        let resume_id = documents.generate_resume(profile, &posting).await.map_err(|e| {
            tracing::error!("Resume generation for {} failed: {}", id, e);
            e
        })?;
        let cover_letter_id = if with_cover_letter {
            let letter = documents
                .generate_cover_letter(profile, &posting)
                .await
                .map_err(|e| {
                    tracing::error!("Cover letter generation for {} failed: {}", id, e);
                    e
                })?;
            Some(letter)
        } else {
            None
        };

        let applied_at = self.clock.now();
        let applied = self.get_mut(id)?;
        applied.status = ApplicationStatus::Applied;
        let applied = applied.clone();
        tracing::info!("Applied to {} at {}", applied.title, applied.company);

        let sent = ApplicationDocuments { resume_id, cover_letter_id };
        if let Some(sheet) = &self.sheet {
            if let Err(e) = sheet.sync_application(&applied, applied_at, &sent).await {
                tracing::warn!("Application sync for {} failed: {}", id, e);
            }
        }

        Ok(ApplicationReceipt {
            posting: applied.id.clone(),
            resume_id: sent.resume_id,
            cover_letter_id: sent.cover_letter_id,
            folder: applied.document_folder(),
            applied_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerelite_domain::PostingSource;
    use careerelite_sources::{
        FixedCount, LoggingSheetSync, SimulatedContactFinder, SimulatedDocumentGenerator, SourceConfig,
    };
    use chrono::TimeZone;

    fn posting(key: &str, score: u8) -> JobPosting {
        let mut p = JobPosting::new(
            PostingId::new(PostingSource::LinkedIn, key),
            format!("Manager {}", key),
            "Acme",
            "Remote",
            Utc.with_ymd_and_hms(2024, 4, 18, 10, 0, 0).unwrap(),
        )
        .with_category("Operations");
        p.match_score = score;
        p
    }

    fn id(key: &str) -> PostingId {
        PostingId::new(PostingSource::LinkedIn, key)
    }

    fn tracker() -> JobTracker {
        let config = SourceConfig::instant();
        JobTracker::new(
            Arc::new(SimulatedContactFinder::new(&config, FixedCount(2))),
            Arc::new(SimulatedDocumentGenerator::new(&config)),
        )
    }

    fn keys(postings: &[JobPosting]) -> Vec<&str> {
        postings.iter().map(|p| p.id.key()).collect()
    }

    #[test]
    fn test_merge_suppresses_duplicates() {
        let mut tracker = tracker();
        let summary = tracker.merge(vec![posting("1", 50), posting("2", 70)]);
        assert_eq!(summary, MergeSummary { added: 2, duplicates: 0 });

        tracker.set_status(&id("1"), ApplicationStatus::Interview).unwrap();

        // Re-scraped copy of "1" does not reset its status
        let summary = tracker.merge(vec![posting("1", 99), posting("3", 60), posting("3", 60)]);
        assert_eq!(summary, MergeSummary { added: 1, duplicates: 2 });
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.get(&id("1")).unwrap().status, ApplicationStatus::Interview);
        assert_eq!(tracker.get(&id("1")).unwrap().match_score, 50);
        assert_eq!(keys(tracker.all()), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_merge_is_stable_on_ties() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("b", 40)]);
        tracker.merge(vec![posting("a", 40), posting("c", 90)]);
        assert_eq!(keys(tracker.all()), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_mark_viewed_only_from_new() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("1", 10), posting("2", 10)]);

        assert_eq!(tracker.mark_viewed(&id("1")).unwrap(), ApplicationStatus::Viewed);

        tracker.set_status(&id("2"), ApplicationStatus::Applied).unwrap();
        assert_eq!(tracker.mark_viewed(&id("2")).unwrap(), ApplicationStatus::Applied);

        assert_eq!(
            tracker.mark_viewed(&id("404")),
            Err(EngineError::UnknownPosting(id("404")))
        );
    }

    #[test]
    fn test_rescore_after_profile_edit() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("1", 0), posting("2", 0)]);

        let mut profile = Profile::new("Ada", "ada@example.com");
        profile.job_preferences.roles = vec!["Manager 2".to_string()];
        tracker.rescore(&profile);

        assert_eq!(keys(tracker.all()), vec!["2", "1"]);
        assert_eq!(tracker.all()[0].match_score, 20);
    }

    #[test]
    fn test_applications_and_stats() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("1", 10), posting("2", 20), posting("3", 30)]);
        tracker.set_status(&id("1"), ApplicationStatus::Offer).unwrap();
        tracker.mark_viewed(&id("2")).unwrap();

        let applications = tracker.applications();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].id, id("1"));

        let stats = tracker.stats();
        assert_eq!(stats.total_jobs, 3);
        assert_eq!(stats.new_jobs, 1);
        assert_eq!(stats.offers, 1);
        assert_eq!(stats.jobs_by_source[&PostingSource::LinkedIn], 3);
    }

    #[tokio::test]
    async fn test_contacts_looked_up_once() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("1", 10)]);

        let contacts = tracker.contacts_for(&id("1")).await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(tracker.get(&id("1")).unwrap().contacts, contacts);

        assert_eq!(tracker.contacts_for(&id("1")).await.unwrap(), contacts);
    }

    #[tokio::test]
    async fn test_contacts_respect_configured_max() {
        let mut tracker = tracker().with_max_contacts(0);
        tracker.merge(vec![posting("1", 10)]);
        assert!(tracker.contacts_for(&id("1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_apply_marks_applied_and_syncs() {
        let config = SourceConfig::instant();
        let sheet = LoggingSheetSync::new("s", &config);
        let mut tracker = tracker().with_sheet_sync(Arc::new(sheet.clone()));
        tracker.merge(vec![posting("7", 10)]);

        let profile = Profile::new("Ada", "ada@example.com");
        let receipt = tracker.apply(&id("7"), &profile, true).await.unwrap();

        assert_eq!(tracker.get(&id("7")).unwrap().status, ApplicationStatus::Applied);
        assert!(receipt.resume_id.as_str().starts_with("cv-"));
        assert!(receipt.cover_letter_id.is_some());
        assert_eq!(receipt.folder, "/Jobs/Operations – Acme – li-7/");
        assert_eq!(sheet.counters().applications, 1);

        let rows = sheet.applications();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].posting, id("7"));
        assert_eq!(rows[0].applied_at, receipt.applied_at);
        assert_eq!(rows[0].documents.resume_id, receipt.resume_id);
        assert_eq!(rows[0].documents.cover_letter_id, receipt.cover_letter_id);
    }

    #[tokio::test]
    async fn test_apply_without_cover_letter() {
        let mut tracker = tracker();
        tracker.merge(vec![posting("7", 10)]);

        let receipt = tracker
            .apply(&id("7"), &Profile::new("Ada", "a@b.c"), false)
            .await
            .unwrap();
        assert!(receipt.cover_letter_id.is_none());
    }

    #[tokio::test]
    async fn test_failed_document_leaves_status() {
        let config = SourceConfig::instant();
        let mut tracker = JobTracker::new(
            Arc::new(SimulatedContactFinder::new(&config, FixedCount(0))),
            Arc::new(SimulatedDocumentGenerator::new(&config).failing_cover_letters("quota")),
        );
        tracker.merge(vec![posting("7", 10)]);
        tracker.mark_viewed(&id("7")).unwrap();

        let err = tracker
            .apply(&id("7"), &Profile::new("Ada", "a@b.c"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Document(_)));
        assert_eq!(tracker.get(&id("7")).unwrap().status, ApplicationStatus::Viewed);
    }

    #[tokio::test]
    async fn test_apply_unknown_posting() {
        let mut tracker = tracker();
        let err = tracker
            .apply(&id("1"), &Profile::new("Ada", "a@b.c"), true)
            .await
            .unwrap_err();
        assert_eq!(err, EngineError::UnknownPosting(id("1")));
    }
}
