//! Placeholder spreadsheet sync
//!
//! No spreadsheet API is called. Each sync logs what would be written, waits
//! the configured latency and keeps the rows so callers can be verified.

use crate::config::{simulate_latency, SourceConfig};
use async_trait::async_trait;
use careerelite_domain::traits::SheetSync;
use careerelite_domain::{ApplicationDocuments, JobPosting, PostingId, Profile, SheetSyncError};
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Rows written so far, per sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetCounters {
    /// Profile syncs
    pub profiles: usize,
    /// Job match rows, summed across syncs
    pub job_matches: usize,
    /// Application rows
    pub applications: usize,
}

/// One row of the applications sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRow {
    /// Posting applied to
    pub posting: PostingId,
    /// When the application was recorded
    pub applied_at: DateTime<Utc>,
    /// Documents sent with it
    pub documents: ApplicationDocuments,
}

/// Sheet sync that only logs
#[derive(Debug, Clone)]
pub struct LoggingSheetSync {
    sheet: String,
    bulk_latency: Duration,
    row_latency: Duration,
    outage: Option<String>,
    counters: Arc<Mutex<SheetCounters>>,
    applications: Arc<Mutex<Vec<ApplicationRow>>>,
}

impl LoggingSheetSync {
    /// Sync against the named sheet with the configured latencies
    pub fn new(sheet: impl Into<String>, config: &SourceConfig) -> Self {
        Self {
            sheet: sheet.into(),
            bulk_latency: config.sheet_sync_latency(),
            row_latency: config.application_sync_latency(),
            outage: None,
            counters: Arc::new(Mutex::new(SheetCounters::default())),
            applications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every sync fail with `reason`
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.outage = Some(reason.into());
        self
    }

    /// Snapshot of the row counters
    pub fn counters(&self) -> SheetCounters {
        self.counters.lock().map(|c| *c).unwrap_or_default()
    }

    /// Application rows written so far, oldest first
    pub fn applications(&self) -> Vec<ApplicationRow> {
        self.applications.lock().map(|rows| rows.clone()).unwrap_or_default()
    }

    fn check_outage(&self) -> Result<(), SheetSyncError> {
        match &self.outage {
            Some(reason) => Err(SheetSyncError(reason.clone())),
            None => Ok(()),
        }
    }

    fn record(&self, update: impl FnOnce(&mut SheetCounters)) -> Result<(), SheetSyncError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|_| SheetSyncError("sheet counters poisoned".to_string()))?;
        update(&mut counters);
        Ok(())
    }
}

#[async_trait]
impl SheetSync for LoggingSheetSync {
    async fn sync_profile(&self, profile: &Profile) -> Result<(), SheetSyncError> {
        tracing::info!("Syncing profile of {} to sheet {}", profile.name, self.sheet);
        simulate_latency(self.bulk_latency).await;
        self.check_outage()?;
        self.record(|c| c.profiles += 1)
    }

    async fn sync_job_matches(&self, postings: &[JobPosting]) -> Result<(), SheetSyncError> {
        tracing::info!("Syncing {} job matches to sheet {}", postings.len(), self.sheet);
        simulate_latency(self.bulk_latency).await;
        self.check_outage()?;
        self.record(|c| c.job_matches += postings.len())
    }

    async fn sync_application(
        &self,
        posting: &JobPosting,
        applied_at: DateTime<Utc>,
        documents: &ApplicationDocuments,
    ) -> Result<(), SheetSyncError> {
        let cover_letter = documents
            .cover_letter_id
            .as_ref()
            .map_or("none", |id| id.as_str());
        tracing::info!(
            "Syncing application to {} ({}) on {} to sheet {} (resume {}, cover letter {})",
            posting.company,
            posting.id,
            applied_at.to_rfc3339(),
            self.sheet,
            documents.resume_id,
            cover_letter
        );
        simulate_latency(self.row_latency).await;
        self.check_outage()?;

        self.applications
            .lock()
            .map_err(|_| SheetSyncError("application rows poisoned".to_string()))?
            .push(ApplicationRow {
                posting: posting.id.clone(),
                applied_at,
                documents: documents.clone(),
            });
        self.record(|c| c.applications += 1)
    }
}
