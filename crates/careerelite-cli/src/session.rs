//! Wiring of sources, collaborators and the scheduler for one CLI invocation.
//!
//! The tracked job set lives in memory, so every command that looks at
//! postings starts with a fresh scrape.

use crate::error::Result;
use careerelite_domain::traits::{ContactFinder, SheetSync, SystemClock};
use careerelite_domain::Profile;
use careerelite_engine::{Acquisition, EngineConfig, JobTracker, ScrapeReport, ScrapeScheduler};
use careerelite_sources::{
    FixtureSource, LoggingSheetSync, SimulatedContactFinder, SimulatedDocumentGenerator, SourceConfig,
};
use std::sync::Arc;

const SHEET_NAME: &str = "CareerElite Job Tracker";

/// A profile plus a scheduler over the simulated collaborators.
pub struct Session {
    scheduler: ScrapeScheduler,
    profile: Profile,
    sheet: Option<Arc<dyn SheetSync>>,
}

impl Session {
    /// Session with random contact counts.
    pub fn open(engine: &EngineConfig, sources: &SourceConfig, profile: Profile) -> Result<Self> {
        Self::open_with(
            engine,
            sources,
            Arc::new(SimulatedContactFinder::random(sources)),
            profile,
        )
    }

    /// Session with a specific contact finder.
    pub fn open_with(
        engine: &EngineConfig,
        sources: &SourceConfig,
        contact_finder: Arc<dyn ContactFinder>,
        profile: Profile,
    ) -> Result<Self> {
        let sheet: Option<Arc<dyn SheetSync>> = engine
            .sync_to_sheet
            .then(|| Arc::new(LoggingSheetSync::new(SHEET_NAME, sources)) as Arc<dyn SheetSync>);

        let mut tracker = JobTracker::new(
            contact_finder,
            Arc::new(SimulatedDocumentGenerator::new(sources)),
        )
        .with_max_contacts(engine.max_contacts);
        let mut acquisition = Acquisition::new(FixtureSource::all(sources));
        if let Some(sheet) = &sheet {
            tracker = tracker.with_sheet_sync(Arc::clone(sheet));
            acquisition = acquisition.with_sheet_sync(Arc::clone(sheet));
        }

        let scheduler = ScrapeScheduler::new(engine.clone(), acquisition, tracker, Arc::new(SystemClock))?;
        Ok(Self { scheduler, profile, sheet })
    }

    /// The candidate
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The scheduler and its tracked job set
    pub fn scheduler(&self) -> &ScrapeScheduler {
        &self.scheduler
    }

    /// Whether `apply` includes a cover letter unless told otherwise
    pub fn cover_letter_by_default(&self) -> bool {
        self.scheduler.config().generate_cover_letter
    }

    /// Scrape now and merge into the tracked set
    pub async fn refresh(&self) -> Result<ScrapeReport> {
        Ok(self.scheduler.trigger_now(&self.profile).await?)
    }

    /// Mirror the profile to the spreadsheet, if enabled
    pub async fn sync_profile(&self) {
        if let Some(sheet) = &self.sheet {
            if let Err(e) = sheet.sync_profile(&self.profile).await {
                tracing::warn!("Profile sync failed: {}", e);
            }
        }
    }
}
