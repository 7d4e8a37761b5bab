//! CareerElite Engine
//!
//! Acquisition, the tracked job set and the scrape scheduler.
//!
//! # Overview
//!
//! - **Acquisition**: searches every job source with keywords derived from
//!   the profile, concatenates results in source order, scores and ranks them.
//!   A failing source is logged and skipped.
//! - **Tracker**: the in-memory set of postings. Merges scrape results without
//!   duplicates, tracks status, looks up contacts lazily and runs the apply
//!   workflow.
//! - **Scheduler**: runs acquisition every few hours, starting immediately,
//!   and on demand. At most one scrape is in flight.
//!
//! # Usage
//!
//! ## One-time Scrape
//!
//! ```
//! use careerelite_engine::Acquisition;
//! use careerelite_sources::{sample_profile, FixtureSource, SourceConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let acquisition = Acquisition::new(FixtureSource::all(&SourceConfig::instant()));
//! let ranked = acquisition.acquire(&sample_profile().unwrap()).await.into_postings();
//!
//! for posting in &ranked {
//!     println!("{:>3}  {} at {}", posting.match_score, posting.title, posting.company);
//! }
//! # }
//! ```
//!
//! ## Background Scheduler
//!
//! ```no_run
//! use careerelite_domain::traits::SystemClock;
//! use careerelite_engine::{Acquisition, EngineConfig, JobTracker, ScrapeEvent, ScrapeScheduler};
//! use careerelite_sources::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SourceConfig::default();
//!     let tracker = JobTracker::new(
//!         Arc::new(SimulatedContactFinder::random(&config)),
//!         Arc::new(SimulatedDocumentGenerator::new(&config)),
//!     );
//!     let scheduler = ScrapeScheduler::new(
//!         EngineConfig::default(),
//!         Acquisition::new(FixtureSource::all(&config)),
//!         tracker,
//!         Arc::new(SystemClock),
//!     )?;
//!
//!     let mut events = scheduler.subscribe();
//!     scheduler.start(sample_profile()?);
//!
//!     while let Ok(ScrapeEvent::Completed(report)) = events.recv().await {
//!         println!("{} new postings", report.added);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [engine]
//! scrape_interval_hours = 6
//! max_contacts = 5
//! generate_cover_letter = true
//! overlap_policy = "reject"
//! sync_to_sheet = true
//! ```

#![warn(missing_docs)]

mod acquisition;
mod config;
mod error;
mod metrics;
mod scheduler;
mod tracker;

pub use acquisition::{Acquisition, AcquisitionOutcome};
pub use config::{EngineConfig, OverlapPolicy, MAX_SCRAPE_INTERVAL_HOURS, MIN_SCRAPE_INTERVAL_HOURS};
pub use error::{EngineError, Result};
pub use metrics::ScrapeMetrics;
pub use scheduler::{ScrapeEvent, ScrapeReport, ScrapeScheduler, SchedulerStatus, Trigger};
pub use tracker::{ApplicationReceipt, JobTracker, MergeSummary};
