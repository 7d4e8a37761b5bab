//! CareerElite Sources
//!
//! Simulated implementations of the collaborator traits from
//! `careerelite_domain::traits`.
//!
//! # Adapters
//!
//! - [`FixtureSource`]: LinkedIn and Naukrigulf boards backed by sample postings
//! - [`ScriptedSource`]: deterministic in-memory source for testing
//! - [`SimulatedContactFinder`]: placeholder contacts, count chosen by a [`CountPicker`]
//! - [`SimulatedDocumentGenerator`]: document ids and the per-posting folder registry
//! - [`LoggingSheetSync`]: spreadsheet sync that only logs
//!
//! Every adapter waits a configurable latency ([`SourceConfig`]) before
//! answering. [`SourceConfig::instant`] removes the waits.
//!
//! # Examples
//!
//! ```
//! use careerelite_domain::{extract_keywords, rank};
//! use careerelite_domain::traits::JobSource;
//! use careerelite_sources::{sample_profile, FixtureSource, SourceConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let profile = sample_profile().unwrap();
//! let keywords = extract_keywords(&profile);
//!
//! let mut postings = Vec::new();
//! for source in FixtureSource::all(&SourceConfig::instant()) {
//!     postings.extend(source.fetch(&keywords).await.unwrap());
//! }
//!
//! let ranked = rank(postings, &profile);
//! assert_eq!(ranked[0].id.to_string(), "li-1");
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod contacts;
mod documents;
mod fixtures;
mod sample;
mod scripted;
mod sheet;

pub use config::SourceConfig;
pub use contacts::{CountPicker, FixedCount, RandomCount, SimulatedContactFinder};
pub use documents::SimulatedDocumentGenerator;
pub use fixtures::FixtureSource;
pub use sample::sample_profile;
pub use scripted::ScriptedSource;
pub use sheet::{ApplicationRow, LoggingSheetSync, SheetCounters};
