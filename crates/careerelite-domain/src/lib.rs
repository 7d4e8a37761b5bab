//! CareerElite Domain Layer
//!
//! Core data model and decision logic for the job-search assistant. Everything
//! in this crate is pure: no I/O, no timers, no network. Collaborators that
//! would talk to the outside world (job boards, people search, document
//! storage, spreadsheets) are described by the traits in [`traits`] and
//! implemented elsewhere.
//!
//! ## Key Concepts
//!
//! - **Profile**: the candidate, their skills, history and job preferences
//! - **Posting**: a single job listing acquired from one of two sources
//! - **Match score**: integer 0-100 summarizing heuristic fit
//! - **Keywords**: search terms derived from a profile for source queries
//!
//! ## Scoring
//!
//! ```
//! use careerelite_domain::{scoring, JobPosting, PostingId, PostingSource, Profile, RemotePreference};
//!
//! let mut profile = Profile::new("Ada", "ada@example.com");
//! profile.job_preferences.roles.push("Project Manager".to_string());
//! profile.job_preferences.remote_preference = RemotePreference::Remote;
//!
//! let posting = JobPosting::new(
//!     PostingId::new(PostingSource::LinkedIn, "1"),
//!     "Senior Project Manager - ESG",
//!     "Global Sustainability Corp",
//!     "Remote, India",
//!     chrono::Utc::now(),
//! );
//!
//! // 20 for the role, 15 for the remote preference
//! assert_eq!(scoring::match_score(&posting, &profile), 35);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod keywords;
pub mod listing;
pub mod period;
pub mod posting;
pub mod profile;
pub mod scoring;
pub mod traits;

// Re-exports for convenience
pub use error::{
    ContactLookupError, DocumentGenerationError, ProfileError, SheetSyncError, SourceFetchError,
};
pub use keywords::extract_keywords;
pub use listing::{DashboardStats, PostingFilter, SortOrder};
pub use period::YearMonth;
pub use posting::{
    ApplicationDocuments, ApplicationStatus, Contact, DocumentId, JobPosting, PostingId,
    PostingSource, MAX_CONTACTS_PER_LOOKUP,
};
pub use profile::{Education, Experience, JobPreferences, Profile, RemotePreference};
pub use scoring::{match_score, rank};
