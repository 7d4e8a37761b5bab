//! Error types for profile invariants and external collaborators
//!
//! Collaborator errors are split by how the engine treats them: source
//! fetches, contact lookups and sheet syncs are fail-soft, document
//! generation is fatal to the apply attempt that triggered it.

use crate::posting::{PostingId, PostingSource};
use thiserror::Error;

/// Violations of the profile data invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// Skill was empty or whitespace only
    #[error("Skill must not be blank")]
    BlankSkill,

    /// Skill already present (exact, case-sensitive match)
    #[error("Duplicate skill: {0}")]
    DuplicateSkill(String),

    /// Period string was not `YYYY-MM`
    #[error("Invalid period '{0}': expected YYYY-MM")]
    InvalidPeriod(String),

    /// Experience ends before it starts
    #[error("Experience ends ({end}) before it starts ({start})")]
    EndBeforeStart {
        /// Start period
        start: String,
        /// End period
        end: String,
    },
}

/// A single acquisition source failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceFetchError {
    /// The source could not be reached or refused the request
    #[error("{origin} unavailable: {reason}")]
    Unavailable {
        /// Which source failed
        origin: PostingSource,
        /// Human readable cause
        reason: String,
    },
}

impl SourceFetchError {
    /// The source that produced this error
    pub fn posting_source(&self) -> PostingSource {
        match self {
            SourceFetchError::Unavailable { origin, .. } => *origin,
        }
    }
}

/// Contact discovery failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactLookupError {
    /// People search backend unavailable
    #[error("Contact lookup unavailable: {0}")]
    Unavailable(String),

    /// Requested more contacts than a lookup may return
    #[error("Requested {requested} contacts, at most {max} allowed")]
    LimitExceeded {
        /// Requested count
        requested: u8,
        /// Allowed maximum
        max: u8,
    },
}

/// Resume or cover letter generation failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentGenerationError {
    /// Resume could not be produced
    #[error("Resume generation failed for {posting}: {reason}")]
    Resume {
        /// Posting the resume was tailored to
        posting: PostingId,
        /// Human readable cause
        reason: String,
    },

    /// Cover letter could not be produced
    #[error("Cover letter generation failed for {posting}: {reason}")]
    CoverLetter {
        /// Posting the letter was written for
        posting: PostingId,
        /// Human readable cause
        reason: String,
    },

    /// Document store rejected the write
    #[error("Document storage error: {0}")]
    Storage(String),
}

/// Spreadsheet synchronisation failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Sheet sync failed: {0}")]
pub struct SheetSyncError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_reports_origin() {
        let err = SourceFetchError::Unavailable {
            origin: PostingSource::Naukrigulf,
            reason: "timeout".to_string(),
        };
        assert_eq!(err.posting_source(), PostingSource::Naukrigulf);
        assert_eq!(err.to_string(), "Naukrigulf unavailable: timeout");
    }

    #[test]
    fn test_document_error_message() {
        let err = DocumentGenerationError::Resume {
            posting: PostingId::new(PostingSource::LinkedIn, "7"),
            reason: "template missing".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Resume generation failed for li-7: template missing"
        );
    }
}
