//! Error types for engine operations

use careerelite_domain::{DocumentGenerationError, PostingId};
use thiserror::Error;

/// Errors that can occur during engine operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No tracked posting has this id
    #[error("Unknown posting: {0}")]
    UnknownPosting(PostingId),

    /// Resume or cover letter generation failed; the posting is not marked applied
    #[error("Application failed: {0}")]
    Document(#[from] DocumentGenerationError),

    /// A scrape was requested while another was still running
    #[error("A scrape is already in progress")]
    ScrapeInProgress,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
