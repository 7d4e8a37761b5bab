//! Posting module - job listings, their contacts and lifecycle status

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on contacts returned by a single lookup
pub const MAX_CONTACTS_PER_LOOKUP: u8 = 5;

/// The two recognized origins of postings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PostingSource {
    /// linkedin.com job search
    LinkedIn,
    /// naukrigulf.com job search
    Naukrigulf,
}

impl PostingSource {
    /// Every recognized source, in acquisition order
    pub const ALL: [PostingSource; 2] = [PostingSource::LinkedIn, PostingSource::Naukrigulf];

    /// Display name
    pub fn as_str(&self) -> &'static str {
        match self {
            PostingSource::LinkedIn => "LinkedIn",
            PostingSource::Naukrigulf => "Naukrigulf",
        }
    }

    /// Short prefix used to qualify posting identifiers
    pub fn prefix(&self) -> &'static str {
        match self {
            PostingSource::LinkedIn => "li",
            PostingSource::Naukrigulf => "ng",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.prefix() == prefix)
    }
}

impl FromStr for PostingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linkedin" | "li" => Ok(PostingSource::LinkedIn),
            "naukrigulf" | "ng" => Ok(PostingSource::Naukrigulf),
            _ => Err(format!("Invalid source: {}", s)),
        }
    }
}

impl fmt::Display for PostingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source-qualified posting identifier, written `{prefix}-{key}` (e.g. `li-1`)
///
/// # Examples
///
/// ```
/// use careerelite_domain::{PostingId, PostingSource};
///
/// let id = PostingId::new(PostingSource::Naukrigulf, "42");
/// assert_eq!(id.to_string(), "ng-42");
/// assert_eq!("ng-42".parse::<PostingId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostingId {
    source: PostingSource,
    key: String,
}

impl PostingId {
    /// Qualify a source-local key
    pub fn new(source: PostingSource, key: impl Into<String>) -> Self {
        Self {
            source,
            key: key.into(),
        }
    }

    /// Origin encoded in the identifier
    pub fn source(&self) -> PostingSource {
        self.source
    }

    /// Source-local part of the identifier
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for PostingId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, key) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid posting id '{}': expected <source>-<key>", s))?;
        let source = PostingSource::from_prefix(prefix)
            .ok_or_else(|| format!("Invalid posting id '{}': unknown source prefix", s))?;
        if key.is_empty() {
            return Err(format!("Invalid posting id '{}': empty key", s));
        }
        Ok(Self::new(source, key))
    }
}

impl TryFrom<String> for PostingId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PostingId> for String {
    fn from(value: PostingId) -> Self {
        value.to_string()
    }
}

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source.prefix(), self.key)
    }
}

/// Where a posting is in the candidate's pipeline
///
/// Transitions are user-driven. The engine itself only ever assigns `New`
/// at creation and `Applied` after a successful apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Freshly acquired, not yet opened
    #[default]
    New,
    /// Opened in the detail view
    Viewed,
    /// Application submitted
    Applied,
    /// Interview scheduled or held
    Interview,
    /// Offer received
    Offer,
    /// Application rejected
    Rejected,
    /// Offer accepted
    Accepted,
}

impl ApplicationStatus {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::Viewed => "viewed",
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Accepted => "accepted",
        }
    }

    /// Whether the posting has progressed past browsing into an application
    pub fn is_application(&self) -> bool {
        !matches!(self, ApplicationStatus::New | ApplicationStatus::Viewed)
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(ApplicationStatus::New),
            "viewed" => Ok(ApplicationStatus::Viewed),
            "applied" => Ok(ApplicationStatus::Applied),
            "interview" => Ok(ApplicationStatus::Interview),
            "offer" => Ok(ApplicationStatus::Offer),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "accepted" => Ok(ApplicationStatus::Accepted),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person at the posting's employer, surfaced for networking outreach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Full name
    pub name: String,
    /// Job title
    pub position: String,
    /// Employer
    pub company: String,
    /// External profile link
    pub profile_url: String,
}

/// Opaque identifier of a generated document in the external store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap a store-issued identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Documents generated for one application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDocuments {
    /// Tailored resume
    pub resume_id: DocumentId,
    /// Cover letter, when one was requested
    pub cover_letter_id: Option<DocumentId>,
}

/// A single job listing
///
/// Contacts are owned by exactly one posting and never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Unique, source-qualified identifier
    pub id: PostingId,
    /// Job title
    pub title: String,
    /// Hiring company
    pub company: String,
    /// Free text location, e.g. "Remote, India"
    pub location: String,
    /// Free text description
    pub description: String,
    /// Requirement lines
    pub requirements: Vec<String>,
    /// Canonical URL
    pub url: String,
    /// When the posting was published
    pub posted_at: DateTime<Utc>,
    /// Heuristic fit, 0-100; 0 until scored
    pub match_score: u8,
    /// Category label, e.g. "ESG/Climate"
    pub category: String,
    /// Networking contacts at the employer
    pub contacts: Vec<Contact>,
    /// Lifecycle status
    pub status: ApplicationStatus,
    /// Acquired by the pipeline (`true`) or manually seeded (`false`)
    pub scraped: bool,
}

impl JobPosting {
    /// Create an unscored, `New` posting acquired by the pipeline
    pub fn new(
        id: PostingId,
        title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
        posted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company: company.into(),
            location: location.into(),
            description: String::new(),
            requirements: Vec::new(),
            url: String::new(),
            posted_at,
            match_score: 0,
            category: String::new(),
            contacts: Vec::new(),
            status: ApplicationStatus::New,
            scraped: true,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach requirement lines
    pub fn with_requirements<I, S>(mut self, requirements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requirements = requirements.into_iter().map(Into::into).collect();
        self
    }

    /// Attach the canonical URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Attach a category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Mark as manually seeded rather than acquired
    pub fn seeded(mut self) -> Self {
        self.scraped = false;
        self
    }

    /// Origin of the posting
    pub fn source(&self) -> PostingSource {
        self.id.source()
    }

    /// Folder generated documents for this posting are stored under
    ///
    /// Grouped by category, then company, then posting id.
    pub fn document_folder(&self) -> String {
        format!("/Jobs/{} – {} – {}/", self.category, self.company, self.id)
    }
}
