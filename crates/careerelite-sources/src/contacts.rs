//! Simulated contact discovery
//!
//! Produces placeholder people at the posting's employer. How many is decided
//! by a [`CountPicker`], random in production and fixed in tests.

use crate::config::{simulate_latency, SourceConfig};
use async_trait::async_trait;
use careerelite_domain::traits::ContactFinder;
use careerelite_domain::{Contact, ContactLookupError, JobPosting, MAX_CONTACTS_PER_LOOKUP};
use std::time::Duration;
use uuid::Uuid;

/// Chooses how many contacts a lookup returns
pub trait CountPicker: Send + Sync {
    /// A count in `0..=max`
    fn pick(&self, max: u8) -> u8;
}

/// Uniformly random count, drawn from a v4 UUID's random bits
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCount;

impl CountPicker for RandomCount {
    fn pick(&self, max: u8) -> u8 {
        let bits = Uuid::new_v4().as_u128();
        (bits % (u128::from(max) + 1)) as u8
    }
}

/// Always the same count, clamped to the requested maximum
#[derive(Debug, Clone, Copy)]
pub struct FixedCount(pub u8);

impl CountPicker for FixedCount {
    fn pick(&self, max: u8) -> u8 {
        self.0.min(max)
    }
}

/// Contact finder returning placeholder contacts after a fixed latency
///
/// # Examples
///
/// ```
/// use careerelite_domain::traits::ContactFinder;
/// use careerelite_domain::{JobPosting, PostingId, PostingSource};
/// use careerelite_sources::{FixedCount, SimulatedContactFinder, SourceConfig};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let finder = SimulatedContactFinder::new(&SourceConfig::instant(), FixedCount(2));
/// let posting = JobPosting::new(
///     PostingId::new(PostingSource::LinkedIn, "2"),
///     "Operations Analyst",
///     "International Banking Group",
///     "Mumbai, India",
///     chrono::Utc::now(),
/// );
///
/// let contacts = finder.find_contacts(&posting, 5).await.unwrap();
/// assert_eq!(contacts[0].position, "Hiring Manager");
/// assert_eq!(contacts[1].position, "Operations Analyst at International Banking Group");
/// # }
/// ```
pub struct SimulatedContactFinder<P = RandomCount> {
    latency: Duration,
    picker: P,
}

impl SimulatedContactFinder<RandomCount> {
    /// Finder with a random contact count
    pub fn random(config: &SourceConfig) -> Self {
        Self::new(config, RandomCount)
    }
}

impl<P: CountPicker> SimulatedContactFinder<P> {
    /// Finder with the given count picker
    pub fn new(config: &SourceConfig, picker: P) -> Self {
        Self {
            latency: config.contacts_latency(),
            picker,
        }
    }
}

#[async_trait]
impl<P: CountPicker> ContactFinder for SimulatedContactFinder<P> {
    async fn find_contacts(
        &self,
        posting: &JobPosting,
        max: u8,
    ) -> Result<Vec<Contact>, ContactLookupError> {
        if max > MAX_CONTACTS_PER_LOOKUP {
            return Err(ContactLookupError::LimitExceeded {
                requested: max,
                max: MAX_CONTACTS_PER_LOOKUP,
            });
        }

        tracing::debug!("Finding up to {} contacts at {}", max, posting.company);
        simulate_latency(self.latency).await;

        let count = self.picker.pick(max).min(max);
        let contacts: Vec<Contact> = (1..=count)
            .map(|n| Contact {
                name: format!("Contact Person {}", n),
                position: if n == 1 {
                    "Hiring Manager".to_string()
                } else {
                    format!("{} at {}", posting.title, posting.company)
                },
                company: posting.company.clone(),
                profile_url: format!("https://linkedin.com/in/contact-{}", n),
            })
            .collect();

        tracing::debug!("Found {} contacts at {}", contacts.len(), posting.company);
        Ok(contacts)
    }
}
