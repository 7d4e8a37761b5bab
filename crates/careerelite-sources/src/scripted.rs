//! Scripted in-memory job source for deterministic testing

use async_trait::async_trait;
use careerelite_domain::traits::JobSource;
use careerelite_domain::{JobPosting, PostingSource, SourceFetchError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Job source returning pre-configured results without any network calls
///
/// Queued results are served first, one per fetch. Once the queue is empty
/// every fetch returns the default postings.
///
/// # Examples
///
/// ```
/// use careerelite_domain::traits::JobSource;
/// use careerelite_domain::PostingSource;
/// use careerelite_sources::ScriptedSource;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = ScriptedSource::new(PostingSource::LinkedIn, vec![]);
/// source.push_failure("rate limited");
///
/// assert!(source.fetch(&[]).await.is_err());
/// assert!(source.fetch(&[]).await.unwrap().is_empty());
/// assert_eq!(source.call_count(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    source: PostingSource,
    default_postings: Vec<JobPosting>,
    queued: Arc<Mutex<VecDeque<Result<Vec<JobPosting>, SourceFetchError>>>>,
    outage: Option<String>,
    delay: Duration,
    call_count: Arc<Mutex<usize>>,
    last_keywords: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSource {
    /// Source answering every fetch with `postings`
    pub fn new(source: PostingSource, postings: Vec<JobPosting>) -> Self {
        Self {
            source,
            default_postings: postings,
            queued: Arc::new(Mutex::new(VecDeque::new())),
            outage: None,
            delay: Duration::ZERO,
            call_count: Arc::new(Mutex::new(0)),
            last_keywords: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Source whose every fetch fails
    pub fn failing(source: PostingSource, reason: impl Into<String>) -> Self {
        Self {
            outage: Some(reason.into()),
            ..Self::new(source, Vec::new())
        }
    }

    /// Wait `delay` before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Queue a successful result for the next unanswered fetch
    pub fn push_postings(&self, postings: Vec<JobPosting>) {
        lock(&self.queued).push_back(Ok(postings));
    }

    /// Queue a failure for the next unanswered fetch
    pub fn push_failure(&self, reason: impl Into<String>) {
        lock(&self.queued).push_back(Err(SourceFetchError::Unavailable {
            origin: self.source,
            reason: reason.into(),
        }));
    }

    /// Number of fetches so far
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Keywords passed to the most recent fetch
    pub fn last_keywords(&self) -> Vec<String> {
        lock(&self.last_keywords).clone()
    }
}

#[async_trait]
impl JobSource for ScriptedSource {
    fn source(&self) -> PostingSource {
        self.source
    }

    async fn fetch(&self, keywords: &[String]) -> Result<Vec<JobPosting>, SourceFetchError> {
        *lock(&self.call_count) += 1;
        *lock(&self.last_keywords) = keywords.to_vec();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(reason) = &self.outage {
            return Err(SourceFetchError::Unavailable {
                origin: self.source,
                reason: reason.clone(),
            });
        }

        let next = lock(&self.queued).pop_front();
        next.unwrap_or_else(|| Ok(self.default_postings.clone()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
