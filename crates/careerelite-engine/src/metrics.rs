//! Metrics collection for scrape runs

use crate::acquisition::AcquisitionOutcome;
use careerelite_domain::PostingSource;
use std::collections::BTreeMap;
use std::time::Duration;

/// Metrics collected across scrape runs
///
/// Tracks postings fetched and failures per source, merge results and run
/// timing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeMetrics {
    /// Postings fetched per source
    pub fetched: BTreeMap<PostingSource, usize>,

    /// Failed fetches per source
    pub failures: BTreeMap<PostingSource, usize>,

    /// Scrape runs completed
    pub runs_completed: usize,

    /// Timer ticks skipped because a scrape was still running
    pub runs_skipped: usize,

    /// Postings added to the tracked set
    pub new_postings: usize,

    /// Duration of the most recent run
    pub last_run_duration: Option<Duration>,
}

impl ScrapeMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record per-source fetch counts and failures of one acquisition
    pub fn record_acquisition(&mut self, outcome: &AcquisitionOutcome) {
        for (source, count) in &outcome.fetched {
            *self.fetched.entry(*source).or_insert(0) += count;
        }
        for failure in &outcome.failures {
            *self.failures.entry(failure.posting_source()).or_insert(0) += 1;
        }
    }

    /// Record a completed run
    pub fn record_run(&mut self, new_postings: usize, duration: Duration) {
        self.runs_completed += 1;
        self.new_postings += new_postings;
        self.last_run_duration = Some(duration);
    }

    /// Record a skipped timer tick
    pub fn record_skip(&mut self) {
        self.runs_skipped += 1;
    }

    /// Get total postings fetched across all sources
    pub fn total_fetched(&self) -> usize {
        self.fetched.values().sum()
    }

    /// Get total failures across all sources
    pub fn total_failures(&self) -> usize {
        self.failures.values().sum()
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Scrape Metrics Summary".to_string(),
            "======================".to_string(),
            format!("Runs completed: {}", self.runs_completed),
            format!("Runs skipped: {}", self.runs_skipped),
            format!("New postings: {}", self.new_postings),
        ];
        if let Some(duration) = self.last_run_duration {
            lines.push(format!("Last run: {}ms", duration.as_millis()));
        }
        lines.push(String::new());

        if !self.fetched.is_empty() {
            lines.push("Fetched by source:".to_string());
            for (source, count) in &self.fetched {
                lines.push(format!("  {}: {}", source, count));
            }
            lines.push(format!("  Total: {}", self.total_fetched()));
            lines.push(String::new());
        }

        if !self.failures.is_empty() {
            lines.push("Failures by source:".to_string());
            for (source, count) in &self.failures {
                lines.push(format!("  {}: {}", source, count));
            }
            lines.push(format!("  Total: {}", self.total_failures()));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerelite_domain::SourceFetchError;

    fn outcome() -> AcquisitionOutcome {
        AcquisitionOutcome {
            postings: Vec::new(),
            keywords: Vec::new(),
            fetched: vec![(PostingSource::LinkedIn, 2)],
            failures: vec![SourceFetchError::Unavailable {
                origin: PostingSource::Naukrigulf,
                reason: "timeout".to_string(),
            }],
        }
    }

    #[test]
    fn test_metrics_creation() {
        let metrics = ScrapeMetrics::new();
        assert_eq!(metrics.total_fetched(), 0);
        assert_eq!(metrics.total_failures(), 0);
        assert_eq!(metrics.runs_completed, 0);
        assert!(metrics.last_run_duration.is_none());
    }

    #[test]
    fn test_record_acquisition() {
        let mut metrics = ScrapeMetrics::new();
        metrics.record_acquisition(&outcome());
        metrics.record_acquisition(&outcome());

        assert_eq!(metrics.fetched[&PostingSource::LinkedIn], 4);
        assert_eq!(metrics.failures[&PostingSource::Naukrigulf], 2);
        assert_eq!(metrics.total_fetched(), 4);
        assert_eq!(metrics.total_failures(), 2);
    }

    #[test]
    fn test_record_run_and_skip() {
        let mut metrics = ScrapeMetrics::new();
        metrics.record_run(3, Duration::from_millis(1200));
        metrics.record_run(0, Duration::from_millis(900));
        metrics.record_skip();

        assert_eq!(metrics.runs_completed, 2);
        assert_eq!(metrics.runs_skipped, 1);
        assert_eq!(metrics.new_postings, 3);
        assert_eq!(metrics.last_run_duration, Some(Duration::from_millis(900)));
    }

    #[test]
    fn test_summary() {
        let mut metrics = ScrapeMetrics::new();
        metrics.record_acquisition(&outcome());
        metrics.record_run(2, Duration::from_millis(1500));

        let summary = metrics.summary();
        assert!(summary.contains("Runs completed: 1"));
        assert!(summary.contains("New postings: 2"));
        assert!(summary.contains("Last run: 1500ms"));
        assert!(summary.contains("LinkedIn: 2"));
        assert!(summary.contains("Naukrigulf: 1"));
    }
}
