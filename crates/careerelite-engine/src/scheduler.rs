//! Scrape scheduler
//!
//! Runs acquisition on a fixed interval, starting immediately, and on demand.
//! Each run merges its ranked postings into the shared [`JobTracker`]. Only
//! one run is in flight at a time: an overlapping timer tick is skipped, an
//! overlapping manual trigger is handled per [`OverlapPolicy`]. The timer's
//! first run after activation waits for a scrape already in flight instead.

use crate::acquisition::{Acquisition, AcquisitionOutcome};
use crate::config::{EngineConfig, OverlapPolicy};
use crate::error::{EngineError, Result};
use crate::metrics::ScrapeMetrics;
use crate::tracker::JobTracker;
use careerelite_domain::traits::Clock;
use careerelite_domain::{JobPosting, PostingSource, Profile, SourceFetchError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tokio::sync::{broadcast, oneshot, Notify};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

const EVENT_CAPACITY: usize = 16;

/// What started a scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Scheduler interval
    Timer,
    /// Explicit request
    Manual,
}

/// Scheduler state for freshness indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulerStatus {
    /// Whether the interval timer is active
    pub is_running: bool,
    /// Start of the most recent run, timer or manual
    pub last_run: Option<DateTime<Utc>>,
    /// When the timer fires next, while running
    ///
    /// Manual runs move `last_run` but never this.
    pub next_run: Option<DateTime<Utc>>,
}

/// Result of one scrape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeReport {
    /// What started it
    pub trigger: Trigger,
    /// When it started
    pub started_at: DateTime<Utc>,
    /// Ranked postings from this run, highest score first
    pub postings: Vec<JobPosting>,
    /// Postings that were new to the tracker
    pub added: usize,
    /// Postings already tracked
    pub duplicates: usize,
    /// Sources that failed, as messages
    pub failures: Vec<String>,
    /// Nothing ran because another scrape was in flight
    pub skipped: bool,
}

impl ScrapeReport {
    fn skipped(trigger: Trigger, at: DateTime<Utc>) -> Self {
        Self {
            trigger,
            started_at: at,
            postings: Vec::new(),
            added: 0,
            duplicates: 0,
            failures: Vec::new(),
            skipped: true,
        }
    }
}

/// Notifications published to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeEvent {
    /// A scrape finished
    Completed(ScrapeReport),
    /// A timer tick found a scrape still running
    Skipped {
        /// When the tick fired
        at: DateTime<Utc>,
    },
}

struct TimerHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

struct Shared {
    config: EngineConfig,
    acquisition: Acquisition,
    tracker: Arc<tokio::sync::Mutex<JobTracker>>,
    clock: Arc<dyn Clock>,
    metrics: Mutex<ScrapeMetrics>,
    last_run: Mutex<Option<DateTime<Utc>>>,
    next_tick: Mutex<Option<DateTime<Utc>>>,
    in_flight: AtomicBool,
    idle: Notify,
    events: broadcast::Sender<ScrapeEvent>,
}

/// Clears the in-flight flag when the run ends, however it ends
struct InFlight<'a> {
    flag: &'a AtomicBool,
    idle: &'a Notify,
}

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool, idle: &'a Notify) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag, idle })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.idle.notify_waiters();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Shared {
    async fn run(&self, profile: &Profile, trigger: Trigger) -> Result<ScrapeReport> {
        let Some(_guard) = InFlight::acquire(&self.in_flight, &self.idle) else {
            return self.overlap(trigger);
        };

        let started_at = self.clock.now();
        *lock(&self.last_run) = Some(started_at);
        tracing::info!("Scrape started ({:?}) for {}", trigger, profile.name);
        let timer = Instant::now();

        let outcome = self.acquisition.acquire(profile).await;
        let summary = self.tracker.lock().await.merge(outcome.postings.clone());

        {
            let mut metrics = lock(&self.metrics);
            metrics.record_acquisition(&outcome);
            metrics.record_run(summary.added, timer.elapsed());
        }

        let AcquisitionOutcome { postings, failures, .. } = outcome;
        let report = ScrapeReport {
            trigger,
            started_at,
            postings,
            added: summary.added,
            duplicates: summary.duplicates,
            failures: failures.iter().map(SourceFetchError::to_string).collect(),
            skipped: false,
        };
        tracing::info!(
            "Scrape completed: {} postings, {} new",
            report.postings.len(),
            report.added
        );

        // No subscribers is fine
        let _ = self.events.send(ScrapeEvent::Completed(report.clone()));
        Ok(report)
    }

    fn overlap(&self, trigger: Trigger) -> Result<ScrapeReport> {
        let now = self.clock.now();
        match (trigger, self.config.overlap_policy) {
            (Trigger::Timer, _) => {
                tracing::warn!("Scrape still running, skipping scheduled run");
                lock(&self.metrics).record_skip();
                let _ = self.events.send(ScrapeEvent::Skipped { at: now });
                Ok(ScrapeReport::skipped(trigger, now))
            }
            (Trigger::Manual, OverlapPolicy::Reject) => Err(EngineError::ScrapeInProgress),
            (Trigger::Manual, OverlapPolicy::Skip) => {
                tracing::warn!("Scrape still running, ignoring manual trigger");
                Ok(ScrapeReport::skipped(trigger, now))
            }
        }
    }

    /// Resolves once no scrape is in flight
    async fn wait_idle(&self) {
        loop {
            // Must exist before the check; notify_waiters reaches it unpolled
            let notified = self.idle.notified();
            if !self.in_flight.load(Ordering::Acquire) {
                return;
            }
            notified.await;
        }
    }

    /// Record that the timer fired now and will fire again one `period` later
    fn schedule_after(&self, period: std::time::Duration) {
        let next = chrono::Duration::from_std(period)
            .ok()
            .map(|period| self.clock.now() + period);
        *lock(&self.next_tick) = next;
    }
}

/// Periodic and on-demand scraping with an explicit lifecycle
///
/// # Examples
///
/// ```
/// use careerelite_domain::traits::SystemClock;
/// use careerelite_engine::{Acquisition, EngineConfig, JobTracker, ScrapeScheduler};
/// use careerelite_sources::*;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let config = SourceConfig::instant();
/// let tracker = JobTracker::new(
///     Arc::new(SimulatedContactFinder::random(&config)),
///     Arc::new(SimulatedDocumentGenerator::new(&config)),
/// );
/// let scheduler = ScrapeScheduler::new(
///     EngineConfig::default(),
///     Acquisition::new(FixtureSource::all(&config)),
///     tracker,
///     Arc::new(SystemClock),
/// )
/// .unwrap();
///
/// let report = scheduler.trigger_now(&sample_profile().unwrap()).await.unwrap();
/// assert_eq!(report.added, 4);
/// assert!(!scheduler.status().is_running);
/// # }
/// ```
pub struct ScrapeScheduler {
    shared: Arc<Shared>,
    timer: Mutex<Option<TimerHandle>>,
}

impl ScrapeScheduler {
    /// Create a stopped scheduler
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`] if `config` fails validation.
    pub fn new(
        config: EngineConfig,
        acquisition: Acquisition,
        tracker: JobTracker,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            shared: Arc::new(Shared {
                config,
                acquisition,
                tracker: Arc::new(tokio::sync::Mutex::new(tracker)),
                clock,
                metrics: Mutex::new(ScrapeMetrics::new()),
                last_run: Mutex::new(None),
                next_tick: Mutex::new(None),
                in_flight: AtomicBool::new(false),
                idle: Notify::new(),
                events,
            }),
            timer: Mutex::new(None),
        })
    }

    /// Start the interval timer; the first run happens immediately
    ///
    /// If a scrape is already in flight (a manual trigger, or the last run of
    /// a timer that was just stopped) the first run starts as soon as it
    /// finishes. Later ticks that find a scrape running are skipped. The
    /// interval is counted from activation either way.
    ///
    /// Returns `false` without doing anything if already running.
    pub fn start(&self, profile: Profile) -> bool {
        let mut timer = lock(&self.timer);
        if timer.is_some() {
            tracing::info!("Scrape scheduler is already running");
            return false;
        }

        let period = self.shared.config.scrape_interval();
        let shared = Arc::clone(&self.shared);
        let (shutdown, mut shutdown_rx) = oneshot::channel();

        *lock(&self.shared.next_tick) = Some(self.shared.clock.now());
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            tokio::select! {
                biased;
                _ = &mut shutdown_rx => {
                    tracing::debug!("Scrape timer stopped before its first run");
                    return;
                }
                _ = shared.wait_idle() => {}
            }

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    _ = ticker.tick() => {
                        shared.schedule_after(period);
                        // Timer runs never fail, overlaps are skipped
                        let _ = shared.run(&profile, Trigger::Timer).await;
                    }
                }
            }
            tracing::debug!("Scrape timer exited");
        });

        *timer = Some(TimerHandle { shutdown, task });
        tracing::info!("Scrape scheduler started (interval: {:?})", period);
        true
    }

    /// Stop the interval timer
    ///
    /// A run already in flight completes and is merged. Returns `false`
    /// without doing anything if not running.
    pub fn stop(&self) -> bool {
        let Some(handle) = lock(&self.timer).take() else {
            tracing::info!("Scrape scheduler is not running");
            return false;
        };

        let _ = handle.shutdown.send(());
        drop(handle.task);
        *lock(&self.shared.next_tick) = None;
        tracing::info!("Scrape scheduler stopped");
        true
    }

    /// Scrape now, independent of the timer's schedule
    ///
    /// # Errors
    ///
    /// [`EngineError::ScrapeInProgress`] if another scrape is running and the
    /// overlap policy is `reject`.
    pub async fn trigger_now(&self, profile: &Profile) -> Result<ScrapeReport> {
        self.shared.run(profile, Trigger::Manual).await
    }

    /// Current timer state and run times
    pub fn status(&self) -> SchedulerStatus {
        let is_running = lock(&self.timer).is_some();
        let last_run = *lock(&self.shared.last_run);
        let next_run = if is_running { *lock(&self.shared.next_tick) } else { None };

        SchedulerStatus {
            is_running,
            last_run,
            next_run,
        }
    }

    /// Whether a scrape is in flight right now
    pub fn is_scraping(&self) -> bool {
        self.shared.in_flight.load(Ordering::Acquire)
    }

    /// Receive an event for every completed or skipped run
    pub fn subscribe(&self) -> broadcast::Receiver<ScrapeEvent> {
        self.shared.events.subscribe()
    }

    /// The shared tracked job set
    pub fn tracker(&self) -> Arc<tokio::sync::Mutex<JobTracker>> {
        Arc::clone(&self.shared.tracker)
    }

    /// Snapshot of the run metrics
    pub fn metrics(&self) -> ScrapeMetrics {
        lock(&self.shared.metrics).clone()
    }

    /// Sources searched on every run, in acquisition order
    pub fn sources(&self) -> Vec<PostingSource> {
        self.shared.acquisition.sources()
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.shared.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerelite_domain::PostingId;
    use careerelite_sources::{
        FixedCount, ScriptedSource, SimulatedContactFinder, SimulatedDocumentGenerator, SourceConfig,
    };
    use chrono::TimeZone;
    use std::time::Duration;

    struct FrozenClock(DateTime<Utc>);

    impl Clock for FrozenClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Follows tokio's clock, so paused tests see time move
    struct TokioClock {
        base: DateTime<Utc>,
        origin: tokio::time::Instant,
    }

    impl TokioClock {
        fn starting_at(base: DateTime<Utc>) -> Self {
            Self { base, origin: tokio::time::Instant::now() }
        }
    }

    impl Clock for TokioClock {
        fn now(&self) -> DateTime<Utc> {
            self.base + chrono::Duration::from_std(self.origin.elapsed()).unwrap()
        }
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 18, 12, 0, 0).unwrap()
    }

    fn posting(key: &str) -> JobPosting {
        JobPosting::new(PostingId::new(PostingSource::LinkedIn, key), "Manager", "Acme", "Remote", noon())
    }

    fn scheduler_with(config: EngineConfig, source: ScriptedSource) -> ScrapeScheduler {
        scheduler_on(config, source, Arc::new(FrozenClock(noon())))
    }

    fn scheduler_on(config: EngineConfig, source: ScriptedSource, clock: Arc<dyn Clock>) -> ScrapeScheduler {
        let sources = SourceConfig::instant();
        let tracker = JobTracker::new(
            Arc::new(SimulatedContactFinder::new(&sources, FixedCount(1))),
            Arc::new(SimulatedDocumentGenerator::new(&sources)),
        );
        ScrapeScheduler::new(
            config,
            Acquisition::new(vec![Arc::new(source)]),
            tracker,
            clock,
        )
        .unwrap()
    }

    fn hours(n: i64) -> chrono::Duration {
        chrono::Duration::hours(n)
    }

    fn profile() -> Profile {
        Profile::new("Ada", "ada@example.com")
    }

    #[test]
    fn test_invalid_config_rejected() {
        let sources = SourceConfig::instant();
        let tracker = JobTracker::new(
            Arc::new(SimulatedContactFinder::new(&sources, FixedCount(1))),
            Arc::new(SimulatedDocumentGenerator::new(&sources)),
        );
        let config = EngineConfig { scrape_interval_hours: 0, ..Default::default() };
        let result = ScrapeScheduler::new(config, Acquisition::new(vec![]), tracker, Arc::new(FrozenClock(noon())));
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[tokio::test]
    async fn test_status_before_any_run() {
        let scheduler = scheduler_with(EngineConfig::default(), ScriptedSource::new(PostingSource::LinkedIn, vec![]));
        assert_eq!(
            scheduler.status(),
            SchedulerStatus { is_running: false, last_run: None, next_run: None }
        );
    }

    #[tokio::test]
    async fn test_manual_trigger_merges_and_reports() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![posting("1"), posting("2")]);
        let scheduler = scheduler_with(EngineConfig::default(), source);

        let first = scheduler.trigger_now(&profile()).await.unwrap();
        assert_eq!(first.trigger, Trigger::Manual);
        assert_eq!((first.added, first.duplicates), (2, 0));

        let second = scheduler.trigger_now(&profile()).await.unwrap();
        assert_eq!((second.added, second.duplicates), (0, 2));
        assert_eq!(second.postings.len(), 2);

        assert_eq!(scheduler.tracker().lock().await.len(), 2);
        assert_eq!(scheduler.metrics().runs_completed, 2);
        assert_eq!(scheduler.metrics().new_postings, 2);

        // Manual runs update last_run but there is no next run while stopped
        let status = scheduler.status();
        assert_eq!(status.last_run, Some(noon()));
        assert_eq!(status.next_run, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_runs_immediately_then_on_interval() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![posting("1")]);
        let scheduler = scheduler_with(EngineConfig::default(), source.clone());

        assert!(scheduler.start(profile()));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(source.call_count(), 1);

        let status = scheduler.status();
        assert!(status.is_running);
        assert_eq!(status.next_run, Some(noon() + chrono::Duration::hours(6)));

        tokio::time::sleep(Duration::from_secs(6 * 3600)).await;
        assert_eq!(source.call_count(), 2);

        assert!(scheduler.stop());
        tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
        assert_eq!(source.call_count(), 2);
        assert!(!scheduler.status().is_running);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_and_stop_are_idempotent() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![]);
        let scheduler = scheduler_with(EngineConfig::default(), source.clone());

        assert!(!scheduler.stop());
        assert!(scheduler.start(profile()));
        assert!(!scheduler.start(profile()));
        tokio::time::sleep(Duration::from_secs(1)).await;

        // One timer, one immediate run
        assert_eq!(source.call_count(), 1);

        assert!(scheduler.stop());
        assert!(!scheduler.stop());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_trigger_does_not_reset_timer() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![]);
        let scheduler = scheduler_with(EngineConfig::default(), source.clone());

        scheduler.start(profile());
        tokio::time::sleep(Duration::from_secs(3 * 3600)).await;
        scheduler.trigger_now(&profile()).await.unwrap();
        assert_eq!(source.call_count(), 2);

        // The scheduled run still fires 6h after the first, not after the manual one
        tokio::time::sleep(Duration::from_secs(3 * 3600 + 1)).await;
        assert_eq!(source.call_count(), 3);
        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_next_run_follows_timer_not_manual_runs() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![]);
        let scheduler = scheduler_on(
            EngineConfig::default(),
            source.clone(),
            Arc::new(TokioClock::starting_at(noon())),
        );

        scheduler.start(profile());
        tokio::time::sleep(Duration::from_secs(3 * 3600)).await;
        scheduler.trigger_now(&profile()).await.unwrap();

        let status = scheduler.status();
        assert_eq!(status.last_run, Some(noon() + hours(3)));
        assert_eq!(status.next_run, Some(noon() + hours(6)));

        tokio::time::sleep(Duration::from_secs(3 * 3600 + 1)).await;
        assert_eq!(source.call_count(), 3);
        let status = scheduler.status();
        assert_eq!(status.last_run, Some(noon() + hours(6)));
        assert_eq!(status.next_run, Some(noon() + hours(12)));

        scheduler.stop();
        assert_eq!(scheduler.status().next_run, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_manual_trigger_rejected() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![posting("1")])
            .with_delay(Duration::from_secs(10));
        let scheduler = Arc::new(scheduler_with(EngineConfig::default(), source));

        let background = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.trigger_now(&profile()).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(scheduler.is_scraping());

        assert_eq!(
            scheduler.trigger_now(&profile()).await,
            Err(EngineError::ScrapeInProgress)
        );

        let finished = background.await.unwrap().unwrap();
        assert_eq!(finished.added, 1);
        assert!(!scheduler.is_scraping());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_manual_trigger_skipped() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![])
            .with_delay(Duration::from_secs(10));
        let config = EngineConfig { overlap_policy: OverlapPolicy::Skip, ..Default::default() };
        let scheduler = Arc::new(scheduler_with(config, source.clone()));

        let background = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.trigger_now(&profile()).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;

        let report = scheduler.trigger_now(&profile()).await.unwrap();
        assert!(report.skipped);
        assert!(report.postings.is_empty());

        background.await.unwrap().unwrap();
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_tick_skipped_while_manual_runs() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![])
            .with_delay(Duration::from_secs(60));
        let scheduler = Arc::new(scheduler_with(EngineConfig::default(), source.clone()));

        scheduler.start(profile());
        tokio::time::sleep(Duration::from_secs(61)).await;
        assert_eq!(scheduler.metrics().runs_completed, 1);
        let mut events = scheduler.subscribe();

        // Manual run from 5h59m50s to 6h00m50s covers the second tick
        tokio::time::sleep(Duration::from_secs(6 * 3600 - 71)).await;
        let manual = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.trigger_now(&profile()).await })
        };
        tokio::time::sleep(Duration::from_secs(20)).await;

        assert_eq!(events.recv().await.unwrap(), ScrapeEvent::Skipped { at: noon() });
        assert_eq!(scheduler.metrics().runs_skipped, 1);

        manual.await.unwrap().unwrap();
        assert_eq!(source.call_count(), 2);
        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_for_manual_run() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![])
            .with_delay(Duration::from_secs(60));
        let scheduler = Arc::new(scheduler_with(EngineConfig::default(), source.clone()));

        let manual = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.trigger_now(&profile()).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;

        scheduler.start(profile());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(source.call_count(), 1);

        manual.await.unwrap().unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(source.call_count(), 2);
        assert_eq!(scheduler.metrics().runs_skipped, 0);
        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_while_timer_run_in_flight() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![])
            .with_delay(Duration::from_secs(60));
        let scheduler = scheduler_with(EngineConfig::default(), source.clone());

        assert!(scheduler.start(profile()));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(scheduler.is_scraping());
        assert!(scheduler.stop());
        assert!(scheduler.start(profile()));

        tokio::time::sleep(Duration::from_secs(120)).await;
        let metrics = scheduler.metrics();
        assert_eq!(source.call_count(), 2);
        assert_eq!(metrics.runs_completed, 2);
        assert_eq!(metrics.runs_skipped, 0);
        scheduler.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_while_waiting_for_first_tick() {
        let source = ScriptedSource::new(PostingSource::LinkedIn, vec![])
            .with_delay(Duration::from_secs(60));
        let scheduler = Arc::new(scheduler_with(EngineConfig::default(), source.clone()));

        let manual = {
            let scheduler = Arc::clone(&scheduler);
            tokio::spawn(async move { scheduler.trigger_now(&profile()).await })
        };
        tokio::time::sleep(Duration::from_secs(1)).await;
        scheduler.start(profile());
        tokio::time::sleep(Duration::from_secs(1)).await;
        scheduler.stop();

        manual.await.unwrap().unwrap();
        tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failing_source_reported() {
        let scheduler = scheduler_with(
            EngineConfig::default(),
            ScriptedSource::failing(PostingSource::LinkedIn, "timeout"),
        );
        let mut events = scheduler.subscribe();

        let report = scheduler.trigger_now(&profile()).await.unwrap();
        assert_eq!(report.failures, vec!["LinkedIn unavailable: timeout"]);
        assert!(report.postings.is_empty());
        assert_eq!(scheduler.metrics().total_failures(), 1);

        match events.recv().await.unwrap() {
            ScrapeEvent::Completed(event) => assert_eq!(event, report),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_report_and_status_serialize() {
        let source = ScriptedSource::new(PostingSource::Naukrigulf, vec![posting("1")]);
        let scheduler = scheduler_with(EngineConfig::default(), source);
        let report = scheduler.trigger_now(&profile()).await.unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["trigger"], "manual");
        assert_eq!(json["started_at"], "2024-04-18T12:00:00Z");
        assert_eq!(json["added"], 1);
        assert_eq!(json["skipped"], false);
        assert_eq!(json["postings"].as_array().unwrap().len(), 1);

        let status = serde_json::to_value(scheduler.status()).unwrap();
        assert_eq!(status["is_running"], false);
        assert!(status["next_run"].is_null());
    }

    #[test]
    fn test_sources_in_acquisition_order() {
        let sources = SourceConfig::instant();
        let tracker = JobTracker::new(
            Arc::new(SimulatedContactFinder::new(&sources, FixedCount(1))),
            Arc::new(SimulatedDocumentGenerator::new(&sources)),
        );
        let scheduler = ScrapeScheduler::new(
            EngineConfig::default(),
            Acquisition::new(vec![
                Arc::new(ScriptedSource::new(PostingSource::Naukrigulf, vec![])),
                Arc::new(ScriptedSource::new(PostingSource::LinkedIn, vec![])),
            ]),
            tracker,
            Arc::new(FrozenClock(noon())),
        )
        .unwrap();
        assert_eq!(
            scheduler.sources(),
            vec![PostingSource::Naukrigulf, PostingSource::LinkedIn]
        );
    }
}
