//! Watch command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use careerelite_engine::ScrapeEvent;
use tokio::sync::broadcast::error::RecvError;

/// Execute the watch command.
///
/// Runs the scheduler until Ctrl+C, printing every run as it completes.
pub async fn execute_watch(session: &Session, formatter: &Formatter) -> Result<()> {
    let scheduler = session.scheduler();
    let mut events = scheduler.subscribe();

    session.sync_profile().await;
    scheduler.start(session.profile().clone());
    let sources: Vec<String> = scheduler.sources().iter().map(ToString::to_string).collect();
    println!(
        "{}",
        formatter.info(&format!(
            "Scraping {} every {}h, press Ctrl+C to stop",
            sources.join(", "),
            scheduler.config().scrape_interval_hours
        ))
    );

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(ScrapeEvent::Completed(report)) => {
                    println!("{}", formatter.run_summary(&report));
                    println!("{}", formatter.format_status(&scheduler.status())?);
                }
                Ok(ScrapeEvent::Skipped { at }) => {
                    tracing::debug!("Timer tick at {} skipped", at);
                    println!("{}", formatter.warning("Scheduled scrape skipped: previous scrape still running"));
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!("Missed {} scheduler events", missed);
                }
                Err(RecvError::Closed) => break,
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received, stopping scheduler");
                break;
            }
        }
    }

    scheduler.stop();
    println!("{}", scheduler.metrics().summary());
    Ok(())
}
