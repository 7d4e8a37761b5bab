//! Scrape command implementation.

use crate::cli::ScrapeArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the scrape command.
pub async fn execute_scrape(args: ScrapeArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let report = session.refresh().await?;
    println!("{}", formatter.format_report(&report, args.limit)?);
    Ok(())
}
