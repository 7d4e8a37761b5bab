//! Stats command implementation.

use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the stats command.
pub async fn execute_stats(session: &Session, formatter: &Formatter) -> Result<()> {
    session.refresh().await?;
    let stats = session.scheduler().tracker().lock().await.stats();
    println!("{}", formatter.format_stats(&stats)?);
    Ok(())
}
