//! Apply command implementation.

use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the apply command.
pub async fn execute_apply(args: ApplyArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    session.refresh().await?;

    let with_cover_letter = session.cover_letter_by_default() && !args.no_cover_letter;
    let tracker = session.scheduler().tracker();
    let mut tracker = tracker.lock().await;
    let receipt = tracker
        .apply(&args.posting_id, session.profile(), with_cover_letter)
        .await?;
    let posting = tracker
        .get(&args.posting_id)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown posting: {}", args.posting_id)))?;

    println!("{}", formatter.format_receipt(posting, &receipt)?);
    Ok(())
}
