//! Contacts command implementation.

use crate::cli::ContactsArgs;
use crate::config::OutputFormat;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the contacts command.
///
/// The lookup limit comes from the engine configuration, which `--max`
/// overrides before the session is opened.
pub async fn execute_contacts(args: ContactsArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    session.refresh().await?;

    let tracker = session.scheduler().tracker();
    let mut tracker = tracker.lock().await;
    let contacts = tracker.contacts_for(&args.posting_id).await?;
    let posting = tracker
        .get(&args.posting_id)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown posting: {}", args.posting_id)))?;

    if formatter.format() == OutputFormat::Table {
        println!("{}", formatter.info(&format!("{} at {}", posting.title, posting.company)));
    }
    println!("{}", formatter.format_contacts(&contacts)?);
    Ok(())
}
