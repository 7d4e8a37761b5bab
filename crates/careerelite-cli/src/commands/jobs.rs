//! Jobs command implementation.

use crate::cli::JobsArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use careerelite_domain::PostingFilter;

/// Execute the jobs command.
pub async fn execute_jobs(args: JobsArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    session.refresh().await?;
    let postings = session.scheduler().tracker().lock().await.list(&filter(args));
    println!("{}", formatter.format_postings(&postings)?);
    Ok(())
}

fn filter(args: JobsArgs) -> PostingFilter {
    PostingFilter {
        search: args.search,
        categories: args.categories,
        sources: args.sources.into_iter().map(Into::into).collect(),
        sort: args.sort.into(),
    }
}
