//! CLI command definitions and argument parsing.

use careerelite_domain::{PostingId, PostingSource, SortOrder, MAX_CONTACTS_PER_LOOKUP};
use careerelite_engine::EngineConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CareerElite - Find, rank and apply to jobs that match your profile.
#[derive(Debug, Parser)]
#[command(name = "careerelite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CAREERELITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run one acquisition now and print the ranked postings
    Scrape(ScrapeArgs),

    /// Scrape on a schedule until interrupted
    Watch(WatchArgs),

    /// Print the search keywords derived from the profile
    Keywords,

    /// List tracked postings
    Jobs(JobsArgs),

    /// Find people to contact about a posting
    Contacts(ContactsArgs),

    /// Generate documents and mark a posting applied
    Apply(ApplyArgs),

    /// Dashboard statistics
    Stats,
}

impl Command {
    /// Engine configuration with this command's overrides applied
    pub fn engine_config(&self, base: &EngineConfig) -> EngineConfig {
        let mut config = base.clone();
        match self {
            Command::Watch(WatchArgs { interval: Some(hours) }) => config.scrape_interval_hours = *hours,
            Command::Contacts(ContactsArgs { max: Some(max), .. }) => config.max_contacts = *max,
            _ => {}
        }
        config
    }
}

/// Arguments for the scrape command.
#[derive(Debug, Parser)]
pub struct ScrapeArgs {
    /// Show only the top N postings
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the watch command.
#[derive(Debug, Parser)]
pub struct WatchArgs {
    /// Override the configured interval (hours, 1-24)
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Arguments for the jobs command.
#[derive(Debug, Parser)]
pub struct JobsArgs {
    /// Case-insensitive text in title, company or description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only these categories (repeatable)
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only these sources (repeatable)
    #[arg(long = "source", value_enum)]
    pub sources: Vec<SourceArg>,

    /// Listing order
    #[arg(long, value_enum, default_value = "relevance")]
    pub sort: SortArg,
}

/// Arguments for the contacts command.
#[derive(Debug, Parser)]
pub struct ContactsArgs {
    /// Posting identifier (e.g. li-1)
    pub posting_id: PostingId,

    /// Maximum contacts to look up
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=MAX_CONTACTS_PER_LOOKUP as i64))]
    pub max: Option<u8>,
}

/// Arguments for the apply command.
#[derive(Debug, Parser)]
pub struct ApplyArgs {
    /// Posting identifier (e.g. ng-2)
    pub posting_id: PostingId,

    /// Skip the cover letter
    #[arg(long)]
    pub no_cover_letter: bool,
}

/// Source argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceArg {
    /// LinkedIn
    Linkedin,
    /// Naukrigulf
    Naukrigulf,
}

/// Sort argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortArg {
    /// Highest match score first
    Relevance,
    /// Newest first
    Date,
    /// Company name A-Z
    Company,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<SourceArg> for PostingSource {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Linkedin => PostingSource::LinkedIn,
            SourceArg::Naukrigulf => PostingSource::Naukrigulf,
        }
    }
}

impl From<SortArg> for SortOrder {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::Date => SortOrder::Date,
            SortArg::Company => SortOrder::Company,
        }
    }
}
