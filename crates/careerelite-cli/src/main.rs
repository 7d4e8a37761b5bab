//! CareerElite CLI - find, rank and apply to matching jobs.

use careerelite_cli::commands;
use careerelite_cli::{logging, Cli, Command, Config, Formatter, Session};
use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> careerelite_cli::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init(&config.settings.log_level, cli.verbose);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let profile = config.load_profile()?;

    if let Command::Keywords = cli.command {
        return commands::execute_keywords(&profile, &formatter);
    }

    let engine = cli.command.engine_config(&config.engine);
    let session = Session::open(&engine, &config.sources, profile)?;

    match cli.command {
        Command::Scrape(args) => commands::execute_scrape(args, &session, &formatter).await?,
        Command::Watch(_) => commands::execute_watch(&session, &formatter).await?,
        Command::Jobs(args) => commands::execute_jobs(args, &session, &formatter).await?,
        Command::Contacts(args) => commands::execute_contacts(args, &session, &formatter).await?,
        Command::Apply(args) => commands::execute_apply(args, &session, &formatter).await?,
        Command::Stats => commands::execute_stats(&session, &formatter).await?,
        Command::Keywords => unreachable!(),
    }

    Ok(())
}
