//! `mailsift` - filter and search email records from the command line.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;
mod input;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;
use mailsift_core::Config;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailsift=warn,mailsift_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = cli.config_path();
    let config = Config::load(&config_path)
        .with_context(|| format!("cannot load configuration {}", config_path.display()))?;
    let pipeline = cli.pipeline(&config)?;

    let emails = input::read_emails(cli.input.as_deref())?;
    info!(records = emails.len(), filters = pipeline.len(), "Filtering");

    let kept = pipeline.run(&emails);
    debug!(kept = kept.len(), "Done");

    let mut stdout = std::io::stdout().lock();
    if cli.count {
        writeln!(stdout, "{}", kept.len())?;
    } else {
        input::write_emails(stdout, &kept, cli.pretty)?;
    }

    Ok(())
}
