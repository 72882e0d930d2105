use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ssa_cli::commands::{agenda, display, normalize, prepare};
use ssa_cli::{Cli, Commands, Config};
use ssa_core::{AgendaFilter, format_iso_date, parse_iso_date};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so command output stays pipeable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Normalize { input, end, start }) => {
            normalize::run(&mut stdout, input, *end, start.as_deref())?;
        }
        Some(Commands::Display { time }) => {
            display::run(&mut stdout, time.as_deref())?;
        }
        Some(Commands::Prepare) => {
            let written = prepare::run(io::stdin().lock(), &mut stdout)?;
            tracing::info!(written, "records prepared");
        }
        Some(Commands::Agenda {
            from,
            to,
            keyword,
            json,
        }) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");

            let from = match from {
                Some(from) => parse_iso_date(from).context("invalid --from date")?,
                None => Local::now().date_naive(),
            };
            let mut filter = AgendaFilter::upcoming(from, config.agenda_days)
                .with_keyword(keyword.clone().or(config.keyword));
            if let Some(to) = to {
                filter.to = parse_iso_date(to).context("invalid --to date")?;
            }
            if filter.to < filter.from {
                anyhow::bail!("--to must not be before --from");
            }
            tracing::debug!(
                from = %format_iso_date(filter.from),
                to = %format_iso_date(filter.to),
                keyword = ?filter.keyword(),
                "listing agenda"
            );

            agenda::run(io::stdin().lock(), &mut stdout, &filter, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
