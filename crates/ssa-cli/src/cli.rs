//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SSA Admin content tools.
///
/// Normalizes typed times, prepares edited event records for the backend,
/// and previews the public event listing.
#[derive(Debug, Parser)]
#[command(name = "ssa", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize a typed time (e.g. "2p", "9:15 AM", "7") to 24-hour HH:MM.
    Normalize {
        /// The time as typed.
        input: String,

        /// Treat the time as an event end time.
        #[arg(long)]
        end: bool,

        /// Start time of the same event, used to resolve bare end hours.
        #[arg(long, requires = "end")]
        start: Option<String>,
    },

    /// Format a stored HH:MM time for display (e.g. "2:30 PM").
    Display {
        /// The stored time. Prints a dash when omitted.
        time: Option<String>,
    },

    /// Validate event editor JSONL from stdin and emit normalized records.
    Prepare,

    /// List published events from JSONL records on stdin.
    Agenda {
        /// First day to list (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        from: Option<String>,

        /// Last day to list (YYYY-MM-DD). Defaults to `agenda_days` after --from.
        #[arg(long)]
        to: Option<String>,

        /// Only list events mentioning this keyword.
        #[arg(long, short)]
        keyword: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
