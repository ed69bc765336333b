//! CLI definitions.

pub mod command;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use tripboard_core::trip::EventSortType;

pub use command::Command;

/// Plan a trip from the terminal.
#[derive(Debug, Parser)]
#[command(name = "tripboard")]
#[command(version, about = "Plan a trip from the terminal", long_about = None)]
pub struct Cli {
    /// JSON file with the trip events. Generated events are used if omitted.
    #[arg(long, short, env = "TRIPBOARD_EVENTS")]
    pub events: Option<PathBuf>,

    /// Initial sort mode.
    #[arg(long, value_enum, default_value = "event", env = "TRIPBOARD_SORT")]
    pub sort: SortArg,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// First day of generated events (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Read session commands from a file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Suppress the prompt and help banner.
    #[arg(long)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable board.
    #[default]
    Pretty,
}

/// CLI sort mode (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[default]
    Event,
    Time,
    Price,
}

impl From<SortArg> for EventSortType {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Event => EventSortType::Event,
            SortArg::Time => EventSortType::Time,
            SortArg::Price => EventSortType::Price,
        }
    }
}
