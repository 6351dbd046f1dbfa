//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use padcompat_lib::{CompatibilitySource, SupportLevel};

#[derive(Parser)]
#[command(name = "padcompat")]
#[command(about = "Detect and track gamepad support across a game library", long_about = None)]
pub(crate) struct Cli {
    /// Compatibility database file (defaults to the settings value, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Manual override file (defaults to the settings value, then the data directory)
    #[arg(long, global = true)]
    pub overrides: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Classify catalog entries without storing anything
    Classify {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Only classify this entry (id or name)
        #[arg(short, long)]
        game: Option<String>,

        /// Show every signal's opinion
        #[arg(short, long)]
        explain: bool,
    },

    /// Auto-detect every catalog entry and store the results
    Detect {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Re-detect entries that already have a stored level
        #[arg(short, long)]
        force: bool,

        /// Concurrent classifications (defaults to the settings value)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Show the resolved compatibility record for one entry
    Show {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Entry id or name
        game: String,
    },

    /// Manually set an entry's support level
    Set {
        /// Catalog file (.yaml, .yml or .json)
        catalog: PathBuf,

        /// Entry id or name
        game: String,

        /// full, partial, none, community or unknown
        level: SupportLevel,
    },

    /// List stored records
    List {
        /// Only show records at this level
        #[arg(short, long)]
        level: Option<SupportLevel>,

        /// Only show records from this source (user, auto, official, ...)
        #[arg(short, long)]
        source: Option<CompatibilitySource>,
    },

    /// Summarize stored records by support level
    Stats,

    /// Write all stored records to a CSV file
    Export {
        /// Output file
        output: PathBuf,
    },

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Write a default settings file if none exists
    Init,
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
