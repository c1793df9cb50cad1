//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for osmkit.
///
/// Running with no subcommand downloads every configured region.
#[derive(Parser)]
#[command(name = "osmkit")]
#[command(about = "Download OpenStreetMap extracts and pack JSON into zipped envelopes")]
#[command(version = osmkit_build_info::LONG_VERSION)]
pub struct Cli {
    /// JSON file with regions and output templates (defaults are built in)
    #[arg(long, global = true, env = "OSMKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
