//! Subcommands.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Download map extracts (all configured regions when none are named)
    Download {
        /// Region names to download, in order
        regions: Vec<String>,
    },

    /// List configured regions and their bounding boxes
    Regions,

    /// Wrap a JSON document into a zipped envelope
    Zip {
        /// Input JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Unwrap a zipped envelope back into the original JSON document
    Unzip {
        /// Input JSON file (stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pass documents that are not envelopes through unchanged
        #[arg(long)]
        lenient: bool,
    },
}
