//! Command line argument parsing for the Lexis CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexis - dictionary-aware similarity ratio for address-like phrases
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Compute how much of one phrase is found in another")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = USAGE_EXAMPLE)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Additional stop word, removed from both phrases (repeatable)
    #[arg(short = 's', long = "stop-word", value_name = "WORD")]
    pub stop_words: Vec<String>,

    /// Also print the token sequences of both phrases
    #[arg(long)]
    pub explain: bool,

    /// The input phrase followed by the phrase to compare it with
    #[arg(value_name = "PHRASE")]
    pub phrases: Vec<String>,
}

/// Shown after `--help` and when the phrase count is wrong.
pub const USAGE_EXAMPLE: &str = "Usage example: lexis 'Малый пер.' 'Малый пр.'";

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// The bare ratio
    Human,
    /// JSON report
    Json,
}
