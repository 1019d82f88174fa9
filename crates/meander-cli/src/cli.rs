use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "meander", version, about = "Build and display self-similar meander patterns")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, short, default_value = "warn", global = true)]
    pub log_level: String,

    /// YAML file with pattern and flow settings
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Print the pattern for ORDER as a bordered ASCII grid
    Pattern {
        /// Number of doubling iterations
        #[arg(allow_negative_numbers = true)]
        order: u32,

        /// Print every generation from 0 up to ORDER
        #[arg(long)]
        stages: bool,
    },
    /// Scroll the pattern for ORDER one line at a time until interrupted
    Flow {
        /// Number of doubling iterations
        #[arg(allow_negative_numbers = true)]
        order: u32,

        /// Lines per minute [default: 60, or flow.frequency from --config]
        #[arg(short, long = "freq", allow_negative_numbers = true)]
        freq: Option<i64>,

        /// Stop after this many lines instead of running forever
        #[arg(long)]
        count: Option<usize>,

        /// Character drawn at each offset
        #[arg(long)]
        marker: Option<char>,
    },
}
