// mediawrap-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediawrap: mediainfo wrapper with JSON output by default",
    long_about = "Runs mediainfo via mediawrap-core and prints its exit code together with the parsed output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// mediainfo executable to run (name on PATH or full path)
    #[arg(long, value_name = "PATH", env = "MEDIAWRAP_MEDIAINFO", global = true)]
    pub mediainfo: Option<String>,

    /// Maximum number of mediainfo processes running at once (unbounded if unset)
    #[arg(
        long,
        value_name = "N",
        env = "MEDIAWRAP_MAX_CONCURRENT",
        global = true,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_concurrent: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs mediainfo with the given options and prints {exitCode, info}
    Get(GetArgs),
    /// Runs mediainfo on several files concurrently
    Batch(BatchArgs),
    /// Checks that mediainfo can be found and prints its version
    Check,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Print only the info payload (raw text is printed verbatim)
    #[arg(long)]
    pub info_only: bool,

    /// Options and target file passed through to mediainfo, in any order
    #[arg(
        required = true,
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Output format requested for every file, e.g. XML (defaults to JSON)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Files to analyze
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
