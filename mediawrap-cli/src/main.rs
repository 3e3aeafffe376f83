// mediawrap-cli/src/main.rs
//
// Entry point of the `mediawrap` binary.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Setting up console logging.
// - Running the mediainfo preflight check before any invocation.
// - Dispatching to the selected command and exiting with its status.

use clap::Parser;
use mediawrap_cli::{Cli, Commands, config, logging, run_batch, run_check, run_get};
use mediawrap_core::{MediaInfo, preflight_or_exit};
use std::process;

async fn run(cli: Cli) -> anyhow::Result<i32> {
    let mediainfo = MediaInfo::new(config::build_config(&cli))?;

    match cli.command {
        Commands::Get(args) => {
            preflight_or_exit(mediainfo.preflight()).await;
            run_get(&mediainfo, args).await
        }
        Commands::Batch(args) => {
            preflight_or_exit(mediainfo.preflight()).await;
            run_batch(&mediainfo, args).await
        }
        Commands::Check => run_check(&mediainfo).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    process::exit(code);
}
