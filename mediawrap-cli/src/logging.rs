// ============================================================================
// mediawrap-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Console logger setup for the mediawrap binary
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Spawned command lines, exit codes and mediainfo stderr
// --verbose forces debug level regardless of RUST_LOG.

use log::LevelFilter;
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write};

/// Returns the current local time formatted as "HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Initializes the global logger. Log lines go to stderr so that stdout only
/// carries command output.
pub fn init(verbose: bool) {
    let color = std::io::stderr().is_terminal();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder.format(move |buf, record| {
        let level = match record.level() {
            log::Level::Error => "ERROR",
            log::Level::Warn => "WARN ",
            log::Level::Info => "INFO ",
            log::Level::Debug => "DEBUG",
            log::Level::Trace => "TRACE",
        };

        if !color {
            return writeln!(buf, "{} {} {}", get_timestamp(), level, record.args());
        }

        let level = match record.level() {
            log::Level::Error => level.bright_red().to_string(),
            log::Level::Warn => level.yellow().to_string(),
            log::Level::Info => level.green().to_string(),
            log::Level::Debug => level.blue().to_string(),
            log::Level::Trace => level.magenta().to_string(),
        };
        writeln!(buf, "{} {} {}", get_timestamp().dimmed(), level, record.args())
    });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
