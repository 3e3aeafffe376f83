// mediawrap-cli/src/lib.rs
//
// Library portion of the mediawrap CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{BatchArgs, Cli, Commands, GetArgs};
pub use commands::batch::run_batch;
pub use commands::check::run_check;
pub use commands::get::run_get;
