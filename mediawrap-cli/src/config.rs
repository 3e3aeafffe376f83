// mediawrap-cli/src/config.rs
//
// Turns the parsed command line into a core configuration.

use crate::cli::Cli;
use mediawrap_core::{MediaInfoConfig, MediaInfoConfigBuilder};

/// Builds the invoker configuration from global CLI flags. clap already
/// folds the MEDIAWRAP_* environment variables into these flags.
pub fn build_config(cli: &Cli) -> MediaInfoConfig {
    let mut builder = MediaInfoConfigBuilder::new();
    if let Some(command) = &cli.mediainfo {
        builder = builder.command(command.clone());
    }
    if let Some(limit) = cli.max_concurrent {
        builder = builder.max_concurrent_invocations(limit);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "mediawrap",
            "--mediainfo",
            "/opt/mediainfo",
            "--max-concurrent",
            "2",
            "check",
        ])
        .unwrap();
        let config = build_config(&cli);
        assert_eq!(config.command, "/opt/mediainfo");
        assert_eq!(config.max_concurrent_invocations, Some(2));
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        assert!(Cli::try_parse_from(["mediawrap", "--max-concurrent", "0", "check"]).is_err());
    }

    #[test]
    fn test_get_keeps_hyphenated_options() {
        let cli = Cli::try_parse_from(["mediawrap", "get", "clip.mkv", "--Output=XML", "--Full"])
            .unwrap();
        match cli.command {
            crate::cli::Commands::Get(args) => {
                assert_eq!(args.args, vec!["clip.mkv", "--Output=XML", "--Full"]);
                assert!(!args.info_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
