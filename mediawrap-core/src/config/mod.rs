//! Configuration structures and constants for the mediawrap-core library.
//!
//! This module describes which executable is invoked and how many invocations
//! may run at once.

mod builder;

use crate::error::{CoreError, CoreResult};

pub use builder::MediaInfoConfigBuilder;

// Default constants

/// Name of the external tool resolved through `PATH`.
pub const DEFAULT_MEDIAINFO_COMMAND: &str = "mediainfo";

/// Output format selector appended when the caller did not pick one.
/// mediainfo's own default is plain text; the wrapper prefers JSON.
pub const DEFAULT_OUTPUT_FORMAT: &str = "--Output=JSON";

/// Environment variable overriding [`MediaInfoConfig::command`].
pub const ENV_MEDIAINFO_COMMAND: &str = "MEDIAWRAP_MEDIAINFO";

/// Environment variable setting [`MediaInfoConfig::max_concurrent_invocations`].
pub const ENV_MAX_CONCURRENT: &str = "MEDIAWRAP_MAX_CONCURRENT";

/// Configuration for the mediainfo invoker.
///
/// # Examples
///
/// ```rust
/// use mediawrap_core::config::MediaInfoConfigBuilder;
///
/// let config = MediaInfoConfigBuilder::new()
///     .command("/usr/local/bin/mediainfo")
///     .max_concurrent_invocations(4)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInfoConfig {
    /// Executable name or path of the external tool
    pub command: String,

    /// Upper bound on simultaneously running child processes.
    /// `None` leaves spawning unbounded.
    pub max_concurrent_invocations: Option<usize>,
}

impl Default for MediaInfoConfig {
    fn default() -> Self {
        Self {
            command: DEFAULT_MEDIAINFO_COMMAND.to_string(),
            max_concurrent_invocations: None,
        }
    }
}

impl MediaInfoConfig {
    /// Creates a configuration for the given executable.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    /// Builds a configuration from `MEDIAWRAP_MEDIAINFO` and
    /// `MEDIAWRAP_MAX_CONCURRENT`, falling back to defaults for unset values.
    pub fn from_env() -> CoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = MediaInfoConfigBuilder::new();

        if let Some(command) = lookup(ENV_MEDIAINFO_COMMAND).filter(|c| !c.trim().is_empty()) {
            log::debug!("Using mediainfo command from {}: {}", ENV_MEDIAINFO_COMMAND, command);
            builder = builder.command(command);
        }

        if let Some(raw) = lookup(ENV_MAX_CONCURRENT) {
            let limit = raw.trim().parse::<usize>().map_err(|e| {
                CoreError::Config(format!("{} must be a positive integer, got '{}': {}", ENV_MAX_CONCURRENT, raw, e))
            })?;
            builder = builder.max_concurrent_invocations(limit);
        }

        let config = builder.build();
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be used to build an invoker.
    pub fn validate(&self) -> CoreResult<()> {
        if self.command.trim().is_empty() {
            return Err(CoreError::Config("mediainfo command must not be empty".to_string()));
        }
        if self.max_concurrent_invocations == Some(0) {
            return Err(CoreError::Config(
                "max_concurrent_invocations must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = MediaInfoConfig::default();
        assert_eq!(config.command, "mediainfo");
        assert_eq!(config.max_concurrent_invocations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_without_variables_uses_defaults() {
        let config = MediaInfoConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MediaInfoConfig::default());
    }

    #[test]
    fn test_lookup_overrides_command_and_limit() {
        let config = MediaInfoConfig::from_lookup(lookup_from(&[
            (ENV_MEDIAINFO_COMMAND, "/opt/mi/bin/mediainfo"),
            (ENV_MAX_CONCURRENT, " 3 "),
        ]))
        .unwrap();
        assert_eq!(config.command, "/opt/mi/bin/mediainfo");
        assert_eq!(config.max_concurrent_invocations, Some(3));
    }

    #[test]
    fn test_lookup_ignores_blank_command() {
        let config =
            MediaInfoConfig::from_lookup(lookup_from(&[(ENV_MEDIAINFO_COMMAND, "  ")])).unwrap();
        assert_eq!(config.command, DEFAULT_MEDIAINFO_COMMAND);
    }

    #[test]
    fn test_lookup_rejects_bad_limit() {
        let err = MediaInfoConfig::from_lookup(lookup_from(&[(ENV_MAX_CONCURRENT, "many")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let err =
            MediaInfoConfig::from_lookup(lookup_from(&[(ENV_MAX_CONCURRENT, "0")])).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_empty_command() {
        let config = MediaInfoConfig::new("");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
