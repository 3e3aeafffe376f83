// ============================================================================
// mediawrap-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for MediaInfoConfig
//
// Fluent construction of MediaInfoConfig with defaults for every field.
// Validation stays on MediaInfoConfig::validate so that configurations
// assembled by hand and by the builder are checked the same way.

use super::{DEFAULT_MEDIAINFO_COMMAND, MediaInfoConfig};

/// Builder for creating [`MediaInfoConfig`] instances.
#[derive(Debug, Clone)]
pub struct MediaInfoConfigBuilder {
    command: String,
    max_concurrent_invocations: Option<usize>,
}

impl Default for MediaInfoConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaInfoConfigBuilder {
    /// Creates a builder populated with the library defaults.
    pub fn new() -> Self {
        Self {
            command: DEFAULT_MEDIAINFO_COMMAND.to_string(),
            max_concurrent_invocations: None,
        }
    }

    /// Sets the executable name or path of the external tool.
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Bounds the number of child processes running at the same time.
    pub fn max_concurrent_invocations(mut self, limit: usize) -> Self {
        self.max_concurrent_invocations = Some(limit);
        self
    }

    /// Removes any concurrency bound.
    pub fn unbounded(mut self) -> Self {
        self.max_concurrent_invocations = None;
        self
    }

    pub fn build(self) -> MediaInfoConfig {
        MediaInfoConfig {
            command: self.command,
            max_concurrent_invocations: self.max_concurrent_invocations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_match_config_default() {
        assert_eq!(MediaInfoConfigBuilder::new().build(), MediaInfoConfig::default());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = MediaInfoConfigBuilder::new()
            .command("mi")
            .max_concurrent_invocations(2)
            .build();
        assert_eq!(config.command, "mi");
        assert_eq!(config.max_concurrent_invocations, Some(2));

        let config = MediaInfoConfigBuilder::new()
            .max_concurrent_invocations(2)
            .unbounded()
            .build();
        assert_eq!(config.max_concurrent_invocations, None);
    }
}
