// ============================================================================
// mediawrap-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for mediawrap-core
//
// A non-zero mediainfo exit status is never an error here; it is reported in
// the invocation result. The variants below cover what cannot be absorbed
// into a result value: a missing tool, a child process that cannot be
// launched or awaited, and output that is not valid UTF-8.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors produced by the core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Required external command not found: {0}")]
    DependencyNotFound(String),

    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("Failed to wait for command '{0}': {1}")]
    CommandWait(String, #[source] io::Error),

    #[error("Command '{0}' exited with status {1}: {2}")]
    CommandFailed(String, i32, String),

    #[error("Output of command '{0}' is not valid UTF-8: {1}")]
    OutputDecode(String, #[source] FromUtf8Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for `cmd`.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] from a finished process.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: std::process::ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status.code().unwrap_or(-1), stderr.into())
}

/// Builds a [`CoreError::CommandWait`] for `cmd`.
pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_start_error_message() {
        let err = command_start_error(
            "mediainfo",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to start command 'mediainfo': denied");
    }

    #[test]
    fn test_dependency_not_found_message() {
        let err = CoreError::DependencyNotFound("mediainfo".to_string());
        assert!(err.to_string().contains("mediainfo"));
    }
}
