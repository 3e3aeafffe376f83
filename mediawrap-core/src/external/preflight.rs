//! Startup check that the mediainfo executable can be resolved.
//!
//! The check goes through the shell's `command -v` builtin so that it follows
//! the same `PATH` lookup rules as an interactive shell. Its outcome is cached
//! per [`Preflight`] value: Unchecked until the first `check`, then
//! Found or NotFound for the rest of its lifetime.
//!
//! `command -v` also succeeds for any existing path, so the resolved path must
//! additionally be a regular file with an execute bit.

use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};
use std::fs::Metadata;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::OnceCell;

/// Shell used for path resolution.
const RESOLVER_SHELL: &str = "sh";

/// `$1` is bound to the command name so it is never interpreted by the shell.
const RESOLVER_SCRIPT: &str = r#"command -v "$1""#;

/// Result of a completed preflight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Found,
    NotFound,
}

/// Asks the shell whether `command` resolves to an executable.
///
/// Returns `Ok(false)` when the lookup exits non-zero or resolves to
/// something that cannot be executed (a builtin, a directory, a file without
/// execute permission). An error means the shell itself could not be run or
/// awaited.
pub async fn is_command_available(command: &str) -> CoreResult<bool> {
    let child = Command::new(RESOLVER_SHELL)
        .arg("-c")
        .arg(RESOLVER_SCRIPT)
        .arg(RESOLVER_SHELL)
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| command_start_error(RESOLVER_SHELL, e))?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| command_wait_error(RESOLVER_SHELL, e))?;

    log::debug!("Path lookup for '{}' exited with {}", command, output.status);
    if !output.status.success() {
        return Ok(false);
    }

    let resolved = String::from_utf8_lossy(&output.stdout).trim().to_string();
    // Builtins, functions and aliases resolve to a bare name.
    if !resolved.contains('/') {
        log::debug!("'{}' resolved to '{}', which is not a file", command, resolved);
        return Ok(false);
    }

    let executable = is_executable_file(Path::new(&resolved));
    if !executable {
        log::warn!("'{}' resolved to '{}', which is not an executable file", command, resolved);
    }
    Ok(executable)
}

fn is_executable_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && has_execute_bit(&metadata),
        Err(_) => false,
    }
}

#[cfg(unix)]
fn has_execute_bit(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_execute_bit(_metadata: &Metadata) -> bool {
    true
}

/// One-shot availability check for a single executable.
#[derive(Debug)]
pub struct Preflight {
    command: String,
    state: OnceCell<Availability>,
}

impl Preflight {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            state: OnceCell::new(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Outcome of the check, or `None` while it has not completed yet.
    pub fn status(&self) -> Option<Availability> {
        self.state.get().copied()
    }

    /// Runs the check on first call and returns the cached outcome afterwards.
    /// Concurrent callers wait on the same lookup.
    pub async fn check(&self) -> CoreResult<Availability> {
        let availability = self
            .state
            .get_or_try_init(|| async {
                let availability = if is_command_available(&self.command).await? {
                    log::debug!("Found dependency: {}", self.command);
                    Availability::Found
                } else {
                    log::warn!("Dependency '{}' not found.", self.command);
                    Availability::NotFound
                };
                Ok::<Availability, CoreError>(availability)
            })
            .await?;
        Ok(*availability)
    }

    /// Like [`Preflight::check`], but turns `NotFound` into
    /// [`CoreError::DependencyNotFound`].
    pub async fn require(&self) -> CoreResult<()> {
        match self.check().await? {
            Availability::Found => Ok(()),
            Availability::NotFound => Err(CoreError::DependencyNotFound(self.command.clone())),
        }
    }
}

/// Host-level startup guard: terminates the process with status 1 when the
/// command cannot be resolved or the lookup itself fails. On success the
/// outcome stays cached in `preflight`.
pub async fn preflight_or_exit(preflight: &Preflight) {
    let command = preflight.command();
    match preflight.check().await {
        Ok(Availability::Found) => {}
        Ok(Availability::NotFound) => {
            eprintln!("\"{}\" command not found.", command);
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Preflight check for '{}' failed: {}", command, e);
            eprintln!("Preflight check for \"{}\" failed: {}", command, e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shell_is_found() {
        assert!(is_command_available("sh").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_command_is_not_found() {
        let preflight = Preflight::new("mediawrap-no-such-tool-3f9c1");
        assert_eq!(preflight.status(), None);
        assert_eq!(preflight.check().await.unwrap(), Availability::NotFound);
        assert_eq!(preflight.status(), Some(Availability::NotFound));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_executable_file_is_not_found() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mediainfo");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o644)).unwrap();

        let preflight = Preflight::new(tool.to_string_lossy());
        assert_eq!(preflight.check().await.unwrap(), Availability::NotFound);
    }

    #[tokio::test]
    async fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let preflight = Preflight::new(dir.path().to_string_lossy());
        assert_eq!(preflight.check().await.unwrap(), Availability::NotFound);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_executable_file_is_found() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mediainfo");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let preflight = Preflight::new(tool.to_string_lossy());
        assert_eq!(preflight.check().await.unwrap(), Availability::Found);
    }

    #[tokio::test]
    async fn test_builtin_is_not_found() {
        // `command -v` knows `cd`, but it cannot be spawned as a process.
        assert!(!is_command_available("cd").await.unwrap());
    }

    #[tokio::test]
    async fn test_require_reports_missing_dependency() {
        let preflight = Preflight::new("mediawrap-no-such-tool-3f9c1");
        match preflight.require().await {
            Err(CoreError::DependencyNotFound(name)) => {
                assert_eq!(name, "mediawrap-no-such-tool-3f9c1")
            }
            other => panic!("expected DependencyNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_name_is_not_evaluated_by_shell() {
        // Would succeed if the argument were spliced into the script.
        assert!(!is_command_available("true; sh").await.unwrap());
    }
}
