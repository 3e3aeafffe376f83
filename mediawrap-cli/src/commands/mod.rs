//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. Every
//! command returns the process exit status it wants the binary to use.

/// `get`: a single pass-through invocation.
pub mod get;

/// `batch`: one invocation per file, run concurrently.
pub mod batch;

/// `check`: preflight status and tool version.
pub mod check;

/// Maps a mediainfo exit code onto a process exit status. Codes outside the
/// portable 0..=255 range (including the -1 used for signal deaths) become 1.
pub fn exit_status(code: i32) -> i32 {
    if (0..=255).contains(&code) { code } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::exit_status;

    #[test]
    fn test_exit_status_mapping() {
        assert_eq!(exit_status(0), 0);
        assert_eq!(exit_status(1), 1);
        assert_eq!(exit_status(255), 255);
        assert_eq!(exit_status(-1), 1);
        assert_eq!(exit_status(256), 1);
    }
}
