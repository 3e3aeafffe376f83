//! Async wrapper around the `mediainfo` command-line tool.
//!
//! Options are forwarded to mediainfo as-is, with `--Output=JSON` added when
//! the caller did not choose an output format. The exit code and the parsed
//! (or raw) standard output come back as an [`InvocationResult`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mediawrap_core::{MediaInfo, MediaInfoConfig};
//!
//! # async fn run() -> mediawrap_core::CoreResult<()> {
//! let mediainfo = MediaInfo::ready(MediaInfoConfig::default()).await?;
//!
//! let result = mediainfo.get(["/media/clip.mkv"]).await?;
//! if let Some(json) = result.info.as_structured() {
//!     println!("exit code {}: {}", result.exit_code, json);
//! }
//!
//! let xml = mediainfo.get(["/media/clip.mkv", "--Output=XML"]).await?;
//! assert!(xml.info.as_raw().is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod external;

// Re-exports for public API
pub use config::{MediaInfoConfig, MediaInfoConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use external::{
    Availability, InvocationResult, MediaInfo, MediaInfoOutput, Preflight, preflight_or_exit,
    set_output_format,
};

/// Runs mediainfo once with a configuration taken from the environment.
///
/// See [`MediaInfoConfig::from_env`]. No preflight check is performed.
pub async fn get<I, S>(params: I) -> CoreResult<InvocationResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MediaInfo::new(MediaInfoConfig::from_env()?)?.get(params).await
}
