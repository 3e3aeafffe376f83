// ============================================================================
// mediawrap-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the mediainfo CLI
//
// This module encapsulates everything that touches the external mediainfo
// binary: deciding which output format to request, spawning the tool, and
// checking up front that it can be found at all.
//
// KEY COMPONENTS:
// - Output format defaulting (--Output=JSON unless the caller picked one)
// - MediaInfo invoker and its InvocationResult
// - Preflight availability check

// ============================================================================
// SUBMODULES
// ============================================================================

/// Recognition and defaulting of `--Output=<format>` selectors
pub mod output_format;

/// Running mediainfo and packaging its exit code and output
pub mod mediainfo_executor;

/// Resolving the mediainfo executable before first use
pub mod preflight;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use mediainfo_executor::{InvocationResult, MediaInfo, MediaInfoOutput};
pub use output_format::{is_output_format_option, output_format, set_output_format};
pub use preflight::{Availability, Preflight, is_command_available, preflight_or_exit};
