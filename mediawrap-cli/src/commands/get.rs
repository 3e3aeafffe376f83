use anyhow::Context;
use mediawrap_core::{MediaInfo, MediaInfoOutput};

use crate::cli::GetArgs;
use crate::commands::exit_status;

/// Runs mediainfo once and prints the result. The exit status mirrors the
/// tool's own exit code.
pub async fn run_get(mediainfo: &MediaInfo, args: GetArgs) -> anyhow::Result<i32> {
    let result = mediainfo
        .get(args.args)
        .await
        .context("mediainfo invocation failed")?;

    log::debug!(
        "mediainfo exited with {} ({} output)",
        result.exit_code,
        if result.info.is_structured() { "JSON" } else { "raw" }
    );

    if args.info_only {
        match &result.info {
            MediaInfoOutput::Structured(value) => println!("{}", serde_json::to_string_pretty(value)?),
            MediaInfoOutput::Raw(text) => println!("{}", text),
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(exit_status(result.exit_code))
}
