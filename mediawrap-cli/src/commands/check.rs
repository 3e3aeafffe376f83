use mediawrap_core::{Availability, MediaInfo};

use crate::output::{print_error, print_heading, print_info, print_success};

/// Runs the preflight check and, when the tool is found, prints its version.
pub async fn run_check(mediainfo: &MediaInfo) -> anyhow::Result<i32> {
    let command = mediainfo.config().command.clone();
    print_heading("mediainfo");
    print_info("Command", &command);

    match mediainfo.preflight().check().await? {
        Availability::Found => {
            print_info("Status", "found");
            match mediainfo.version().await {
                Ok(version) => {
                    for line in version.lines() {
                        print_info("Version", line);
                    }
                }
                Err(e) => print_error(&format!("Failed to query version: {}", e)),
            }
            print_success("External dependency check passed.");
            Ok(0)
        }
        Availability::NotFound => {
            print_info("Status", "not found");
            print_error(&format!("\"{}\" command not found.", command));
            Ok(1)
        }
    }
}
