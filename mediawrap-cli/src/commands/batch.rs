use anyhow::{Context, bail};
use mediawrap_core::external::is_output_format_option;
use mediawrap_core::{InvocationResult, MediaInfo};
use serde::Serialize;
use std::path::Path;

use crate::cli::BatchArgs;

/// One line of the batch report.
#[derive(Debug, Serialize)]
pub struct BatchEntry {
    pub file: String,
    #[serde(flatten)]
    pub result: InvocationResult,
}

/// Path as passed to mediainfo. Non-UTF-8 paths are rejected rather than
/// lossily converted into a different path.
fn file_arg(file: &Path) -> anyhow::Result<String> {
    match file.to_str() {
        Some(path) => Ok(path.to_string()),
        None => bail!("Path is not valid UTF-8: {}", file.display()),
    }
}

/// Builds the option list for one file of the batch.
fn file_options(file: &Path, format: Option<&str>) -> anyhow::Result<Vec<String>> {
    let mut options = vec![file_arg(file)?];
    if let Some(format) = format {
        options.push(format!("--Output={}", format));
    }
    Ok(options)
}

/// Runs one invocation per file concurrently and prints a JSON array in
/// input order. Any non-zero mediainfo exit makes the command exit 1.
pub async fn run_batch(mediainfo: &MediaInfo, args: BatchArgs) -> anyhow::Result<i32> {
    if let Some(format) = args.format.as_deref()
        && !is_output_format_option(&format!("--Output={}", format))
    {
        bail!("Invalid output format '{}': expected letters, digits or '_'", format);
    }

    // Every path is checked before the first process is started.
    let jobs = args
        .files
        .iter()
        .map(|file| file_options(file, args.format.as_deref()))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut handles = Vec::with_capacity(jobs.len());
    for options in jobs {
        let mediainfo = mediainfo.clone();
        handles.push(tokio::spawn(async move { mediainfo.get(options).await }));
    }

    let mut entries = Vec::with_capacity(handles.len());
    for (file, handle) in args.files.iter().zip(handles) {
        let result = handle
            .await
            .context("batch task panicked")?
            .with_context(|| format!("mediainfo invocation failed for {}", file.display()))?;
        if !result.success() {
            log::warn!("mediainfo exited with {} for {}", result.exit_code, file.display());
        }
        entries.push(BatchEntry {
            file: file_arg(file)?,
            result,
        });
    }

    println!("{}", serde_json::to_string_pretty(&entries)?);

    let all_ok = entries.iter().all(|entry| entry.result.success());
    Ok(if all_ok { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_options_without_format() {
        let options = file_options(&PathBuf::from("/media/a b.mkv"), None).unwrap();
        assert_eq!(options, vec!["/media/a b.mkv".to_string()]);
    }

    #[test]
    fn test_file_options_with_format() {
        let options = file_options(&PathBuf::from("clip.mp4"), Some("XML")).unwrap();
        assert_eq!(options, vec!["clip.mp4".to_string(), "--Output=XML".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let file = PathBuf::from(OsStr::from_bytes(b"clip-\xff.mkv"));
        let err = file_options(&file, None).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
