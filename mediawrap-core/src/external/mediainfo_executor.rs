//! MediaInfo invocation and result packaging
//!
//! Each call runs the external tool once as a child process, records its exit
//! code and turns its standard output into either parsed JSON or raw text.
//! A non-zero exit is reported in the result, never as an error.

use super::output_format::set_output_format;
use super::preflight::Preflight;
use crate::config::MediaInfoConfig;
use crate::error::{
    CoreError, CoreResult, command_failed_error, command_start_error, command_wait_error,
};
use serde::Serialize;
use serde_json::Value;
use std::process::{Output, Stdio};
use std::sync::Arc;
use tokio::process::Command;
use tokio::sync::Semaphore;

/// Standard output of one invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaInfoOutput {
    /// Output parsed as JSON
    Structured(Value),
    /// Output that was not JSON, minus one trailing newline
    Raw(String),
}

impl MediaInfoOutput {
    /// Parses `text` as JSON and falls back to the text itself.
    pub fn from_stdout(mut text: String) -> Self {
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => MediaInfoOutput::Structured(value),
            Err(e) => {
                log::debug!("mediainfo output is not JSON ({}), keeping raw text", e);
                if text.ends_with('\n') {
                    text.pop();
                }
                MediaInfoOutput::Raw(text)
            }
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, MediaInfoOutput::Structured(_))
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            MediaInfoOutput::Structured(value) => Some(value),
            MediaInfoOutput::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            MediaInfoOutput::Structured(_) => None,
            MediaInfoOutput::Raw(text) => Some(text),
        }
    }
}

/// Exit code and output of one mediainfo run.
///
/// Serializes as `{"exitCode": .., "info": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    /// Process exit code, `-1` if the process was killed by a signal
    pub exit_code: i32,
    pub info: MediaInfoOutput,
}

impl InvocationResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Invoker for the external mediainfo tool.
///
/// Cloning is cheap; clones share the concurrency gate and preflight state.
#[derive(Debug, Clone)]
pub struct MediaInfo {
    config: MediaInfoConfig,
    gate: Option<Arc<Semaphore>>,
    preflight: Arc<Preflight>,
}

impl MediaInfo {
    /// Creates an invoker without checking that the tool exists.
    pub fn new(config: MediaInfoConfig) -> CoreResult<Self> {
        config.validate()?;
        let gate = config
            .max_concurrent_invocations
            .map(|limit| Arc::new(Semaphore::new(limit)));
        let preflight = Arc::new(Preflight::new(config.command.clone()));
        Ok(Self {
            config,
            gate,
            preflight,
        })
    }

    /// Creates an invoker and runs the preflight check before returning it.
    ///
    /// Fails with [`CoreError::DependencyNotFound`] when the tool cannot be
    /// resolved, so a returned invoker is always usable.
    pub async fn ready(config: MediaInfoConfig) -> CoreResult<Self> {
        let invoker = Self::new(config)?;
        invoker.preflight.require().await?;
        Ok(invoker)
    }

    pub fn config(&self) -> &MediaInfoConfig {
        &self.config
    }

    pub fn preflight(&self) -> &Preflight {
        &self.preflight
    }

    /// Runs mediainfo with `params`, defaulting the output format to JSON.
    ///
    /// Options and the target path may come in any order; mediainfo sorts
    /// them out itself.
    pub async fn get<I, S>(&self, params: I) -> CoreResult<InvocationResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = params.into_iter().map(Into::into).collect();
        self.get_with(&mut options).await
    }

    /// Same as [`MediaInfo::get`], but works on the caller's list. The default
    /// format selector is appended to `options` itself.
    pub async fn get_with(&self, options: &mut Vec<String>) -> CoreResult<InvocationResult> {
        set_output_format(options);

        let output = self.run(options).await?;
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.stderr.is_empty() {
            log::debug!(
                "{} stderr: {}",
                self.config.command,
                String::from_utf8_lossy(&output.stderr).trim_end()
            );
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| CoreError::OutputDecode(self.config.command.clone(), e))?;

        Ok(InvocationResult {
            exit_code,
            info: MediaInfoOutput::from_stdout(text),
        })
    }

    /// Version banner printed by `mediainfo --Version`, trimmed.
    pub async fn version(&self) -> CoreResult<String> {
        let output = self.run(&["--Version".to_string()]).await?;
        if !output.status.success() {
            return Err(command_failed_error(
                self.config.command.clone(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        let text = String::from_utf8(output.stdout)
            .map_err(|e| CoreError::OutputDecode(self.config.command.clone(), e))?;
        Ok(text.trim().to_string())
    }

    async fn run(&self, options: &[String]) -> CoreResult<Output> {
        // The semaphore is never closed, so acquire only fails if it were.
        let _permit = match &self.gate {
            Some(gate) => gate.acquire().await.ok(),
            None => None,
        };

        let command = &self.config.command;
        log::debug!("Running: {} {}", command, options.join(" "));

        // stdin is piped but never written; it is closed before waiting.
        let child = Command::new(command)
            .args(options)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                log::error!("Failed to start '{}': {}", command, e);
                command_start_error(command.clone(), e)
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| command_wait_error(command.clone(), e))?;

        log::debug!("{} exited with {}", command, output.status);
        Ok(output)
    }
}
