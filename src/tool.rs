//! Record-management tool invocation
//!
//! The tool is a black-box CLI identified only by its argument
//! contract: `<tool> oai:add:record <identifier> <metadataPrefix>
//! <payload> --no-interaction`, exit 0 meaning accepted. Every
//! caller-controlled value travels as its own argv element through
//! `tokio::process::Command`; no shell ever sees the request, so
//! metacharacters in an identifier stay inert.

use crate::config::Config;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Subcommand understood by the record-management tool
const ADD_RECORD_COMMAND: &str = "oai:add:record";

/// Result of one tool run that actually completed
#[derive(Debug)]
pub struct ToolOutcome {
    /// Exit code 0
    pub success: bool,
    /// Raw exit code, None when the tool died to a signal
    pub exit_code: Option<i32>,
    /// Combined stdout/stderr text, surfaced verbatim to the caller
    pub output: String,
}

/// Handle on the configured record-management tool
#[derive(Debug, Clone)]
pub struct RecordTool {
    path: PathBuf,
    timeout: Duration,
}

impl RecordTool {
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.tool_path.clone(),
            timeout: Duration::from_secs(config.tool_timeout_secs),
        }
    }

    /// Run one add/update against the repository
    ///
    /// Blocks the calling task until the tool exits or the deadline
    /// expires. On expiry the child is killed (`kill_on_drop`) and
    /// `Error::ToolTimeout` is returned; a spawn or capture failure is
    /// `Error::ToolInvocation`. A nonzero exit is NOT an error — the
    /// verdict comes back in `ToolOutcome` with the full diagnostic
    /// text either way.
    pub async fn add_record(
        &self,
        identifier: &str,
        metadata_prefix: &str,
        payload: &Path,
    ) -> Result<ToolOutcome> {
        debug!(
            tool = %self.path.display(),
            identifier = %identifier,
            metadata_prefix = %metadata_prefix,
            payload = %payload.display(),
            "Invoking record tool"
        );

        let child = Command::new(&self.path)
            .arg(ADD_RECORD_COMMAND)
            .arg(identifier)
            .arg(metadata_prefix)
            .arg(payload)
            .arg("--no-interaction")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::ToolInvocation(e.to_string()))?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| Error::ToolInvocation(e.to_string()))?,
            // Dropping the timed-out future kills the child
            Err(_) => return Err(Error::ToolTimeout(self.timeout.as_secs())),
        };

        let combined = combine_streams(&output.stdout, &output.stderr);

        debug!(
            exit_code = ?output.status.code(),
            output_len = combined.len(),
            "Record tool finished"
        );

        Ok(ToolOutcome {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: combined,
        })
    }
}

/// Merge captured stdout and stderr into one diagnostic text
///
/// Order within each stream is preserved; stdout comes first. Trailing
/// newlines are trimmed so single-line tool output compares cleanly.
fn combine_streams(stdout: &[u8], stderr: &[u8]) -> String {
    let stdout = String::from_utf8_lossy(stdout);
    let stderr = String::from_utf8_lossy(stderr);
    let stdout = stdout.trim_end_matches('\n');
    let stderr = stderr.trim_end_matches('\n');

    match (stdout.is_empty(), stderr.is_empty()) {
        (false, false) => format!("{}\n{}", stdout, stderr),
        (false, true) => stdout.to_string(),
        (true, _) => stderr.to_string(),
    }
}
