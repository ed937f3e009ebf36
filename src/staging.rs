//! Staged payload lifecycle
//!
//! One uniquely named temp file per request, holding the verbatim XML
//! content for exactly as long as the tool invocation needs it. The
//! name derives from a v4 UUID, never from the record identifier: two
//! imports for the same identifier may be in flight at once.

use crate::Result;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Temp file holding one request's XML payload
///
/// Removal happens in `Drop`, so every exit path (tool success, tool
/// rejection, spawn failure, timeout, panic) releases the file. The
/// removal is best-effort: a file already gone is not an error, and a
/// deletion failure never surfaces to the caller.
#[derive(Debug)]
pub struct StagedPayload {
    path: PathBuf,
}

impl StagedPayload {
    /// Write `content` to a fresh uniquely named file under `temp_dir`
    ///
    /// The guard is constructed before the write, so a failed write
    /// still cleans up whatever partial file was created.
    pub async fn write(temp_dir: &Path, content: &str) -> Result<Self> {
        let staged = Self {
            path: temp_dir.join(format!("oai_{}.xml", Uuid::new_v4())),
        };
        tokio::fs::write(&staged.path, content).await?;
        Ok(staged)
    }

    /// Path handed to the record tool as its third argument
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedPayload {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
