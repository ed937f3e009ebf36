//! Common error types for the import gateway

use thiserror::Error;

/// Common result type for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds surfaced by the gateway
///
/// A tool run that exits nonzero is NOT an error here: the tool was
/// observed successfully and its verdict travels in `ToolOutcome`.
/// These variants cover failures local to the gateway itself.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The record tool could not be spawned or its output could not be collected
    #[error("Failed to invoke record tool: {0}")]
    ToolInvocation(String),

    /// The record tool exceeded the configured deadline and was killed
    #[error("Record tool timed out after {0}s")]
    ToolTimeout(u64),
}
