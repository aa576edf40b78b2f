//! Error types for the CLI

use interpreter::ExecutionFault;
use thiserror::Error;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// A program was aborted by a rejected instruction
    #[error("execution aborted: {0}")]
    Fault(#[from] ExecutionFault),

    /// Writing trace or report output failed
    #[error("output error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
