//! Configuration loading errors.

use crate::grid::GridMapError;

/// Config load error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values parsed but do not describe a valid map
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] GridMapError),
}
