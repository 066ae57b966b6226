//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// No document/window equivalent is available
    #[error("No document available: {0}")]
    NoDocument(String),

    /// Capability probing failed
    #[error("Capability probe failed: {0}")]
    Probe(String),

    /// Failed to register or remove an event listener
    #[error("Event listener error: {0}")]
    Listener(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
