//! Error types for scroll_nav_core

use scroll_nav_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur while constructing a scroll controller
///
/// Every variant is a construction-time failure; a successfully constructed
/// controller has no failing operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollNavError {
    /// Constructed outside a browser-like environment
    #[error("scroll-nav requires a browser-like environment with a document")]
    Environment,

    /// No element was supplied
    #[error("scroll-nav requires an element to track")]
    MissingElement,

    /// The environment lacks frame scheduling or class-list support
    #[error("scroll-nav is not supported in this environment ({platform})")]
    Unsupported {
        /// Name of the platform that failed the capability probe
        platform: &'static str,
    },

    /// Options failed validation
    #[error("Invalid scroll-nav options: {0}")]
    InvalidOptions(String),

    /// Options could not be parsed
    #[error("Failed to parse scroll-nav options: {0}")]
    Parse(String),

    /// Platform error (event subscription, probing)
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl From<serde_json::Error> for ScrollNavError {
    fn from(err: serde_json::Error) -> Self {
        ScrollNavError::Parse(err.to_string())
    }
}

/// Result type for scroll_nav_core operations
pub type Result<T> = std::result::Result<T, ScrollNavError>;
