//! Error types for sitemap generation.

use thiserror::Error;

use crate::SessionState;

/// Main error type for the sitemapgen library.
#[derive(Debug, Error)]
pub enum SiteMapError {
    /// Mandatory configuration is missing or out of range.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Unknown sitemap format name.
    #[error("Format '{0}' is not supported. Expected 'xml' or 'text'")]
    UnsupportedFormat(String),

    /// Entry location outside the configured base URL.
    #[error("{loc} is not under {base_url}")]
    OutOfBaseUrl { loc: String, base_url: String },

    /// Extension supplied with an entry was not declared when the sitemap was initialized.
    #[error("Extension {prefix}/{namespace} not initialized")]
    ExtensionNotDeclared { prefix: String, namespace: String },

    /// robots.txt group without a user agent.
    #[error("User agent must be specified for robots.txt group {group}, use * for all")]
    MissingUserAgent { group: usize },

    /// Temporary file name registered twice.
    #[error("Temporary file {0} already exists")]
    DuplicateResourceName(String),

    /// Temporary file name was never registered.
    #[error("Temporary file {0} not found")]
    ResourceNotFound(String),

    /// Operation called outside of the session state that allows it.
    #[error("Cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    /// Priority outside of `[0.0, 1.0]`.
    #[error("Priority {0} is out of range 0.0..=1.0")]
    InvalidPriority(f64),

    /// Input line could not be turned into an entry.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Writing to a sink or touching the file system failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON entry deserialization failed.
    #[error("JSON entry parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for sitemap operations.
pub type Result<T> = std::result::Result<T, SiteMapError>;
