//! Error types for the font-building collaborators

use thiserror::Error;

/// Errors raised while updating the config, talking to the font service
/// or extracting the generated webfont
#[derive(Error, Debug)]
pub enum ClientError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The font service rejected a request
    #[error("font service returned HTTP {code}: {body}")]
    Status {
        /// HTTP status code
        code: u16,
        /// Response body, as returned by the service
        body: String,
    },

    /// Invalid webfont ZIP archive
    #[error("invalid webfont archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON error while reading or writing the configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration artifact is not what a fontello config looks like
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
