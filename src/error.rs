//! Error types for podcast-dl
//!
//! Fallible operations inside the crate return [`Result`]. The two outward
//! boundaries deliberately do not: the feed adapter maps total failure to an
//! empty entry list and the file fetcher maps per-episode failure to `false`,
//! so a bad feed or a dead enclosure host can never abort a run.

use thiserror::Error;

/// Result type alias for podcast-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for podcast-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "feed_url")
        key: Option<String>,
    },

    /// Feed could not be fetched or parsed as RSS or Atom
    #[error("feed error: {0}")]
    Feed(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
