//! Error types for asset loading.

use thiserror::Error;

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;

/// Why an image could not be obtained.
///
/// These never escape [`crate::AssetResolver::resolve`]; they become
/// placeholder images plus an [`crate::AssetWarning`].
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read or the server refused the request.
    #[error("{reference}: {reason}")]
    Unavailable {
        /// The path or URL that failed.
        reference: String,
        /// Human-readable cause.
        reason: String,
    },

    /// Transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
