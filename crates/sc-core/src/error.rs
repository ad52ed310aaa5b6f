use std::path::PathBuf;

/// Alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading or querying a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested show title does not exist in the catalog.
    #[error("show not found: \"{0}\"")]
    UnknownShow(String),

    /// A show with the same title already exists.
    #[error("show already exists: \"{0}\"")]
    DuplicateShow(String),

    /// The catalog has no shows at all.
    #[error("catalog is empty")]
    Empty,

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
