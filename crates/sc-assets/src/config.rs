//! Resolver configuration.

use std::path::{Path, PathBuf};

/// Default fill for avatar placeholders.
pub const DEFAULT_AVATAR_COLOR: &str = "#95A5A6";

/// Default gradient start for poster placeholders.
pub const DEFAULT_POSTER_COLOR: &str = "#3498DB";

/// Configuration for an [`crate::AssetResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Directory that relative local paths are joined to.
    pub asset_root: PathBuf,
    /// Fill colour of avatar placeholders.
    pub avatar_color: String,
    /// Gradient start colour of poster placeholders.
    pub poster_color: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("."),
            avatar_color: DEFAULT_AVATAR_COLOR.to_string(),
            poster_color: DEFAULT_POSTER_COLOR.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Set the asset root directory.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Set the avatar placeholder colour.
    pub fn with_avatar_color(mut self, color: impl Into<String>) -> Self {
        self.avatar_color = color.into();
        self
    }

    /// Set the poster placeholder colour.
    pub fn with_poster_color(mut self, color: impl Into<String>) -> Self {
        self.poster_color = color.into();
        self
    }

    /// Where a local reference lives on disk. Absolute paths are kept.
    pub fn locate(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}
