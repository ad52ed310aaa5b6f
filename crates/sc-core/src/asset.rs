use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A logical reference to an image: a local file, a remote URL, or nothing.
///
/// Serialized as a plain string. Strings starting with `http://` or
/// `https://` are remote, the empty string is [`AssetRef::Absent`], and
/// anything else is a local path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetRef {
    /// A file on the local filesystem, usually relative to the asset root.
    Local(PathBuf),
    /// An image fetched over HTTP.
    Remote(String),
    /// No image; a placeholder is always used.
    #[default]
    Absent,
}

impl AssetRef {
    /// Classify a raw reference string.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            Self::Absent
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Remote(raw.to_string())
        } else {
            Self::Local(PathBuf::from(raw))
        }
    }

    /// Reference to a poster under the conventional `posters/` directory.
    pub fn poster(slug: &str) -> Self {
        Self::Local(Path::new("posters").join(format!("{slug}.jpg")))
    }

    /// Reference to an avatar under the conventional `avatars/` directory.
    pub fn avatar(slug: &str) -> Self {
        Self::Local(Path::new("avatars").join(format!("{slug}.jpg")))
    }

    /// Returns true if no image is referenced.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<String> for AssetRef {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<AssetRef> for String {
    fn from(asset: AssetRef) -> Self {
        asset.to_string()
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{url}"),
            Self::Absent => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_references() {
        assert_eq!(
            AssetRef::parse("posters/breaking_bad.jpg"),
            AssetRef::Local(PathBuf::from("posters/breaking_bad.jpg"))
        );
        assert_eq!(
            AssetRef::parse("https://example.com/p.jpg"),
            AssetRef::Remote("https://example.com/p.jpg".to_string())
        );
        assert_eq!(AssetRef::parse("   "), AssetRef::Absent);
    }

    #[test]
    fn conventional_paths() {
        assert_eq!(
            AssetRef::avatar("jon_snow").to_string(),
            Path::new("avatars").join("jon_snow.jpg").display().to_string()
        );
        assert!(matches!(AssetRef::poster("x"), AssetRef::Local(_)));
    }

    #[test]
    fn serde_uses_plain_strings() {
        let json = serde_json::to_string(&AssetRef::Remote("http://a/b.png".into())).unwrap();
        assert_eq!(json, "\"http://a/b.png\"");
        let back: AssetRef = serde_json::from_str("\"\"").unwrap();
        assert!(back.is_absent());
    }
}
