//! Turning [`AssetRef`]s into embeddable images.
//!
//! Resolution never fails: a file that cannot be read or a URL that cannot
//! be fetched is replaced by a placeholder, and the caller gets an
//! [`AssetWarning`] describing what went wrong. Nothing is cached.

use std::fmt;
use std::path::Path;

use sc_core::{AssetRef, Show};

use crate::config::ResolverConfig;
use crate::error::{AssetError, AssetResult};
use crate::fetch::{Fetch, HttpFetcher};
use crate::payload::{ImagePayload, mime_for_path, mime_from_content_type};
use crate::placeholder::{avatar_svg, poster_svg};

/// What an image depicts, which decides the placeholder style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A character portrait.
    Avatar {
        /// Character name, used for the initials.
        name: String,
    },
    /// A show poster.
    Poster {
        /// Show title, printed on the placeholder.
        title: String,
    },
}

impl Subject {
    /// An avatar subject.
    pub fn avatar(name: impl Into<String>) -> Self {
        Self::Avatar { name: name.into() }
    }

    /// A poster subject.
    pub fn poster(title: impl Into<String>) -> Self {
        Self::Poster {
            title: title.into(),
        }
    }
}

/// A fallback that the user should hear about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWarning {
    /// The path or URL that failed.
    pub reference: String,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not load {}, using a placeholder ({})",
            self.reference, self.reason
        )
    }
}

/// The image to show, plus a warning if it is a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// The image bytes.
    pub payload: ImagePayload,
    /// Set when a real image was expected but a placeholder was used.
    pub warning: Option<AssetWarning>,
}

/// Every image a show page needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowImages {
    /// The poster.
    pub poster: Resolved,
    /// Avatars keyed by character name, in character order.
    pub avatars: Vec<(String, Resolved)>,
}

impl ShowImages {
    /// The avatar for a character (case-insensitive).
    pub fn avatar(&self, name: &str) -> Option<&Resolved> {
        self.avatars
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, r)| r)
    }

    /// All fallback warnings, poster first.
    pub fn warnings(&self) -> impl Iterator<Item = &AssetWarning> {
        std::iter::once(&self.poster)
            .chain(self.avatars.iter().map(|(_, r)| r))
            .filter_map(|r| r.warning.as_ref())
    }
}

/// Loads images from disk or the network, synthesizing placeholders on
/// failure.
pub struct AssetResolver {
    config: ResolverConfig,
    fetcher: Box<dyn Fetch>,
}

impl AssetResolver {
    /// A resolver that fetches remote images over HTTP.
    pub fn new(config: ResolverConfig) -> AssetResult<Self> {
        Ok(Self::with_fetcher(config, HttpFetcher::new()?))
    }

    /// A resolver using a custom fetcher.
    pub fn with_fetcher(config: ResolverConfig, fetcher: impl Fetch + 'static) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
        }
    }

    /// The resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Produce an image for `asset`.
    pub fn resolve(&self, asset: &AssetRef, subject: &Subject) -> Resolved {
        let loaded = match asset {
            AssetRef::Local(path) => self.read_local(path),
            AssetRef::Remote(url) => self.fetch_remote(url),
            AssetRef::Absent => {
                return Resolved {
                    payload: self.placeholder(subject),
                    warning: None,
                };
            }
        };

        match loaded {
            Ok(payload) => Resolved {
                payload,
                warning: None,
            },
            Err(err) => {
                let warning = AssetWarning {
                    reference: asset.to_string(),
                    reason: match err {
                        AssetError::Unavailable { reason, .. } => reason,
                        other => other.to_string(),
                    },
                };
                tracing::warn!(
                    reference = %warning.reference,
                    reason = %warning.reason,
                    "image unavailable, using placeholder"
                );
                Resolved {
                    payload: self.placeholder(subject),
                    warning: Some(warning),
                }
            }
        }
    }

    /// Resolve a show's poster and every character avatar.
    pub fn resolve_show(&self, show: &Show) -> ShowImages {
        let poster = self.resolve(&show.poster, &Subject::poster(&show.title));
        let avatars = show
            .characters
            .iter()
            .map(|c| {
                let resolved = self.resolve(&c.avatar, &Subject::avatar(&c.name));
                (c.name.clone(), resolved)
            })
            .collect();
        ShowImages { poster, avatars }
    }

    /// The placeholder for a subject.
    pub fn placeholder(&self, subject: &Subject) -> ImagePayload {
        let svg = match subject {
            Subject::Avatar { name } => avatar_svg(name, &self.config.avatar_color),
            Subject::Poster { title } => poster_svg(title, &self.config.poster_color),
        };
        ImagePayload::svg(svg)
    }

    fn read_local(&self, path: &Path) -> AssetResult<ImagePayload> {
        let full = self.config.locate(path);
        let bytes = std::fs::read(&full).map_err(|e| AssetError::Unavailable {
            reference: full.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(ImagePayload::new(mime_for_path(&full), bytes))
    }

    fn fetch_remote(&self, url: &str) -> AssetResult<ImagePayload> {
        let fetched = self.fetcher.fetch(url)?;
        let mime = mime_from_content_type(fetched.content_type.as_deref());
        Ok(ImagePayload::new(mime, fetched.bytes))
    }
}
