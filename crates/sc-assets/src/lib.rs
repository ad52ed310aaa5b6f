//! Image handling for Series Companion.
//!
//! Posters and avatars are referenced by [`sc_core::AssetRef`]. The
//! [`AssetResolver`] reads local files, downloads remote URLs, and falls
//! back to generated SVG placeholders, returning bytes that can be embedded
//! as `data:` URIs.

pub mod config;
pub mod error;
pub mod fetch;
pub mod payload;
pub mod placeholder;
pub mod probe;
pub mod resolver;

pub use config::ResolverConfig;
pub use error::{AssetError, AssetResult};
pub use fetch::{Fetch, Fetched, HttpFetcher};
pub use payload::ImagePayload;
pub use probe::{DEFAULT_PROBE_TIMEOUT, DEFAULT_PROBE_URLS, ProbeReport, probe};
pub use resolver::{AssetResolver, AssetWarning, Resolved, ShowImages, Subject};
