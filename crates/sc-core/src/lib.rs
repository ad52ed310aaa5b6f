//! Core types for Series Companion: shows, characters, relationships, and
//! the catalog.
//!
//! This crate defines the read-only content store. It knows nothing about
//! rendering or images; a [`Catalog`] can be built programmatically, loaded
//! from a JSON file, or taken from the dataset compiled into the crate.

/// Image references (local file, remote URL, or none).
pub mod asset;
/// The ordered collection of shows and its data audit.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Multiple-choice trivia items.
pub mod quiz;
/// Labelled edges between characters.
pub mod relationship;
/// The viewer's current-show pointer.
pub mod selection;
/// Show metadata, characters, and seasons.
pub mod show;

/// Re-export the asset reference type.
pub use asset::AssetRef;
/// Re-export catalog types.
pub use catalog::{Catalog, CatalogIssue};
/// Re-export error types.
pub use error::{CatalogError, CatalogResult};
/// Re-export the quiz item type.
pub use quiz::QuizItem;
/// Re-export the relationship type.
pub use relationship::Relationship;
/// Re-export the selection type.
pub use selection::Selection;
/// Re-export show types.
pub use show::{Character, Rating, Season, Show, Theme};
