//! Terminal UI for Series Companion.
//!
//! One ratatui screen with a tab per section of the show page: banner,
//! relationship graph, episode guide and quiz.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
