//! View layer for Series Companion.
//!
//! [`render`] is a pure function from catalog, selection and quiz state to a
//! [`View`]. Front ends draw that view however they like; this crate also
//! ships plain-text, Markdown, HTML and JSON renderings of it.

pub mod graph;
pub mod page;
pub mod render;
pub mod text;

pub use graph::{GraphEdge, GraphError, GraphNode, GraphView};
pub use page::PageFormat;
pub use render::{Banner, Feedback, QuizPanel, SeasonView, View, render};
pub use text::render_text;
