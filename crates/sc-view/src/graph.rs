//! The character relationship graph.

use serde::Serialize;
use thiserror::Error;

use sc_core::{AssetRef, Show};

/// Why a show's graph cannot be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum GraphError {
    /// An edge names a character that is not a node.
    #[error("relationship \"{label}\" refers to unknown character \"{endpoint}\"")]
    DanglingEdge {
        /// Edge label.
        label: String,
        /// The missing endpoint.
        endpoint: String,
    },

    /// Two nodes share a name.
    #[error("character \"{name}\" appears more than once")]
    DuplicateNode {
        /// The repeated name.
        name: String,
    },

    /// A node has a blank name.
    #[error("character #{position} has no name")]
    EmptyNode {
        /// One-based position in the character list.
        position: usize,
    },
}

/// A character node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Character name.
    pub name: String,
    /// Avatar reference.
    pub avatar: AssetRef,
}

/// A labelled, directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Source character name.
    pub source: String,
    /// Target character name.
    pub target: String,
    /// Relationship label.
    pub label: String,
    /// Index of the source in [`GraphView::nodes`].
    pub from: usize,
    /// Index of the target in [`GraphView::nodes`].
    pub to: usize,
}

/// A validated graph, nodes and edges in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphView {
    /// Character nodes.
    pub nodes: Vec<GraphNode>,
    /// Relationship edges.
    pub edges: Vec<GraphEdge>,
}

impl GraphView {
    /// Build the graph for a show. Names match case-insensitively.
    pub fn build(show: &Show) -> Result<Self, GraphError> {
        let mut nodes: Vec<GraphNode> = Vec::with_capacity(show.characters.len());
        for (i, c) in show.characters.iter().enumerate() {
            if c.name.trim().is_empty() {
                return Err(GraphError::EmptyNode { position: i + 1 });
            }
            if nodes.iter().any(|n| n.name.eq_ignore_ascii_case(&c.name)) {
                return Err(GraphError::DuplicateNode {
                    name: c.name.clone(),
                });
            }
            nodes.push(GraphNode {
                name: c.name.clone(),
                avatar: c.avatar.clone(),
            });
        }

        let index_of = |name: &str| nodes.iter().position(|n| n.name.eq_ignore_ascii_case(name));
        let mut edges = Vec::with_capacity(show.relationships.len());
        for rel in &show.relationships {
            let mut ends = [0usize; 2];
            for (slot, endpoint) in ends.iter_mut().zip([&rel.source, &rel.target]) {
                *slot = index_of(endpoint.as_str()).ok_or_else(|| GraphError::DanglingEdge {
                    label: rel.label.clone(),
                    endpoint: endpoint.clone(),
                })?;
            }
            edges.push(GraphEdge {
                source: nodes[ends[0]].name.clone(),
                target: nodes[ends[1]].name.clone(),
                label: rel.label.clone(),
                from: ends[0],
                to: ends[1],
            });
        }

        Ok(Self { nodes, edges })
    }

    /// Index of a node by name (case-insensitive).
    pub fn node(&self, name: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// The sub-graph around one character: the character, its direct
    /// neighbours, and the edges touching it.
    pub fn focus(&self, name: &str) -> Option<GraphView> {
        let centre = self.node(name)?;
        let touching: Vec<&GraphEdge> = self
            .edges
            .iter()
            .filter(|e| e.from == centre || e.to == centre)
            .collect();

        let mut keep = vec![centre];
        for e in &touching {
            for idx in [e.from, e.to] {
                if !keep.contains(&idx) {
                    keep.push(idx);
                }
            }
        }
        keep.sort_unstable();

        let remap = |old: usize| keep.iter().position(|k| *k == old).unwrap_or(0);
        Some(GraphView {
            nodes: keep.iter().map(|i| self.nodes[*i].clone()).collect(),
            edges: touching
                .into_iter()
                .map(|e| GraphEdge {
                    from: remap(e.from),
                    to: remap(e.to),
                    ..e.clone()
                })
                .collect(),
        })
    }

    /// Number of edges touching each node, in node order.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for e in &self.edges {
            degrees[e.from] += 1;
            if e.to != e.from {
                degrees[e.to] += 1;
            }
        }
        degrees
    }
}
