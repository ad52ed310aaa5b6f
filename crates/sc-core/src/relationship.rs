use std::fmt;

use serde::{Deserialize, Serialize};

/// A directed, labelled edge between two characters of the same show.
///
/// Endpoints are character names. They are not checked against the show's
/// character list here; see [`crate::Catalog::audit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Name of the character the edge starts from.
    pub source: String,
    /// Name of the character the edge points to.
    pub target: String,
    /// Human-readable description, e.g. "partners" or "nemesis".
    pub label: String,
}

impl Relationship {
    /// Creates a new edge from `source` to `target`.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
        }
    }

    /// Returns true if `name` is either endpoint.
    pub fn involves(&self, name: &str) -> bool {
        self.source.eq_ignore_ascii_case(name) || self.target.eq_ignore_ascii_case(name)
    }

    /// Returns the endpoint opposite to `name`, if `name` is an endpoint.
    pub fn other(&self, name: &str) -> Option<&str> {
        if self.source.eq_ignore_ascii_case(name) {
            Some(&self.target)
        } else if self.target.eq_ignore_ascii_case(name) {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] --{}--> [{}]", self.source, self.label, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_endpoint() {
        let rel = Relationship::new("Hopper", "Eleven", "adoptive father");
        assert_eq!(rel.other("hopper"), Some("Eleven"));
        assert_eq!(rel.other("Eleven"), Some("Hopper"));
        assert_eq!(rel.other("Mike"), None);
        assert!(rel.involves("ELEVEN"));
    }

    #[test]
    fn display_shows_direction() {
        let rel = Relationship::new("Arya", "Sansa", "sisters");
        assert_eq!(rel.to_string(), "[Arya] --sisters--> [Sansa]");
    }
}
