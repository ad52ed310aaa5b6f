use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// Which show the viewer is looking at.
///
/// Unset means "the first show in the catalog".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    /// A selection that defaults to the catalog's first show.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the selection at `title`. The stored title is the catalog's
    /// canonical spelling.
    pub fn select(&mut self, catalog: &Catalog, title: &str) -> CatalogResult<&str> {
        let show = catalog
            .get(title)
            .ok_or_else(|| CatalogError::UnknownShow(title.to_string()))?;
        Ok(self.current.insert(show.title.clone()).as_str())
    }

    /// The active show title, falling back to the first catalog entry.
    pub fn current<'a>(&'a self, catalog: &'a Catalog) -> Option<&'a str> {
        match self.current.as_deref() {
            Some(title) => Some(title),
            None => catalog.first().map(|s| s.title.as_str()),
        }
    }

    /// Returns true if a show was explicitly selected.
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_show() {
        let catalog = Catalog::builtin().unwrap();
        let selection = Selection::new();
        assert!(!selection.is_set());
        assert_eq!(selection.current(&catalog), Some("Stranger Things"));
    }

    #[test]
    fn select_stores_canonical_title() {
        let catalog = Catalog::builtin().unwrap();
        let mut selection = Selection::new();
        assert_eq!(
            selection.select(&catalog, "breaking bad").unwrap(),
            "Breaking Bad"
        );
        assert_eq!(selection.current(&catalog), Some("Breaking Bad"));
    }

    #[test]
    fn unknown_show_leaves_selection_unchanged() {
        let catalog = Catalog::builtin().unwrap();
        let mut selection = Selection::new();
        selection.select(&catalog, "Game of Thrones").unwrap();
        assert!(selection.select(&catalog, "The Wire").is_err());
        assert_eq!(selection.current(&catalog), Some("Game of Thrones"));
    }

    #[test]
    fn empty_catalog_has_no_current() {
        let catalog = Catalog::new();
        assert_eq!(Selection::new().current(&catalog), None);
    }
}
