pub mod check;
pub mod episodes;
pub mod export;
pub mod graph;
pub mod list;
pub mod probe;
pub mod quiz;
pub mod show;
pub mod tui;

use std::path::Path;
use std::sync::Arc;

use sc_core::Catalog;
use sc_quiz::ViewerSession;

/// Load the catalog from a file, or the built-in dataset if none is given.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, String> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading catalog file");
            Catalog::from_path(path).map_err(|e| e.to_string())
        }
        None => Catalog::builtin().map_err(|e| format!("built-in catalog: {e}")),
    }
}

/// Load the catalog and open a session on `title`.
fn open_session(catalog: Option<&Path>, title: &str) -> Result<ViewerSession, String> {
    let catalog = Arc::new(load_catalog(catalog)?);
    ViewerSession::with_show(catalog, title).map_err(|e| e.to_string())
}
