use std::path::Path;

use colored::Colorize;

use sc_view::text::{banner_text, episodes_text, graph_text, quiz_text};

pub fn run(catalog: Option<&Path>, title: &str, section: Option<&str>) -> Result<(), String> {
    let session = super::open_session(catalog, title)?;
    let view = sc_view::render(session.catalog(), session.selection(), session.quiz());

    let text = match section.map(str::to_ascii_lowercase).as_deref() {
        None => sc_view::render_text(&view),
        Some("banner") => banner_text(&view.banner),
        Some("graph") => graph_text(&view.graph),
        Some("episodes") => episodes_text(&view.episodes),
        Some("quiz") => quiz_text(&view.quiz),
        Some(other) => {
            return Err(format!(
                "unknown section: \"{other}\". Use: banner, graph, episodes, quiz"
            ));
        }
    };

    if let Err(e) = &view.graph {
        eprintln!("  {} {e}", "warning:".yellow());
    }
    print!("{text}");

    Ok(())
}
