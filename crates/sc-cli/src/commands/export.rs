use std::path::Path;

use colored::Colorize;

use sc_assets::{AssetResolver, ResolverConfig};
use sc_view::PageFormat;
use sc_view::page;

pub fn run(
    catalog: Option<&Path>,
    assets: &Path,
    title: &str,
    format: &str,
    output: Option<&Path>,
) -> Result<(), String> {
    let format = PageFormat::from_name(format).ok_or_else(|| {
        format!("unsupported format: \"{format}\". Use: html, markdown, json")
    })?;

    let session = super::open_session(catalog, title)?;
    let view = sc_view::render(session.catalog(), session.selection(), session.quiz());

    let content = match format {
        PageFormat::Json => {
            page::json(&view).map_err(|e| format!("JSON serialization error: {e}"))?
        }
        PageFormat::Markdown => page::markdown(&view),
        PageFormat::Html => {
            let show = session
                .current_show()
                .ok_or_else(|| format!("show not found: \"{title}\""))?;
            let resolver = AssetResolver::new(ResolverConfig::default().with_asset_root(assets))
                .map_err(|e| format!("cannot set up image loading: {e}"))?;
            let images = resolver.resolve_show(show);
            for warning in images.warnings() {
                eprintln!("  {} {warning}", "warning:".yellow());
            }
            page::html(&view, &images)
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
