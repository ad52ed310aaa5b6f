//! Whole-page exports: standalone HTML, Markdown and JSON.

use sc_assets::ShowImages;
use sc_assets::placeholder::xml_escape as escape;

use crate::graph::{GraphError, GraphView};
use crate::render::{QuizPanel, View};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFormat {
    /// Self-contained HTML with embedded images.
    Html,
    /// GitHub-flavoured Markdown.
    Markdown,
    /// The view model as pretty-printed JSON.
    Json,
}

impl PageFormat {
    /// Parse a format name. `md` is accepted for Markdown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "html" => Some(Self::Html),
            "markdown" | "md" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// The view as pretty-printed JSON.
pub fn json(view: &View) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

/// The view as Markdown.
pub fn markdown(view: &View) -> String {
    let banner = &view.banner;
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", banner.title));
    if let Some(native) = &banner.native_title {
        out.push_str(&format!("*{native}*\n\n"));
    }
    out.push_str(&format!("**Genre:** {}\n\n", banner.genre));
    for rating in &banner.ratings {
        out.push_str(&format!("- **{}:** {}\n", rating.source, rating.score));
    }
    out.push('\n');
    if !banner.summary.is_empty() {
        out.push_str(&format!("{}\n\n", banner.summary));
    }

    out.push_str("## Relationships\n\n");
    match &view.graph {
        Ok(graph) if graph.nodes.is_empty() => out.push_str("_No characters._\n\n"),
        Ok(graph) => {
            let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
            out.push_str(&format!("**Characters:** {}\n\n", names.join(", ")));
            for e in &graph.edges {
                out.push_str(&format!("- {} → {}: *{}*\n", e.source, e.target, e.label));
            }
            out.push('\n');
        }
        Err(err) => out.push_str(&format!("> Graph unavailable: {err}\n\n")),
    }

    out.push_str("## Episodes\n\n");
    for season in &view.episodes {
        out.push_str(&format!("### {}\n\n", season.label));
        for episode in &season.episodes {
            out.push_str(&format!("- {episode}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Quiz\n\n");
    match &view.quiz {
        QuizPanel::Question {
            number,
            total,
            prompt,
            options,
            ..
        } => {
            out.push_str(&format!("**Question {number} of {total}:** {prompt}\n\n"));
            for (i, option) in options.iter().enumerate() {
                out.push_str(&format!("{}. {option}\n", i + 1));
            }
        }
        QuizPanel::Finished { score, total } => {
            out.push_str(&format!("Final score: **{score} / {total}**\n"));
        }
    }

    out
}

/// A single self-contained HTML page. Images are inlined as `data:` URIs
/// and the page is coloured with the show's theme.
pub fn html(view: &View, images: &ShowImages) -> String {
    let banner = &view.banner;
    let accent = escape(&banner.theme.accent);
    let backdrop = escape(&banner.theme.backdrop);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str(&format!(
        "  <meta charset=\"utf-8\">\n  <title>{}</title>\n",
        escape(&banner.title)
    ));
    html.push_str("  <style>\n");
    html.push_str(&format!(
        "    body {{ font-family: Georgia, serif; max-width: 960px; margin: 2em auto; padding: 0 1em; color: #eee; background: {backdrop}; }}\n"
    ));
    html.push_str(&format!(
        "    h1, h2, h3 {{ color: {accent}; }}\n    h2 {{ border-bottom: 2px solid {accent}; padding-bottom: 0.3em; margin-top: 2em; }}\n"
    ));
    html.push_str("    .banner { display: flex; gap: 2em; align-items: flex-start; }\n");
    html.push_str("    .banner img { width: 300px; border-radius: 8px; }\n");
    html.push_str("    .cast { display: flex; flex-wrap: wrap; gap: 1.5em; }\n");
    html.push_str("    .cast figure { margin: 0; text-align: center; width: 100px; }\n");
    html.push_str("    .cast img { width: 100px; height: 100px; border-radius: 50%; object-fit: cover; }\n");
    html.push_str("    .error { color: #ff6b6b; }\n");
    html.push_str("  </style>\n</head>\n<body>\n");

    // Banner
    html.push_str("<section class=\"banner\">\n");
    html.push_str(&format!(
        "  <img src=\"{}\" alt=\"{}\">\n",
        images.poster.payload.data_uri(),
        escape(&banner.title)
    ));
    html.push_str("  <div>\n");
    html.push_str(&format!("    <h1>{}</h1>\n", escape(&banner.title)));
    if let Some(native) = &banner.native_title {
        html.push_str(&format!("    <p><em>{}</em></p>\n", escape(native)));
    }
    html.push_str(&format!(
        "    <p><strong>Genre:</strong> {}</p>\n",
        escape(&banner.genre)
    ));
    for rating in &banner.ratings {
        html.push_str(&format!(
            "    <p><strong>{}:</strong> {}</p>\n",
            escape(&rating.source),
            escape(&rating.score)
        ));
    }
    html.push_str(&format!("    <p>{}</p>\n", escape(&banner.summary)));
    html.push_str("  </div>\n</section>\n");

    // Graph
    html.push_str("<h2>Relationships</h2>\n");
    html.push_str(&graph_html(&view.graph, images));

    // Episodes
    html.push_str("<h2>Episodes</h2>\n");
    for season in &view.episodes {
        html.push_str(&format!(
            "<details open>\n  <summary>{}</summary>\n  <ul>\n",
            escape(&season.label)
        ));
        for episode in &season.episodes {
            html.push_str(&format!("    <li>{}</li>\n", escape(episode)));
        }
        html.push_str("  </ul>\n</details>\n");
    }

    // Quiz
    html.push_str("<h2>Quiz</h2>\n");
    match &view.quiz {
        QuizPanel::Question {
            number,
            total,
            prompt,
            options,
            ..
        } => {
            html.push_str(&format!(
                "<p><strong>Question {number} of {total}:</strong> {}</p>\n<ol>\n",
                escape(prompt)
            ));
            for option in options {
                html.push_str(&format!("  <li>{}</li>\n", escape(option)));
            }
            html.push_str("</ol>\n");
        }
        QuizPanel::Finished { score, total } => {
            html.push_str(&format!("<p>Final score: <strong>{score} / {total}</strong></p>\n"));
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn graph_html(graph: &Result<GraphView, GraphError>, images: &ShowImages) -> String {
    let graph = match graph {
        Ok(graph) => graph,
        Err(err) => {
            return format!(
                "<p class=\"error\">Graph unavailable: {}</p>\n",
                escape(&err.to_string())
            );
        }
    };

    let mut out = String::from("<div class=\"cast\">\n");
    for node in &graph.nodes {
        let src = images
            .avatar(&node.name)
            .map(|r| r.payload.data_uri())
            .unwrap_or_default();
        out.push_str(&format!(
            "  <figure><img src=\"{src}\" alt=\"{name}\"><figcaption>{name}</figcaption></figure>\n",
            name = escape(&node.name)
        ));
    }
    out.push_str("</div>\n<ul>\n");
    for e in &graph.edges {
        out.push_str(&format!(
            "  <li>{} &rarr; {}: <em>{}</em></li>\n",
            escape(&e.source),
            escape(&e.target),
            escape(&e.label)
        ));
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use sc_assets::{AssetResolver, Fetch, Fetched, ResolverConfig};
    use sc_core::{Catalog, Relationship, Selection};
    use sc_quiz::QuizSession;

    struct Offline;

    impl Fetch for Offline {
        fn fetch(&self, url: &str) -> sc_assets::AssetResult<Fetched> {
            Err(sc_assets::AssetError::Unavailable {
                reference: url.to_string(),
                reason: "offline".into(),
            })
        }
    }

    fn fixture(title: &str) -> (View, ShowImages) {
        let catalog = Catalog::builtin().unwrap();
        let mut selection = Selection::new();
        selection.select(&catalog, title).unwrap();
        let show = catalog.get(title).unwrap();
        let quiz = QuizSession::new(show.quiz.clone());
        let resolver = AssetResolver::with_fetcher(
            ResolverConfig::default().with_asset_root("/nonexistent"),
            Offline,
        );
        (
            render(&catalog, &selection, &quiz),
            resolver.resolve_show(show),
        )
    }

    #[test]
    fn format_names() {
        assert_eq!(PageFormat::from_name("HTML"), Some(PageFormat::Html));
        assert_eq!(PageFormat::from_name("md"), Some(PageFormat::Markdown));
        assert_eq!(PageFormat::from_name("json"), Some(PageFormat::Json));
        assert_eq!(PageFormat::from_name("pdf"), None);
    }

    #[test]
    fn html_embeds_images_and_theme() {
        let (view, images) = fixture("Breaking Bad");
        let page = html(&view, &images);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Breaking Bad</title>"));
        assert!(page.contains("background: #0d1b2a"));
        assert!(page.contains("color: #1E8449"));
        assert!(page.contains("src=\"data:image/svg+xml;base64,"));
        assert_eq!(page.matches("<figure>").count(), 7);
        assert!(page.contains("Walter White &rarr; Jesse Pinkman: <em>partners</em>"));
        assert_eq!(page.matches("<details open>").count(), 5);
    }

    #[test]
    fn html_shows_graph_error_inline() {
        let (mut view, images) = fixture("Breaking Bad");
        let mut show = Catalog::builtin().unwrap().get("Breaking Bad").unwrap().clone();
        show.relationships
            .push(Relationship::new("Walter White", "Tuco", "rival"));
        view.graph = GraphView::build(&show);
        let page = html(&view, &images);
        assert!(page.contains("<p class=\"error\">Graph unavailable: relationship &quot;rival&quot;"));
        assert!(page.contains("<h2>Episodes</h2>"));
    }

    #[test]
    fn html_escapes_apostrophes_like_placeholders() {
        let (view, images) = fixture("Stranger Things");
        let page = html(&view, &images);
        assert!(page.contains("What is Eleven&apos;s favourite food?"));
        assert!(!page.contains("Eleven's"));
    }

    #[test]
    fn markdown_sections() {
        let (view, _) = fixture("Game of Thrones");
        let md = markdown(&view);
        assert!(md.starts_with("# Game of Thrones\n\n*权力的游戏*\n"));
        assert!(md.contains("- **IMDb:** 9.2\n"));
        assert!(md.contains("### Season 8\n"));
        assert!(md.contains("**Question 1 of 4:**"));
    }

    #[test]
    fn json_round_trips_through_serde() {
        let (view, _) = fixture("Stranger Things");
        let value: serde_json::Value = serde_json::from_str(&json(&view).unwrap()).unwrap();
        assert_eq!(value["banner"]["title"], "Stranger Things");
        assert_eq!(value["graph"]["Ok"]["nodes"].as_array().unwrap().len(), 7);
        assert_eq!(value["quiz"]["Question"]["total"], 4);
    }
}
