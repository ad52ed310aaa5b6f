//! Plain-text rendering of a [`View`].

use crate::render::{Banner, QuizPanel, SeasonView, View};
use crate::graph::{GraphError, GraphView};

/// Render every section, separated by blank lines.
pub fn render_text(view: &View) -> String {
    [
        banner_text(&view.banner),
        graph_text(&view.graph),
        episodes_text(&view.episodes),
        quiz_text(&view.quiz),
    ]
    .join("\n")
}

/// Title, genre, ratings and synopsis.
pub fn banner_text(banner: &Banner) -> String {
    let mut out = String::new();
    match &banner.native_title {
        Some(native) if native != &banner.title => {
            out.push_str(&format!("{} ({native})\n", banner.title));
        }
        _ => out.push_str(&format!("{}\n", banner.title)),
    }
    out.push_str(&format!("Genre: {}\n", banner.genre));
    let ratings: Vec<String> = banner.ratings.iter().map(|r| r.to_string()).collect();
    if !ratings.is_empty() {
        out.push_str(&format!("{}\n", ratings.join(" | ")));
    }
    if !banner.summary.is_empty() {
        out.push_str(&format!("\n{}\n", banner.summary));
    }
    out
}

/// Characters and relationship edges, or why they cannot be shown.
pub fn graph_text(graph: &Result<GraphView, GraphError>) -> String {
    let mut out = String::from("Relationships\n");
    let graph = match graph {
        Ok(graph) => graph,
        Err(err) => {
            out.push_str(&format!("  unavailable: {err}\n"));
            return out;
        }
    };

    if graph.nodes.is_empty() {
        out.push_str("  (none)\n");
        return out;
    }
    let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
    out.push_str(&format!("  Characters: {}\n", names.join(", ")));
    for e in &graph.edges {
        out.push_str(&format!("  [{}] --{}--> [{}]\n", e.source, e.label, e.target));
    }
    out
}

/// Every season and episode.
pub fn episodes_text(seasons: &[SeasonView]) -> String {
    let mut out = String::from("Episodes\n");
    if seasons.is_empty() {
        out.push_str("  (none)\n");
    }
    for season in seasons {
        out.push_str(&format!("  {}\n", season.label));
        for episode in &season.episodes {
            out.push_str(&format!("    {episode}\n"));
        }
    }
    out
}

/// The current question with numbered options, or the final score.
pub fn quiz_text(panel: &QuizPanel) -> String {
    match panel {
        QuizPanel::Question {
            number,
            total,
            prompt,
            options,
            verdict,
            ..
        } => {
            let mut out = format!("Quiz (question {number} of {total})\n  {prompt}\n");
            for (i, option) in options.iter().enumerate() {
                out.push_str(&format!("    {}. {option}\n", i + 1));
            }
            if let Some(feedback) = verdict {
                out.push_str(&format!("  {}\n", feedback.message));
            }
            out
        }
        QuizPanel::Finished { score, total } => {
            format!("Quiz complete: {score} / {total}\n")
        }
    }
}
