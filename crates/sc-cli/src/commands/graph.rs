use std::path::Path;

use sc_view::GraphView;

pub fn run(catalog: Option<&Path>, title: &str, focus: Option<&str>) -> Result<(), String> {
    let session = super::open_session(catalog, title)?;
    let show = session
        .current_show()
        .ok_or_else(|| format!("show not found: \"{title}\""))?;

    let graph = GraphView::build(show)
        .map_err(|e| format!("cannot draw graph for \"{}\": {e}", show.title))?;

    if let Some(name) = focus {
        let sub = graph
            .focus(name)
            .ok_or_else(|| format!("character not found: \"{name}\""))?;
        let centre = sub.node(name).unwrap_or(0);
        println!("  Graph for: {}", sub.nodes[centre].name);
        println!();
        render_focused(&sub, centre);
    } else {
        println!("  Relationship graph for '{}'", show.title);
        println!();
        render_full(&graph);
    }

    Ok(())
}

fn render_focused(graph: &GraphView, centre: usize) {
    println!("  [{}]", graph.nodes[centre].name);
    if graph.edges.is_empty() {
        println!("    (no relationships)");
        return;
    }
    for e in &graph.edges {
        if e.from == centre {
            println!("    --> {} --> [{}]", e.label, e.target);
        } else {
            println!("    <-- {} --- [{}]", e.label, e.source);
        }
    }
}

fn render_full(graph: &GraphView) {
    let degrees = graph.degrees();
    for e in &graph.edges {
        println!("  [{}] --{}--> [{}]", e.source, e.label, e.target);
    }

    let isolated: Vec<&str> = graph
        .nodes
        .iter()
        .zip(&degrees)
        .filter(|(_, d)| **d == 0)
        .map(|(n, _)| n.name.as_str())
        .collect();
    if !isolated.is_empty() {
        println!();
        println!("  Unconnected: {}", isolated.join(", "));
    }

    println!();
    println!(
        "  {} characters, {} relationships",
        graph.nodes.len(),
        graph.edges.len()
    );
}
