//! Relationship graph tab.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use sc_quiz::Action;
use sc_view::View;

use super::Tab;
use crate::shared::{Scroll, titled_block};

/// Graph tab state.
#[derive(Debug, Default)]
pub struct GraphTab {
    scroll: Scroll,
}

impl GraphTab {
    /// Create a new graph tab.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tab for GraphTab {
    fn handle_key(&mut self, key: KeyEvent, _view: &View) -> Option<Action> {
        self.scroll.handle_key(key);
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.scroll.handle_mouse(mouse);
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &View) {
        let mut lines: Vec<Line<'static>> = Vec::new();

        match &view.graph {
            Err(e) => {
                lines.push(Line::from(Span::styled(
                    "Graph unavailable",
                    Style::default().fg(Color::Red).bold(),
                )));
                lines.push(Line::from(Span::styled(
                    e.to_string(),
                    Style::default().fg(Color::Red),
                )));
            }
            Ok(graph) => {
                let names: Vec<&str> = graph.nodes.iter().map(|n| n.name.as_str()).collect();
                lines.push(Line::from(vec![
                    Span::styled("Characters: ", Style::default().fg(Color::DarkGray)),
                    Span::raw(names.join(", ")),
                ]));
                lines.push(Line::from(""));

                for edge in &graph.edges {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("[{}]", edge.source),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::styled(" --", Style::default().fg(Color::DarkGray)),
                        Span::styled(edge.label.clone(), Style::default().fg(Color::Yellow)),
                        Span::styled("--> ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            format!("[{}]", edge.target),
                            Style::default().fg(Color::Green),
                        ),
                    ]));
                }

                if graph.edges.is_empty() {
                    lines.push(Line::from(Span::styled(
                        "No relationships.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }

                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} characters, {} relationships",
                        graph.nodes.len(),
                        graph.edges.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block(
                " Relationship Graph ",
                &view.banner.theme.accent,
            ))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.0, 0));

        frame.render_widget(paragraph, area);
    }

    fn status_hint(&self) -> &str {
        "j/k:scroll  [/]:show  Tab:view  ?:help  q:quit"
    }

    fn reset(&mut self) {
        self.scroll = Scroll::default();
    }
}
