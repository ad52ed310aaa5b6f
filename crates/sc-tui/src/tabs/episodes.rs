//! Episode guide tab.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use sc_quiz::Action;
use sc_view::View;

use super::Tab;
use crate::shared::{Scroll, theme_color, titled_block};

/// Episodes tab state.
#[derive(Debug, Default)]
pub struct EpisodesTab {
    scroll: Scroll,
}

impl EpisodesTab {
    /// Create a new episodes tab.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tab for EpisodesTab {
    fn handle_key(&mut self, key: KeyEvent, _view: &View) -> Option<Action> {
        self.scroll.handle_key(key);
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.scroll.handle_mouse(mouse);
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &View) {
        let accent = theme_color(&view.banner.theme.accent);
        let mut lines: Vec<Line<'_>> = Vec::new();

        for season in &view.episodes {
            lines.push(Line::from(vec![
                Span::styled(season.label.as_str(), Style::default().fg(accent).bold()),
                Span::styled(
                    format!("  ({} episodes)", season.episodes.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            for episode in &season.episodes {
                lines.push(Line::from(format!("  {episode}")));
            }
            lines.push(Line::from(""));
        }

        if view.episodes.is_empty() {
            lines.push(Line::from(Span::styled(
                "No episodes.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block(" Episodes ", &view.banner.theme.accent))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.0, 0));

        frame.render_widget(paragraph, area);
    }

    fn status_hint(&self) -> &str {
        "j/k:scroll  g:top  [/]:show  Tab:view  ?:help  q:quit"
    }

    fn reset(&mut self) {
        self.scroll = Scroll::default();
    }
}
