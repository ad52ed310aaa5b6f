//! Banner tab: title, ratings, synopsis and image warnings.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use sc_assets::AssetWarning;
use sc_quiz::Action;
use sc_view::View;

use super::Tab;
use crate::shared::{Scroll, theme_color, titled_block};

/// Banner tab state.
#[derive(Debug, Default)]
pub struct BannerTab {
    scroll: Scroll,
    warnings: Vec<AssetWarning>,
}

impl BannerTab {
    /// Create an empty banner tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image fallback warnings for the current show.
    pub fn set_warnings(&mut self, warnings: Vec<AssetWarning>) {
        self.warnings = warnings;
    }

    /// Image fallback warnings for the current show.
    pub fn warnings(&self) -> &[AssetWarning] {
        &self.warnings
    }
}

impl Tab for BannerTab {
    fn handle_key(&mut self, key: KeyEvent, _view: &View) -> Option<Action> {
        self.scroll.handle_key(key);
        None
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        self.scroll.handle_mouse(mouse);
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &View) {
        let banner = &view.banner;
        let accent = theme_color(&banner.theme.accent);
        let mut lines: Vec<Line<'_>> = Vec::new();

        let mut title = vec![Span::styled(
            banner.title.as_str(),
            Style::default().fg(accent).bold(),
        )];
        if let Some(native) = &banner.native_title {
            title.push(Span::styled(
                format!("  {native}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(vec![
            Span::styled("Genre: ", Style::default().fg(Color::DarkGray)),
            Span::raw(banner.genre.as_str()),
        ]));

        let mut ratings = Vec::new();
        for (i, rating) in banner.ratings.iter().enumerate() {
            if i > 0 {
                ratings.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            ratings.push(Span::raw(format!("{}: ", rating.source)));
            ratings.push(Span::styled(
                rating.score.as_str(),
                Style::default().fg(Color::Yellow).bold(),
            ));
        }
        lines.push(Line::from(ratings));
        lines.push(Line::from(""));
        lines.push(Line::from(banner.summary.as_str()));

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Poster: ", Style::default().fg(Color::DarkGray)),
            Span::raw(banner.poster.to_string()),
        ]));

        if !self.warnings.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Images",
                Style::default().fg(Color::Yellow).bold(),
            )));
            for warning in &self.warnings {
                lines.push(Line::from(Span::styled(
                    format!("  {warning}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block(" Overview ", &banner.theme.accent))
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
