//! Tab definitions, trait, and tab bar rendering.

pub mod banner;
pub mod episodes;
pub mod graph;
pub mod quiz;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::prelude::*;

use sc_quiz::Action;
use sc_view::View;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Title, ratings and synopsis.
    Banner,
    /// Relationship graph view.
    Graph,
    /// Season-by-season episode guide.
    Episodes,
    /// Trivia quiz.
    Quiz,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 4] = [TabId::Banner, TabId::Graph, TabId::Episodes, TabId::Quiz];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "banner" | "overview" => Some(TabId::Banner),
            "graph" | "relationships" => Some(TabId::Graph),
            "episodes" => Some(TabId::Episodes),
            "quiz" => Some(TabId::Quiz),
            _ => None,
        }
    }

    /// Label shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            TabId::Banner => "[1]Banner",
            TabId::Graph => "[2]Graph",
            TabId::Episodes => "[3]Episodes",
            TabId::Quiz => "[4]Quiz",
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        let idx = (self.index() + 1) % TabId::ALL.len();
        TabId::ALL[idx]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        let idx = if self.index() == 0 {
            TabId::ALL.len() - 1
        } else {
            self.index() - 1
        };
        TabId::ALL[idx]
    }
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Handle a key event. Returns an action for the session, if any.
    fn handle_key(&mut self, key: KeyEvent, view: &View) -> Option<Action>;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, _mouse: MouseEvent) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect, view: &View);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;

    /// Forget scroll position and cursor, e.g. after a show change.
    fn reset(&mut self) {}
}

/// Separator between tab titles.
pub const DIVIDER: &str = " | ";

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let mut spans = Vec::new();

    for (i, tab) in TabId::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(DIVIDER, Style::default().fg(Color::DarkGray)));
        }

        let style = if *tab == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.title(), style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Which tab title, if any, sits under column `col` of the tab bar.
pub fn tab_at_column(col: u16) -> Option<TabId> {
    let divider = DIVIDER.len() as u16;
    let mut x = 0u16;
    for tab in TabId::ALL {
        let end = x + tab.title().len() as u16;
        if col >= x && col < end {
            return Some(tab);
        }
        x = end + divider;
    }
    None
}
