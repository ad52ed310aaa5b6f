//! Shared utilities for TUI views: layout helpers, scrolling, and popups.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Vertical scroll offset shared by the read-only tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll(pub u16);

impl Scroll {
    /// Apply j/k/g navigation. Returns `true` if the key was used.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.0 = self.0.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => self.0 = self.0.saturating_sub(1),
            KeyCode::PageDown => self.0 = self.0.saturating_add(10),
            KeyCode::PageUp => self.0 = self.0.saturating_sub(10),
            KeyCode::Char('g') | KeyCode::Home => self.0 = 0,
            _ => return false,
        }
        true
    }

    /// Apply wheel scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.0 = self.0.saturating_sub(1),
            MouseEventKind::ScrollDown => self.0 = self.0.saturating_add(1),
            _ => {}
        }
    }
}

/// Parse a `#rrggbb` colour, falling back to cyan.
pub fn theme_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Cyan;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Cyan,
    }
}

/// A bordered block in the show's accent colour.
pub fn titled_block<'a>(title: &'a str, accent: &str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme_color(accent)))
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  1-4 / Tab   Switch tab"),
        Line::from("  [ / ]       Previous / next show"),
        Line::from(""),
        Line::from("Banner / Graph / Episodes:"),
        Line::from("  j / k       Scroll down / up"),
        Line::from("  g           Back to top"),
        Line::from(""),
        Line::from("Quiz:"),
        Line::from("  j / k       Move the answer cursor"),
        Line::from("  Enter       Submit answer / next question"),
        Line::from("  r           Restart the quiz"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
