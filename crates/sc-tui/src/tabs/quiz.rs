//! Quiz tab: answer cursor, verdict feedback and final score.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use sc_quiz::Action;
use sc_view::{QuizPanel, View};

use super::Tab;
use crate::shared::{theme_color, titled_block};

/// Quiz tab state.
#[derive(Debug, Default)]
pub struct QuizTab {
    cursor: usize,
}

impl QuizTab {
    /// Create a new quiz tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted option.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn draw_question(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &View,
        panel: QuestionRef<'_>,
    ) {
        let accent = theme_color(&view.banner.theme.accent);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let gauge = Gauge::default()
            .block(titled_block(" Progress ", &view.banner.theme.accent))
            .gauge_style(Style::default().fg(accent))
            .ratio(panel.progress.clamp(0.0, 1.0))
            .label(format!("question {} of {}", panel.number, panel.total));
        frame.render_widget(gauge, chunks[0]);

        let mut lines: Vec<Line<'_>> = vec![
            Line::from(Span::styled(panel.prompt, Style::default().bold())),
            Line::from(""),
        ];

        for (i, option) in panel.options.iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default().fg(accent).bold()
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}. {option}", i + 1),
                style,
            )));
        }

        if let Some(feedback) = panel.verdict {
            let color = if feedback.correct {
                Color::Green
            } else {
                Color::Red
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                feedback.message.as_str(),
                Style::default().fg(color).bold(),
            )));
            lines.push(Line::from(Span::styled(
                "Press Enter for the next question.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(titled_block(" Quiz ", &view.banner.theme.accent))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, chunks[1]);
    }
}

/// Borrowed fields of [`QuizPanel::Question`].
struct QuestionRef<'a> {
    number: usize,
    total: usize,
    prompt: &'a str,
    options: &'a [String],
    verdict: Option<&'a sc_view::Feedback>,
    progress: f64,
}

impl Tab for QuizTab {
    fn handle_key(&mut self, key: KeyEvent, view: &View) -> Option<Action> {
        match &view.quiz {
            QuizPanel::Question {
                options, verdict, ..
            } => match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    if !options.is_empty() {
                        self.cursor = (self.cursor + 1) % options.len();
                    }
                    None
                }
                KeyCode::Char('k') | KeyCode::Up => {
                    if !options.is_empty() {
                        self.cursor = (self.cursor + options.len() - 1) % options.len();
                    }
                    None
                }
                KeyCode::Enter if verdict.is_some() => {
                    self.cursor = 0;
                    Some(Action::Advance)
                }
                KeyCode::Enter => options
                    .get(self.cursor)
                    .map(|option| Action::SubmitAnswer(option.clone())),
                KeyCode::Char('r') => {
                    self.cursor = 0;
                    Some(Action::Restart)
                }
                _ => None,
            },
            QuizPanel::Finished { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => {
                    self.cursor = 0;
                    Some(Action::Restart)
                }
                _ => None,
            },
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect, view: &View) {
        match &view.quiz {
            QuizPanel::Question {
                number,
                total,
                prompt,
                options,
                verdict,
                progress,
            } => self.draw_question(
                frame,
                area,
                view,
                QuestionRef {
                    number: *number,
                    total: *total,
                    prompt,
                    options,
                    verdict: verdict.as_ref(),
                    progress: *progress,
                },
            ),
            QuizPanel::Finished { .. } => {
                let score = view.quiz.score_line().unwrap_or_default();
                let lines = vec![
                    Line::from(Span::styled("Quiz complete", Style::default().bold())),
                    Line::from(""),
                    Line::from(vec![
                        Span::raw("Score: "),
                        Span::styled(score, Style::default().fg(Color::Yellow).bold()),
                    ]),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press r to play again.",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                let paragraph = Paragraph::new(lines)
                    .block(titled_block(" Quiz ", &view.banner.theme.accent))
                    .alignment(Alignment::Center);
                frame.render_widget(paragraph, area);
            }
        }
    }

    fn status_hint(&self) -> &str {
        "j/k:choose  Enter:answer/next  r:restart  [/]:show  ?:help  q:quit"
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
