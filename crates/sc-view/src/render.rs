//! Projection of the application state into a drawable [`View`].

use serde::Serialize;

use sc_core::{AssetRef, Catalog, Rating, Selection, Show, Theme};
use sc_quiz::{QuizSession, QuizState};

use crate::graph::{GraphError, GraphView};

/// Everything a front end draws for one show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    /// Title block.
    pub banner: Banner,
    /// Relationship graph, or the reason it cannot be drawn.
    pub graph: Result<GraphView, GraphError>,
    /// Every season, fully expanded.
    pub episodes: Vec<SeasonView>,
    /// Quiz question or final score.
    pub quiz: QuizPanel,
}

/// Show metadata for the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Banner {
    /// Show title.
    pub title: String,
    /// Original-language title.
    pub native_title: Option<String>,
    /// Genre tag.
    pub genre: String,
    /// Synopsis.
    pub summary: String,
    /// Rating pair.
    pub ratings: Vec<Rating>,
    /// Show colours.
    pub theme: Theme,
    /// Poster reference.
    pub poster: AssetRef,
}

/// One season's recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonView {
    /// Season label.
    pub label: String,
    /// Episode summaries in order.
    pub episodes: Vec<String>,
}

/// Feedback on the current answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// Whether the answer was right.
    pub correct: bool,
    /// "Correct!" or "Wrong, the answer was ...".
    pub message: String,
}

/// The quiz area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuizPanel {
    /// A question is on screen.
    Question {
        /// One-based question number.
        number: usize,
        /// Total number of questions.
        total: usize,
        /// Question text.
        prompt: String,
        /// Answer choices.
        options: Vec<String>,
        /// Present once the question has been answered.
        verdict: Option<Feedback>,
        /// Fraction of questions already passed.
        progress: f64,
    },
    /// All questions answered.
    Finished {
        /// Correct answers.
        score: usize,
        /// Total number of questions.
        total: usize,
    },
}

impl QuizPanel {
    /// The "score / total" line shown when finished.
    pub fn score_line(&self) -> Option<String> {
        match self {
            Self::Finished { score, total } => Some(format!("{score} / {total}")),
            Self::Question { .. } => None,
        }
    }
}

/// Build the view for the selected show. Pure: the same inputs always give
/// the same view.
///
/// An empty catalog yields a blank view.
pub fn render(catalog: &Catalog, selection: &Selection, quiz: &QuizSession) -> View {
    let Some(show) = selection
        .current(catalog)
        .and_then(|title| catalog.get(title))
    else {
        return View {
            banner: Banner::default(),
            graph: Ok(GraphView::default()),
            episodes: Vec::new(),
            quiz: quiz_panel(quiz),
        };
    };

    View {
        banner: banner(show),
        graph: GraphView::build(show),
        episodes: show
            .seasons
            .iter()
            .map(|s| SeasonView {
                label: s.label.clone(),
                episodes: s.episodes.clone(),
            })
            .collect(),
        quiz: quiz_panel(quiz),
    }
}

fn banner(show: &Show) -> Banner {
    Banner {
        title: show.title.clone(),
        native_title: show.native_title.clone(),
        genre: show.genre.clone(),
        summary: show.summary.clone(),
        ratings: show.ratings.to_vec(),
        theme: show.theme.clone(),
        poster: show.poster.clone(),
    }
}

fn quiz_panel(quiz: &QuizSession) -> QuizPanel {
    match (quiz.state(), quiz.current_item()) {
        (QuizState::InProgress { index, .. }, Some(item)) => QuizPanel::Question {
            number: index + 1,
            total: quiz.total(),
            prompt: item.prompt.clone(),
            options: item.options.clone(),
            verdict: quiz.last_verdict().map(|v| Feedback {
                correct: v.correct,
                message: v.to_string(),
            }),
            progress: quiz.progress(),
        },
        (state, _) => QuizPanel::Finished {
            score: state.score(),
            total: quiz.total(),
        },
    }
}
