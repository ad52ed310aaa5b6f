//! The quiz state machine.
//!
//! A session walks through a show's questions in order. Each round is
//! answer then advance; the score only ever grows by one per correct answer,
//! so `0 <= score <= index <= total` holds in every reachable state.

use std::fmt;

use sc_core::QuizItem;

use crate::error::{QuizError, QuizResult};

/// Where a quiz session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Question `index` (zero-based) is on screen.
    InProgress {
        /// Zero-based question index, always below the total.
        index: usize,
        /// Correct answers so far.
        score: usize,
    },
    /// Every question has been answered.
    Complete {
        /// Final number of correct answers.
        score: usize,
    },
}

impl QuizState {
    /// The score carried by either state.
    pub fn score(&self) -> usize {
        match self {
            Self::InProgress { score, .. } | Self::Complete { score } => *score,
        }
    }

    /// Returns true once all questions are done.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }
}

/// The outcome of one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the submitted answer was right.
    pub correct: bool,
    /// The right answer, shown when the user got it wrong.
    pub expected: String,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.correct {
            write!(f, "Correct!")
        } else {
            write!(f, "Wrong, the answer was {}", self.expected)
        }
    }
}

/// Progress through one show's quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    items: Vec<QuizItem>,
    index: usize,
    score: usize,
    /// Set between a submit and the following advance.
    verdict: Option<Verdict>,
}

impl QuizSession {
    /// Start a session at the first question.
    pub fn new(items: Vec<QuizItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Current state. An empty quiz is complete from the start.
    pub fn state(&self) -> QuizState {
        if self.index >= self.items.len() {
            QuizState::Complete { score: self.score }
        } else {
            QuizState::InProgress {
                index: self.index,
                score: self.score,
            }
        }
    }

    /// Number of questions.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Zero-based index of the current question; equals the total when done.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The question on screen, if the quiz is not complete.
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.items.get(self.index)
    }

    /// All questions in play order.
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Returns true if the current question was answered and is waiting
    /// for [`QuizSession::advance`].
    pub fn awaiting_advance(&self) -> bool {
        self.verdict.is_some()
    }

    /// The verdict for the current question, if it was answered.
    pub fn last_verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// Fraction of questions already passed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            1.0
        } else {
            self.index as f64 / self.items.len() as f64
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Answer the current question.
    pub fn submit(&mut self, answer: &str) -> QuizResult<Verdict> {
        let Some(item) = self.items.get(self.index) else {
            return Err(QuizError::Finished);
        };
        if self.verdict.is_some() {
            return Err(QuizError::AlreadySubmitted);
        }
        if !item.has_option(answer) {
            return Err(QuizError::InvalidAnswer {
                answer: answer.to_string(),
            });
        }

        let verdict = Verdict {
            correct: item.is_correct(answer),
            expected: item.answer.clone(),
        };
        if verdict.correct {
            self.score += 1;
        }
        tracing::debug!(
            index = self.index,
            correct = verdict.correct,
            score = self.score,
            "answer submitted"
        );
        self.verdict = Some(verdict.clone());
        Ok(verdict)
    }

    /// Move past an answered question.
    pub fn advance(&mut self) -> QuizResult<QuizState> {
        if self.index >= self.items.len() {
            return Err(QuizError::Finished);
        }
        if self.verdict.take().is_none() {
            return Err(QuizError::NotSubmitted);
        }
        self.index += 1;
        let state = self.state();
        tracing::debug!(?state, "quiz advanced");
        Ok(state)
    }

    /// Back to the first question with a zero score.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0;
        self.verdict = None;
    }

    /// Replace the questions and start over.
    pub fn switch_show(&mut self, items: Vec<QuizItem>) {
        self.items = items;
        self.restart();
    }
}
