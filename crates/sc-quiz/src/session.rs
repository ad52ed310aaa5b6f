//! Per-viewer session management.
//!
//! `ViewerSession` owns one [`Selection`] and one [`QuizSession`] over a
//! shared catalog. Front ends turn user input into [`Action`]s and hand
//! them to [`ViewerSession::dispatch`], which applies at most one
//! transition.

use std::sync::Arc;

use sc_core::{Catalog, Selection, Show};

use crate::engine::{QuizSession, QuizState, Verdict};
use crate::error::SessionResult;

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch to the named show and reset the quiz.
    SelectShow(String),
    /// Answer the current quiz question.
    SubmitAnswer(String),
    /// Move to the next quiz question.
    Advance,
    /// Start the quiz over.
    Restart,
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selection moved to this canonical title.
    Selected(String),
    /// An answer was judged.
    Answered(Verdict),
    /// The quiz moved on.
    Advanced(QuizState),
    /// The quiz went back to the first question.
    Restarted,
}

/// One viewer's selection and quiz progress.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    catalog: Arc<Catalog>,
    selection: Selection,
    quiz: QuizSession,
}

impl ViewerSession {
    /// Create a session looking at the catalog's first show.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let quiz = QuizSession::new(
            catalog
                .first()
                .map(|show| show.quiz.clone())
                .unwrap_or_default(),
        );
        Self {
            catalog,
            selection: Selection::new(),
            quiz,
        }
    }

    /// Create a session with `title` already selected.
    pub fn with_show(catalog: Arc<Catalog>, title: &str) -> SessionResult<Self> {
        let mut session = Self::new(catalog);
        session.dispatch(Action::SelectShow(title.to_string()))?;
        Ok(session)
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The quiz state.
    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    /// The show currently on screen.
    pub fn current_show(&self) -> Option<&Show> {
        self.selection
            .current(&self.catalog)
            .and_then(|title| self.catalog.get(title))
    }

    /// Title of the show `step` places away from the current one, wrapping
    /// around at either end.
    pub fn neighbour(&self, step: isize) -> Option<&str> {
        let len = self.catalog.len();
        if len == 0 {
            return None;
        }
        let here = self
            .selection
            .current(&self.catalog)
            .and_then(|title| self.catalog.position(title))
            .unwrap_or(0);
        let len = len as isize;
        let target = (here as isize + step).rem_euclid(len) as usize;
        self.catalog.at(target).map(|show| show.title.as_str())
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action) -> SessionResult<Outcome> {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::SelectShow(title) => {
                let title = self.selection.select(&self.catalog, &title)?.to_string();
                let items = self.catalog.require(&title)?.quiz.clone();
                self.quiz.switch_show(items);
                Ok(Outcome::Selected(title))
            }
            Action::SubmitAnswer(answer) => Ok(Outcome::Answered(self.quiz.submit(&answer)?)),
            Action::Advance => Ok(Outcome::Advanced(self.quiz.advance()?)),
            Action::Restart => {
                self.quiz.restart();
                Ok(Outcome::Restarted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{QuizError, SessionError};
    use proptest::prelude::*;

    fn builtin() -> Arc<Catalog> {
        Arc::new(Catalog::builtin().unwrap())
    }

    fn answer_of(session: &ViewerSession) -> String {
        session.quiz().current_item().unwrap().answer.clone()
    }

    fn wrong_of(session: &ViewerSession) -> String {
        let item = session.quiz().current_item().unwrap();
        item.options
            .iter()
            .find(|o| **o != item.answer)
            .unwrap()
            .clone()
    }

    #[test]
    fn new_session_follows_first_show() {
        let session = ViewerSession::new(builtin());
        assert_eq!(session.current_show().unwrap().title, "Stranger Things");
        assert_eq!(session.quiz().total(), 4);
    }

    #[test]
    fn select_resets_quiz() {
        let mut session = ViewerSession::new(builtin());
        let a = answer_of(&session);
        session.dispatch(Action::SubmitAnswer(a)).unwrap();
        session.dispatch(Action::Advance).unwrap();

        let outcome = session
            .dispatch(Action::SelectShow("game of thrones".into()))
            .unwrap();
        assert_eq!(outcome, Outcome::Selected("Game of Thrones".into()));
        assert_eq!(
            session.selection().current(session.catalog()),
            Some("Game of Thrones")
        );
        assert_eq!(
            session.quiz().state(),
            QuizState::InProgress { index: 0, score: 0 }
        );
    }

    #[test]
    fn unknown_show_is_an_error() {
        let mut session = ViewerSession::new(builtin());
        let err = session
            .dispatch(Action::SelectShow("The Wire".into()))
            .unwrap_err();
        assert!(matches!(err, SessionError::Catalog(_)));
        assert_eq!(session.current_show().unwrap().title, "Stranger Things");
    }

    #[test]
    fn breaking_bad_first_answer_correct() {
        let mut session = ViewerSession::with_show(builtin(), "Breaking Bad").unwrap();
        assert_eq!(session.quiz().total(), 4);

        let outcome = session
            .dispatch(Action::SubmitAnswer("Heisenberg".into()))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Answered(Verdict {
                correct: true,
                expected: "Heisenberg".into()
            })
        );
        assert_eq!(
            session.dispatch(Action::Advance).unwrap(),
            Outcome::Advanced(QuizState::InProgress { index: 1, score: 1 })
        );
    }

    #[test]
    fn wrong_last_answer_completes_with_two() {
        let mut session = ViewerSession::with_show(builtin(), "Breaking Bad").unwrap();
        for correct in [true, false, true] {
            let a = if correct {
                answer_of(&session)
            } else {
                wrong_of(&session)
            };
            session.dispatch(Action::SubmitAnswer(a)).unwrap();
            session.dispatch(Action::Advance).unwrap();
        }
        assert_eq!(
            session.quiz().state(),
            QuizState::InProgress { index: 3, score: 2 }
        );

        let w = wrong_of(&session);
        session.dispatch(Action::SubmitAnswer(w)).unwrap();
        assert_eq!(
            session.dispatch(Action::Advance).unwrap(),
            Outcome::Advanced(QuizState::Complete { score: 2 })
        );
    }

    #[test]
    fn full_run_then_restart() {
        let mut session = ViewerSession::with_show(builtin(), "Breaking Bad").unwrap();
        for _ in 0..4 {
            let a = answer_of(&session);
            session.dispatch(Action::SubmitAnswer(a)).unwrap();
            session.dispatch(Action::Advance).unwrap();
        }
        assert_eq!(session.quiz().state(), QuizState::Complete { score: 4 });
        assert!(matches!(
            session.dispatch(Action::Advance),
            Err(SessionError::Quiz(QuizError::Finished))
        ));

        assert_eq!(session.dispatch(Action::Restart).unwrap(), Outcome::Restarted);
        assert_eq!(
            session.quiz().state(),
            QuizState::InProgress { index: 0, score: 0 }
        );

        for _ in 0..4 {
            let a = answer_of(&session);
            session.dispatch(Action::SubmitAnswer(a)).unwrap();
            session.dispatch(Action::Advance).unwrap();
        }
        assert_eq!(session.quiz().state(), QuizState::Complete { score: 4 });
    }

    #[test]
    fn neighbour_wraps() {
        let session = ViewerSession::new(builtin());
        assert_eq!(session.neighbour(1), Some("Game of Thrones"));
        assert_eq!(session.neighbour(-1), Some("Breaking Bad"));
        assert_eq!(session.neighbour(3), Some("Stranger Things"));
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            prop::sample::select(vec!["Stranger Things", "Game of Thrones", "Breaking Bad", "Lost"])
                .prop_map(|t| Action::SelectShow(t.to_string())),
            prop::sample::select(vec![
                "Heisenberg",
                "Chef",
                "Arya",
                "Bran",
                "Eggo waffles",
                "Pizza",
                "3",
                "nonsense",
            ])
            .prop_map(|a| Action::SubmitAnswer(a.to_string())),
            Just(Action::Advance),
            Just(Action::Restart),
        ]
    }

    proptest! {
        #[test]
        fn score_never_exceeds_index(actions in prop::collection::vec(action(), 0..60)) {
            let mut session = ViewerSession::new(builtin());
            for a in actions {
                let _ = session.dispatch(a);
                let quiz = session.quiz();
                prop_assert!(quiz.score() <= quiz.index());
                prop_assert!(quiz.index() <= quiz.total());
                match quiz.state() {
                    QuizState::InProgress { index, score } => {
                        prop_assert!(index < quiz.total());
                        prop_assert_eq!(score, quiz.score());
                    }
                    QuizState::Complete { score } => {
                        prop_assert_eq!(quiz.index(), quiz.total());
                        prop_assert_eq!(score, quiz.score());
                    }
                }
            }
        }
    }
}
