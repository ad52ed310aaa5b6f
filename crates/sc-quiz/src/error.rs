//! Error types for the quiz engine and viewer session.

use thiserror::Error;

use sc_core::CatalogError;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Result type for viewer session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Misuse of the quiz state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The submitted answer is not one of the current question's options.
    #[error("\"{answer}\" is not one of the options")]
    InvalidAnswer {
        /// The rejected answer.
        answer: String,
    },

    /// An answer was already submitted for this question.
    #[error("this question has already been answered")]
    AlreadySubmitted,

    /// Advance was requested before answering.
    #[error("answer the question before moving on")]
    NotSubmitted,

    /// The quiz is complete; only restart is allowed.
    #[error("the quiz is finished")]
    Finished,
}

/// Errors returned by [`crate::ViewerSession::dispatch`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// Quiz state machine error.
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Catalog lookup error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
