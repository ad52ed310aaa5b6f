//! Trivia quiz engine and viewer session for Series Companion.
//!
//! [`QuizSession`] is the only real state machine in the application:
//! question progression, answer submission, scoring, completion and
//! restart. [`ViewerSession`] couples it with the show selection and is
//! driven by [`Action`] messages.

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{QuizSession, QuizState, Verdict};
pub use error::{QuizError, QuizResult, SessionError, SessionResult};
pub use session::{Action, Outcome, ViewerSession};
