use serde::{Deserialize, Serialize};

/// One multiple-choice trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// The question text.
    pub prompt: String,
    /// Answer choices in display order.
    pub options: Vec<String>,
    /// The correct choice. Expected to be one of `options`.
    pub answer: String,
}

impl QuizItem {
    /// Creates a quiz item.
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Returns true if `choice` is one of the offered options.
    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }

    /// Returns true if `choice` is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }

    /// Options that appear more than once, in first-seen order.
    pub fn duplicate_options(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, opt) in self.options.iter().enumerate() {
            if self.options[..i].contains(opt) && !dups.contains(&opt.as_str()) {
                dups.push(opt);
            }
        }
        dups
    }
}
