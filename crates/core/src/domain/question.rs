// Question Domain Model

use super::answer::Answer;
use super::error::{require_non_empty, Result};
use serde::{Deserialize, Serialize};

/// Question ID (assigned by the store)
pub type QuestionId = i64;

/// Question Entity
///
/// `answers` is only populated by a deep fetch; creation and listing leave it empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub created_at: i64, // epoch ms
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }
}

/// Validated input for creating a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    text: String,
}

impl NewQuestion {
    /// Trims `text` and rejects it when empty.
    pub fn new(text: &str) -> Result<Self> {
        Ok(Self {
            text: require_non_empty("question text", text)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
