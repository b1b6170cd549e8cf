// Answer Domain Model

use super::error::{require_non_empty, Result};
use super::question::QuestionId;
use serde::{Deserialize, Serialize};

/// Answer ID (assigned by the store)
pub type AnswerId = i64;

/// Answer Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId, // back-reference, existence lookups only
    pub user_id: String,
    pub text: String,
    pub created_at: i64, // epoch ms
}

/// Validated input for creating an answer
///
/// Validation says nothing about whether `question_id` exists; that is
/// checked against the store by the answer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    question_id: QuestionId,
    user_id: String,
    text: String,
}

impl NewAnswer {
    /// Trims `text` and `user_id` (checked in that order) and rejects empties.
    pub fn new(question_id: QuestionId, user_id: &str, text: &str) -> Result<Self> {
        let text = require_non_empty("answer text", text)?;
        let user_id = require_non_empty("user_id", user_id)?;

        Ok(Self {
            question_id,
            user_id,
            text,
        })
    }

    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_new_answer_trims_fields() {
        let a = NewAnswer::new(7, "  alice ", " four\n").unwrap();
        assert_eq!(a.question_id(), 7);
        assert_eq!(a.user_id(), "alice");
        assert_eq!(a.text(), "four");
    }

    #[test]
    fn test_new_answer_checks_text_before_user() {
        let err = NewAnswer::new(1, "", "  ").unwrap_err();
        assert_eq!(
            err,
            DomainError::EmptyField {
                field: "answer text"
            }
        );
    }

    #[test]
    fn test_new_answer_rejects_blank_user() {
        let err = NewAnswer::new(1, "   ", "four").unwrap_err();
        assert_eq!(err, DomainError::EmptyField { field: "user_id" });
    }
}
