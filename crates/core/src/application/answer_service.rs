// Answer Service - create under an existing question / fetch / delete

use crate::domain::{Answer, AnswerId, NewAnswer, QuestionId};
use crate::error::{AppError, Result};
use crate::port::{AnswerRepository, QuestionRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Answer use cases; needs the question repository for existence probes
pub struct AnswerService {
    answer_repo: Arc<dyn AnswerRepository>,
    question_repo: Arc<dyn QuestionRepository>,
}

impl AnswerService {
    pub fn new(
        answer_repo: Arc<dyn AnswerRepository>,
        question_repo: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self {
            answer_repo,
            question_repo,
        }
    }

    /// Create an answer for `question_id`
    ///
    /// Fields are validated before the existence probe, so a bad request
    /// never costs a round trip. If the question disappears between the
    /// probe and the insert, the repository reports `NotFound` from the
    /// foreign-key rejection.
    pub async fn create(
        &self,
        question_id: QuestionId,
        user_id: &str,
        text: &str,
    ) -> Result<Answer> {
        let new_answer = NewAnswer::new(question_id, user_id, text)?;

        if !self.question_repo.exists(question_id).await? {
            debug!(question_id, "Answer rejected: question does not exist");
            return Err(AppError::question_not_found(question_id));
        }

        let answer = self.answer_repo.insert(&new_answer).await?;

        info!(answer_id = answer.id, question_id, "Answer created");
        Ok(answer)
    }

    pub async fn get_by_id(&self, id: AnswerId) -> Result<Answer> {
        self.answer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::answer_not_found(id))
    }

    /// Delete a single answer (no dependents, never cascades)
    pub async fn delete(&self, id: AnswerId) -> Result<()> {
        let answer = self.get_by_id(id).await?;

        if !self.answer_repo.delete(answer.id).await? {
            // Removed concurrently (directly or by its question's cascade)
            return Err(AppError::answer_not_found(id));
        }

        info!(answer_id = id, question_id = answer.question_id, "Answer deleted");
        Ok(())
    }
}
