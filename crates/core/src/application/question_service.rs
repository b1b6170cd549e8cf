// Question Service - create / list / fetch / cascade delete

use crate::domain::{NewQuestion, Question, QuestionId};
use crate::error::{AppError, Result};
use crate::port::QuestionRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Question use cases over an injected repository
pub struct QuestionService {
    question_repo: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(question_repo: Arc<dyn QuestionRepository>) -> Self {
        Self { question_repo }
    }

    /// Create a question from caller-supplied text
    pub async fn create(&self, text: &str) -> Result<Question> {
        let new_question = NewQuestion::new(text)?;
        let question = self.question_repo.insert(&new_question).await?;

        info!(question_id = question.id, "Question created");
        Ok(question)
    }

    /// All questions, without answers
    pub async fn get_all(&self) -> Result<Vec<Question>> {
        self.question_repo.list().await
    }

    /// One question with all of its answers
    pub async fn get_by_id(&self, id: QuestionId) -> Result<Question> {
        self.question_repo
            .find_by_id(id, true)
            .await?
            .ok_or_else(|| AppError::question_not_found(id))
    }

    /// Delete a question together with its answers
    pub async fn delete(&self, id: QuestionId) -> Result<()> {
        if !self.question_repo.exists(id).await? {
            debug!(question_id = id, "Delete rejected: question does not exist");
            return Err(AppError::question_not_found(id));
        }

        // Deleted concurrently between the probe and the delete
        let answers_removed = self
            .question_repo
            .delete_cascade(id)
            .await?
            .ok_or_else(|| AppError::question_not_found(id))?;

        info!(
            question_id = id,
            answers_removed, "Question deleted with its answers"
        );
        Ok(())
    }
}
