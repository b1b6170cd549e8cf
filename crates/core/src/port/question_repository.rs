// Question Repository Port (Interface)

use crate::domain::{NewQuestion, Question, QuestionId};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Repository interface for Question persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a new question; the store assigns id and created_at
    async fn insert(&self, question: &NewQuestion) -> Result<Question>;

    /// All questions, shallow, ascending id
    async fn list(&self) -> Result<Vec<Question>>;

    /// Find question by ID, optionally with its answers attached
    async fn find_by_id(&self, id: QuestionId, with_answers: bool) -> Result<Option<Question>>;

    /// Existence probe (does not materialize the row)
    async fn exists(&self, id: QuestionId) -> Result<bool>;

    /// Delete a question and all of its answers in one atomic unit.
    ///
    /// Returns `None` if the question was absent, otherwise the number of
    /// answers removed with it.
    async fn delete_cascade(&self, id: QuestionId) -> Result<Option<u64>>;
}
