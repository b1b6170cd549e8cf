// Answer Repository Port (Interface)

use crate::domain::{Answer, AnswerId, NewAnswer};
use crate::error::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Repository interface for Answer persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert a new answer.
    ///
    /// A foreign-key rejection (owning question gone) must surface as
    /// `AppError::NotFound`, not `AppError::Storage`.
    async fn insert(&self, answer: &NewAnswer) -> Result<Answer>;

    /// Find answer by ID
    async fn find_by_id(&self, id: AnswerId) -> Result<Option<Answer>>;

    /// Delete answer; `false` if no row matched
    async fn delete(&self, id: AnswerId) -> Result<bool>;
}
