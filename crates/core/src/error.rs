// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Closed set of outcomes the request surface has to distinguish. Callers
/// match on the variant, never on the message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] crate::domain::DomainError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn question_not_found(id: crate::domain::QuestionId) -> Self {
        AppError::NotFound(format!("Question {} not found", id))
    }

    pub fn answer_not_found(id: crate::domain::AnswerId) -> Self {
        AppError::NotFound(format!("Answer {} not found", id))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Storage(String)
