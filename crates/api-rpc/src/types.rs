//! RPC Request/Response Types
//!
//! Method parameters and results. Questions and answers themselves are
//! returned as the core domain types.

use qanda_core::domain::{AnswerId, QuestionId};
use serde::{Deserialize, Serialize};

/// questions.create.v1
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
}

/// questions.get.v1 / questions.delete.v1
#[derive(Debug, Deserialize)]
pub struct QuestionIdRequest {
    pub id: QuestionId,
}

/// answers.create.v1
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub question_id: QuestionId,
    pub user_id: String,
    pub text: String,
}

/// answers.get.v1 / answers.delete.v1
#[derive(Debug, Deserialize)]
pub struct AnswerIdRequest {
    pub id: AnswerId,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

/// system.health.v1
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
