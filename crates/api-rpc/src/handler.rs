//! RPC Method Handlers
//!
//! Thin adapters: decode params, call the services, map errors.

use crate::error::to_rpc_error;
use crate::types::{
    AnswerIdRequest, CreateAnswerRequest, CreateQuestionRequest, DeleteResponse, HealthResponse,
    QuestionIdRequest,
};
use jsonrpsee::types::ErrorObjectOwned;
use qanda_core::application::{AnswerService, QuestionService};
use qanda_core::domain::{Answer, Question};
use qanda_core::port::{AnswerRepository, QuestionRepository};
use std::sync::Arc;

/// RPC Handler with injected dependencies
pub struct RpcHandler {
    questions: QuestionService,
    answers: AnswerService,
}

impl RpcHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            questions: QuestionService::new(question_repo.clone()),
            answers: AnswerService::new(answer_repo, question_repo),
        }
    }

    /// questions.list.v1
    pub async fn list_questions(&self) -> Result<Vec<Question>, ErrorObjectOwned> {
        self.questions.get_all().await.map_err(to_rpc_error)
    }

    /// questions.create.v1
    pub async fn create_question(
        &self,
        params: CreateQuestionRequest,
    ) -> Result<Question, ErrorObjectOwned> {
        self.questions
            .create(&params.text)
            .await
            .map_err(to_rpc_error)
    }

    /// questions.get.v1
    pub async fn get_question(
        &self,
        params: QuestionIdRequest,
    ) -> Result<Question, ErrorObjectOwned> {
        self.questions
            .get_by_id(params.id)
            .await
            .map_err(to_rpc_error)
    }

    /// questions.delete.v1
    pub async fn delete_question(
        &self,
        params: QuestionIdRequest,
    ) -> Result<DeleteResponse, ErrorObjectOwned> {
        self.questions
            .delete(params.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DeleteResponse {
            id: params.id,
            deleted: true,
        })
    }

    /// answers.create.v1
    pub async fn create_answer(
        &self,
        params: CreateAnswerRequest,
    ) -> Result<Answer, ErrorObjectOwned> {
        self.answers
            .create(params.question_id, &params.user_id, &params.text)
            .await
            .map_err(to_rpc_error)
    }

    /// answers.get.v1
    pub async fn get_answer(&self, params: AnswerIdRequest) -> Result<Answer, ErrorObjectOwned> {
        self.answers
            .get_by_id(params.id)
            .await
            .map_err(to_rpc_error)
    }

    /// answers.delete.v1
    pub async fn delete_answer(
        &self,
        params: AnswerIdRequest,
    ) -> Result<DeleteResponse, ErrorObjectOwned> {
        self.answers
            .delete(params.id)
            .await
            .map_err(to_rpc_error)?;

        Ok(DeleteResponse {
            id: params.id,
            deleted: true,
        })
    }

    /// system.health.v1
    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            version: qanda_core::VERSION.to_string(),
        }
    }
}
