//! SDK Request/Response Types
//!
//! Mirrors the JSON-RPC types served by the api-rpc crate.

use serde::{Deserialize, Serialize};

/// A question; `answers` is only filled by [`crate::QandaClient::get_question`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: i64,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: i64,
}

/// Response from delete operations
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
