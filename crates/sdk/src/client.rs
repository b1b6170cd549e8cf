//! Qanda Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{Answer, DeleteResponse, HealthResponse, Question};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::{ArrayParams, ObjectParams};
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Serialize;
use std::time::Duration;

/// Qanda Client
///
/// # Example
///
/// ```no_run
/// use qanda_sdk::QandaClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QandaClient::connect("http://127.0.0.1:9527").await?;
/// for question in client.list_questions().await? {
///     println!("#{} {}", question.id, question.text);
/// }
/// # Ok(())
/// # }
/// ```
pub struct QandaClient {
    client: HttpClient,
}

impl QandaClient {
    /// Connect to a Qanda server
    ///
    /// # Arguments
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:9527`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// All questions, without answers
    pub async fn list_questions(&self) -> Result<Vec<Question>> {
        let questions = self
            .client
            .request("questions.list.v1", ArrayParams::new())
            .await?;
        Ok(questions)
    }

    /// Create a question
    ///
    /// Fails with a validation error (see [`SdkError::is_validation`]) when
    /// `text` is blank.
    pub async fn create_question(&self, text: impl Into<String>) -> Result<Question> {
        let params = object([("text", text.into())])?;
        let question = self.client.request("questions.create.v1", params).await?;
        Ok(question)
    }

    /// A question with all of its answers
    pub async fn get_question(&self, id: i64) -> Result<Question> {
        let question = self
            .client
            .request("questions.get.v1", object([("id", id)])?)
            .await?;
        Ok(question)
    }

    /// Delete a question and every answer attached to it
    pub async fn delete_question(&self, id: i64) -> Result<DeleteResponse> {
        let response = self
            .client
            .request("questions.delete.v1", object([("id", id)])?)
            .await?;
        Ok(response)
    }

    /// Answer an existing question
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use qanda_sdk::QandaClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = QandaClient::connect("http://127.0.0.1:9527").await?;
    /// match client.create_answer(42, "alice", "4").await {
    ///     Ok(answer) => println!("answer #{}", answer.id),
    ///     Err(e) if e.is_not_found() => println!("question 42 is gone"),
    ///     Err(e) => return Err(e.into()),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_answer(
        &self,
        question_id: i64,
        user_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Answer> {
        let mut params = ObjectParams::new();
        params.insert("question_id", question_id)?;
        params.insert("user_id", user_id.into())?;
        params.insert("text", text.into())?;

        let answer = self.client.request("answers.create.v1", params).await?;
        Ok(answer)
    }

    pub async fn get_answer(&self, id: i64) -> Result<Answer> {
        let answer = self
            .client
            .request("answers.get.v1", object([("id", id)])?)
            .await?;
        Ok(answer)
    }

    pub async fn delete_answer(&self, id: i64) -> Result<DeleteResponse> {
        let response = self
            .client
            .request("answers.delete.v1", object([("id", id)])?)
            .await?;
        Ok(response)
    }

    /// Server liveness and version
    pub async fn health(&self) -> Result<HealthResponse> {
        let health = self
            .client
            .request("system.health.v1", ArrayParams::new())
            .await?;
        Ok(health)
    }
}

fn object<V: Serialize, const N: usize>(pairs: [(&str, V); N]) -> Result<ObjectParams> {
    let mut params = ObjectParams::new();
    for (name, value) in pairs {
        params.insert(name, value)?;
    }
    Ok(params)
}
