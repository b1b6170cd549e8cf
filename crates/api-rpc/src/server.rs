//! JSON-RPC Server
//!
//! Serves JSON-RPC 2.0 over HTTP on a TCP address (localhost by default).

use crate::handler::RpcHandler;
use crate::types::{AnswerIdRequest, CreateAnswerRequest, CreateQuestionRequest, QuestionIdRequest};
use jsonrpsee::server::{Server, ServerHandle};
use jsonrpsee::RpcModule;
use qanda_core::port::{AnswerRepository, QuestionRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

const DEFAULT_RPC_HOST: &str = "127.0.0.1";
const DEFAULT_RPC_PORT: u16 = 9527;

/// RPC Server Configuration
#[derive(Debug, Clone)]
pub struct RpcServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for RpcServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_RPC_HOST.to_string(),
            port: DEFAULT_RPC_PORT,
        }
    }
}

/// RPC Server
pub struct RpcServer {
    config: RpcServerConfig,
    handler: Arc<RpcHandler>,
}

impl RpcServer {
    pub fn new(
        config: RpcServerConfig,
        question_repo: Arc<dyn QuestionRepository>,
        answer_repo: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            config,
            handler: Arc::new(RpcHandler::new(question_repo, answer_repo)),
        }
    }

    /// Start the JSON-RPC server
    ///
    /// Returns the bound address (useful when port 0 was requested) and the
    /// handle used to stop the server.
    pub async fn start(self) -> Result<(SocketAddr, ServerHandle), String> {
        let addr = format!("{}:{}", self.config.host, self.config.port);

        let server = Server::builder()
            .build(&addr)
            .await
            .map_err(|e| format!("Failed to build server on {}: {}", addr, e))?;
        let local_addr = server
            .local_addr()
            .map_err(|e| format!("Failed to read bound address: {}", e))?;

        info!(addr = %local_addr, "Starting JSON-RPC server");

        let mut module = RpcModule::new(());

        // Questions
        let handler = self.handler.clone();
        module
            .register_async_method("questions.list.v1", move |_, _, _| {
                let handler = handler.clone();
                async move { handler.list_questions().await }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("questions.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateQuestionRequest = params.parse()?;
                    handler.create_question(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("questions.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: QuestionIdRequest = params.parse()?;
                    handler.get_question(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("questions.delete.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: QuestionIdRequest = params.parse()?;
                    handler.delete_question(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // Answers
        let handler = self.handler.clone();
        module
            .register_async_method("answers.create.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: CreateAnswerRequest = params.parse()?;
                    handler.create_answer(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("answers.get.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: AnswerIdRequest = params.parse()?;
                    handler.get_answer(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        let handler = self.handler.clone();
        module
            .register_async_method("answers.delete.v1", move |params, _, _| {
                let handler = handler.clone();
                async move {
                    let req: AnswerIdRequest = params.parse()?;
                    handler.delete_answer(req).await
                }
            })
            .map_err(|e| e.to_string())?;

        // System
        let handler = self.handler.clone();
        module
            .register_method("system.health.v1", move |_, _, _| {
                Ok::<_, jsonrpsee::types::ErrorObjectOwned>(handler.health())
            })
            .map_err(|e| e.to_string())?;

        let handle = server.start(module);
        info!("JSON-RPC server started successfully");

        Ok((local_addr, handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;
    use jsonrpsee::core::client::ClientT;
    use jsonrpsee::core::params::{ArrayParams, ObjectParams};
    use jsonrpsee::core::ClientError;
    use jsonrpsee::http_client::HttpClientBuilder;
    use qanda_core::domain::{Answer, Question};
    use qanda_core::port::time_provider::SystemTimeProvider;
    use qanda_core::port::TimeProvider;
    use qanda_infra_sqlite::{
        create_pool, run_migrations, SqliteAnswerRepository, SqliteQuestionRepository,
    };

    async fn start_test_server() -> (SocketAddr, ServerHandle) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&pool).await.unwrap();
        let time_provider: Arc<dyn TimeProvider> = Arc::new(SystemTimeProvider);

        let config = RpcServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        RpcServer::new(
            config,
            Arc::new(SqliteQuestionRepository::new(
                pool.clone(),
                time_provider.clone(),
            )),
            Arc::new(SqliteAnswerRepository::new(pool, time_provider)),
        )
        .start()
        .await
        .unwrap()
    }

    fn object(pairs: &[(&str, serde_json::Value)]) -> ObjectParams {
        let mut params = ObjectParams::new();
        for (name, value) in pairs {
            params.insert(*name, value).unwrap();
        }
        params
    }

    #[tokio::test]
    async fn test_question_answer_roundtrip_over_http() {
        let (addr, handle) = start_test_server().await;
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", addr))
            .unwrap();

        let question: Question = client
            .request(
                "questions.create.v1",
                object(&[("text", "What is 2+2?".into())]),
            )
            .await
            .unwrap();

        let answer: Answer = client
            .request(
                "answers.create.v1",
                object(&[
                    ("question_id", question.id.into()),
                    ("user_id", "alice".into()),
                    ("text", "4".into()),
                ]),
            )
            .await
            .unwrap();

        let fetched: Question = client
            .request("questions.get.v1", object(&[("id", question.id.into())]))
            .await
            .unwrap();
        assert_eq!(fetched.answers, vec![answer]);

        let listed: Vec<Question> = client
            .request("questions.list.v1", ArrayParams::new())
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        handle.stop().unwrap();
    }

    #[tokio::test]
    async fn test_not_found_code_over_http() {
        let (addr, handle) = start_test_server().await;
        let client = HttpClientBuilder::default()
            .build(format!("http://{}", addr))
            .unwrap();

        let result: Result<serde_json::Value, _> = client
            .request("questions.delete.v1", object(&[("id", 404.into())]))
            .await;

        match result {
            Err(ClientError::Call(err)) => assert_eq!(err.code(), code::NOT_FOUND),
            other => panic!("expected not-found call error, got {:?}", other),
        }

        handle.stop().unwrap();
    }
}
