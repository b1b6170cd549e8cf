//! Qanda SDK - Rust Client Library
//!
//! Typed client for the Qanda JSON-RPC server.
//!
//! # Example
//!
//! ```no_run
//! use qanda_sdk::QandaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QandaClient::connect("http://127.0.0.1:9527").await?;
//!
//!     let question = client.create_question("What is 2+2?").await?;
//!     client.create_answer(question.id, "alice", "4").await?;
//!
//!     let question = client.get_question(question.id).await?;
//!     println!("{} has {} answer(s)", question.text, question.answers.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::QandaClient;
pub use error::{Result, SdkError};
pub use types::{Answer, DeleteResponse, HealthResponse, Question};
