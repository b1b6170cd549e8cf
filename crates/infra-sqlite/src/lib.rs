// Qanda Infrastructure - SQLite Adapter
// Implements: QuestionRepository, AnswerRepository

mod answer_repository;
mod connection;
mod error;
mod migration;
mod question_repository;

pub use answer_repository::SqliteAnswerRepository;
pub use connection::{connect_with_retry, create_pool, RetryConfig};
pub use migration::run_migrations;
pub use question_repository::SqliteQuestionRepository;

// Note: sqlx::Error conversion is handled by helper functions in `error`
// due to Rust's orphan rules (cannot implement From<sqlx::Error> for AppError here)
