// Domain Layer - Pure business logic and entities

pub mod answer;
pub mod error;
pub mod question;

// Re-exports
pub use answer::{Answer, AnswerId, NewAnswer};
pub use error::DomainError;
pub use question::{NewQuestion, Question, QuestionId};
