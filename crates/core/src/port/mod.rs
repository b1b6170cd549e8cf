// Port Layer - Interfaces for external dependencies

pub mod answer_repository;
pub mod question_repository;
pub mod time_provider;

// Re-exports
pub use answer_repository::AnswerRepository;
pub use question_repository::QuestionRepository;
pub use time_provider::TimeProvider;

#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
