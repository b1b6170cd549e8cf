// Application Layer - Consistency Core use cases

pub mod answer_service;
pub mod question_service;

// Re-exports
pub use answer_service::AnswerService;
pub use question_service::QuestionService;
