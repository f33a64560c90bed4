//! Application layer for trivia-generator
//!
//! This crate contains the generation pipeline use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PipelineParams;
pub use ports::{
    outcome_logger::{NoOutcomeLogger, OutcomeLogger, Severity},
    progress::{NoProgress, ProgressNotifier},
    question_generator::QuestionGenerator,
    question_store::QuestionStore,
};
pub use use_cases::generate_questions::{GenerateQuestionsInput, GenerateQuestionsUseCase};
