//! Question store port
//!
//! Defines how generated questions are handed to the storage service.

use async_trait::async_trait;
use trivia_domain::{DeliveryOutcome, Question};

/// Destination for generated questions
///
/// Same contract as [`QuestionGenerator`](super::question_generator::QuestionGenerator):
/// one request per call, and every failure comes back as a [`DeliveryOutcome`].
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn deliver(&self, question: &Question) -> DeliveryOutcome;
}
