//! Question generator port
//!
//! Defines how the application layer asks the generation service for a question.

use async_trait::async_trait;
use trivia_domain::{GenerationOutcome, GenerationRequest};

/// Source of generated trivia questions
///
/// Implementations (adapters) live in the infrastructure layer. `fetch`
/// issues exactly one request for `request.category` and always returns an
/// outcome: timeouts, transport failures and unexpected responses are
/// reported through [`GenerationOutcome`] variants instead of errors.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn fetch(&self, request: &GenerationRequest) -> GenerationOutcome;
}
