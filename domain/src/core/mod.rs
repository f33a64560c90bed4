//! Core domain concepts shared across the pipeline.
//!
//! - [`question::Question`] - a generated trivia question
//! - [`category::Category`] - a validated trivia category
//! - [`error::DomainError`] - domain-level errors

pub mod category;
pub mod error;
pub mod question;
