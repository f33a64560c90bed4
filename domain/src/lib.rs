//! Domain layer for trivia-generator
//!
//! This crate contains the values that flow through the generation pipeline.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Generation request**: one of N independent attempts to fetch a
//!   question for a category, identified by its `sequence_index`
//! - **Outcome**: the terminal result of a generation or delivery attempt.
//!   Failures are values, never errors, so one bad request cannot abort the
//!   rest of the batch.

pub mod core;
pub mod pipeline;

// Re-export commonly used types
pub use core::{category::Category, error::DomainError, question::Question};
pub use pipeline::{
    entities::{GenerationRequest, Phase},
    value_objects::{DeliveryOutcome, DeliveryRecord, GenerationOutcome, PipelineReport},
};
