//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid category: {0:?} (category cannot be empty)")]
    InvalidCategory(String),
}
