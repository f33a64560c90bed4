//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod outcome_logger;
pub mod progress;
pub mod question_generator;
pub mod question_store;
