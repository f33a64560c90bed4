//! Outcome logging adapters.

pub mod tracing_logger;

pub use tracing_logger::{OUTCOME_TARGET, TracingOutcomeLogger};
