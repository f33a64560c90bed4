//! Infrastructure layer for trivia-generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, ConfigWriteError, ConfigWriter, FileConfig,
    FileEndpointConfig, FileLoggingConfig, ServiceEndpoint, ServiceEndpoints,
};
pub use http::{HttpQuestionGenerator, HttpQuestionStore, SetupError, build_http_client};
pub use logging::TracingOutcomeLogger;
