//! HTTP adapters for the generation and storage services
//!
//! Both adapters share one `reqwest::Client` and never return errors: every
//! transport or protocol failure is mapped onto an outcome variant.

pub mod client;
pub mod generator;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{SetupError, build_http_client};
pub use generator::{HttpQuestionGenerator, TRIVIA_PATH};
pub use store::{DATABASE_PATH, HttpQuestionStore};
