//! Application-level configuration.
//!
//! - [`PipelineParams`] - fan-out control for the generation pipeline

pub mod pipeline_params;

pub use pipeline_params::PipelineParams;
