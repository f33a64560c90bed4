//! Configuration file loading for trivia-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIVIA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./trivia.toml` or `./.trivia.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/trivia-generator/config.toml`
//! 5. Default values
//!
//! Missing or empty service addresses are rejected by
//! [`FileConfig::validate`] before the pipeline starts.

mod file_config;
mod loader;
mod writer;

pub use file_config::{
    API_CONFIG_SECTION, ConfigValidationError, DATABASE_API_CONFIG_SECTION, FileConfig,
    FileEndpointConfig, FileLoggingConfig, FilePipelineConfig, HOST_CONFIG_FIELD,
    PORT_CONFIG_FIELD, ServiceEndpoint, ServiceEndpoints,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use writer::{ConfigWriteError, ConfigWriter};
