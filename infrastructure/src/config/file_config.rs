//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Host/port fields stay optional here so that a missing value can be
//! reported precisely by [`FileConfig::validate`] instead of as a generic
//! deserialization failure.

use serde::{Deserialize, Deserializer, Serialize};
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;
use trivia_application::PipelineParams;

/// Section describing the generation service
pub const API_CONFIG_SECTION: &str = "api_config";
/// Section describing the storage service
pub const DATABASE_API_CONFIG_SECTION: &str = "database_api_config";
pub const HOST_CONFIG_FIELD: &str = "host";
pub const PORT_CONFIG_FIELD: &str = "port";

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("missing required config field {section}.{field}")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("config field cannot be empty: {section}.{field}")]
    EmptyField {
        section: &'static str,
        field: &'static str,
    },

    #[error("invalid port for {section}: {value:?}")]
    InvalidPort { section: &'static str, value: String },

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("max_concurrency cannot be 0")]
    InvalidConcurrency,
}

/// Address of one HTTP service, resolved from a config section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub host: String,
    pub port: u16,
}

impl ServiceEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://host:port` followed by `path`
    pub fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}

impl std::fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Both services the pipeline talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub generation: ServiceEndpoint,
    pub storage: ServiceEndpoint,
}

/// Raw host/port section from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Accepts `port = "8000"` as well as `port = 8000`
    #[serde(
        deserialize_with = "deserialize_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub port: Option<String>,
}

impl FileEndpointConfig {
    pub fn new(host: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port.into()),
        }
    }

    fn resolve(&self, section: &'static str) -> Result<ServiceEndpoint, ConfigValidationError> {
        let host = required(section, HOST_CONFIG_FIELD, self.host.as_deref())?;
        let port = required(section, PORT_CONFIG_FIELD, self.port.as_deref())?;
        let port = port
            .parse::<u16>()
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| ConfigValidationError::InvalidPort {
                section,
                value: port.to_string(),
            })?;
        Ok(ServiceEndpoint::new(host, port))
    }
}

fn required<'a>(
    section: &'static str,
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ConfigValidationError> {
    match value.map(str::trim) {
        None => Err(ConfigValidationError::MissingField { section, field }),
        Some("") => Err(ConfigValidationError::EmptyField { section, field }),
        Some(v) => Ok(v),
    }
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PortValue {
        Text(String),
        Number(u64),
    }

    Ok(
        Option::<PortValue>::deserialize(deserializer)?.map(|value| match value {
            PortValue::Text(text) => text,
            PortValue::Number(number) => number.to_string(),
        }),
    )
}

/// Raw pipeline configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Per-request timeout in seconds for both services
    pub timeout_seconds: u64,
    /// Default number of questions when `--question-number` is not given
    pub question_number: usize,
    /// Optional ceiling on in-flight requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<usize>,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            question_number: 10,
            max_concurrency: None,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory holding the rotated log files
    pub directory: String,
    /// Base name of the log file
    pub file_name: String,
    /// Number of rotated files to keep
    pub max_files: usize,
    /// Filter directive for the log file (e.g. "info", "debug")
    pub level: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "trivia_generator.log".to_string(),
            max_files: 8,
            level: "info".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service
    pub api_config: FileEndpointConfig,
    /// Storage service
    pub database_api_config: FileEndpointConfig,
    pub pipeline: FilePipelineConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration and resolve both service endpoints
    pub fn validate(&self) -> Result<ServiceEndpoints, ConfigValidationError> {
        let generation = self.api_config.resolve(API_CONFIG_SECTION)?;
        let storage = self
            .database_api_config
            .resolve(DATABASE_API_CONFIG_SECTION)?;

        if self.pipeline.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(0) = self.pipeline.max_concurrency {
            return Err(ConfigValidationError::InvalidConcurrency);
        }

        Ok(ServiceEndpoints {
            generation,
            storage,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline.timeout_seconds)
    }

    pub fn pipeline_params(&self) -> PipelineParams {
        PipelineParams::default()
            .with_max_concurrency(self.pipeline.max_concurrency.and_then(NonZeroUsize::new))
    }
}
