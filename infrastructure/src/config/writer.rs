//! In-place editing of single config fields (`config set`)

use super::file_config::{
    API_CONFIG_SECTION, DATABASE_API_CONFIG_SECTION, HOST_CONFIG_FIELD, PORT_CONFIG_FIELD,
};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while updating a config file
#[derive(Debug, Error)]
pub enum ConfigWriteError {
    #[error("you cannot set an empty value for {section}.{field}")]
    EmptyValue { section: String, field: String },

    #[error("no such option has been found: {section}.{field}")]
    NoSuchOption { section: String, field: String },

    #[error("{section}.{field} expects a number, got {value:?}")]
    InvalidNumber {
        section: String,
        field: String,
        value: String,
    },

    #[error("{0} is not a table in the config file")]
    NotATable(String),

    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Text,
    Number,
}

fn field_kind(section: &str, field: &str) -> Option<FieldKind> {
    match (section, field) {
        (API_CONFIG_SECTION | DATABASE_API_CONFIG_SECTION, HOST_CONFIG_FIELD | PORT_CONFIG_FIELD) => {
            Some(FieldKind::Text)
        }
        ("pipeline", "timeout_seconds" | "question_number" | "max_concurrency") => {
            Some(FieldKind::Number)
        }
        ("logging", "directory" | "file_name" | "level") => Some(FieldKind::Text),
        ("logging", "max_files") => Some(FieldKind::Number),
        _ => None,
    }
}

/// Writes individual fields back to a TOML config file
///
/// Only known `section.field` pairs are accepted. The file is created when
/// missing; comments in an existing file are not preserved.
pub struct ConfigWriter;

impl ConfigWriter {
    pub fn set_field(
        path: &Path,
        section: &str,
        field: &str,
        value: &str,
    ) -> Result<(), ConfigWriteError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigWriteError::EmptyValue {
                section: section.to_string(),
                field: field.to_string(),
            });
        }

        let kind = field_kind(section, field).ok_or_else(|| ConfigWriteError::NoSuchOption {
            section: section.to_string(),
            field: field.to_string(),
        })?;

        let toml_value = match kind {
            FieldKind::Text => toml::Value::String(value.to_string()),
            FieldKind::Number => value
                .parse::<i64>()
                .ok()
                .filter(|n| *n >= 0)
                .map(toml::Value::Integer)
                .ok_or_else(|| ConfigWriteError::InvalidNumber {
                    section: section.to_string(),
                    field: field.to_string(),
                    value: value.to_string(),
                })?,
        };

        let mut document: toml::Table = if path.exists() {
            std::fs::read_to_string(path)?.parse()?
        } else {
            toml::Table::new()
        };

        let table = document
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::Table::new()))
            .as_table_mut()
            .ok_or_else(|| ConfigWriteError::NotATable(section.to_string()))?;
        table.insert(field.to_string(), toml_value);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string(&document)?)?;

        info!("Set {}.{} in {}", section, field, path.display());
        Ok(())
    }
}
