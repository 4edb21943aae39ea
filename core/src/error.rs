//! Error types for loading and saving definition files.

use thiserror::Error;

use crate::DefinitionError;

/// Errors that can occur while reading or writing a definition file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The file parsed but describes an invalid definition.
    #[error("invalid definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
