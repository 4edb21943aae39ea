//! Definition files.
//!
//! Definitions can be authored as YAML or JSON and loaded before parsing.
//! The format is picked by file extension: `.json` is read as JSON, anything
//! else as YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! arguments:
//!   - name: command
//!     required: true
//!   - name: paths
//!     is_array: true
//! options:
//!   - name: verbose
//!     shortcut: v
//!   - name: tag
//!     shortcut: t
//!     mode: Required
//!     is_array: true
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::Result;
use crate::{InputDefinition, validate_definition};

/// On-disk encoding of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Picks the format from a path's extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use argv_input_core::DefinitionFormat;
    ///
    /// assert_eq!(DefinitionFormat::from_path("cli.json"), DefinitionFormat::Json);
    /// assert_eq!(DefinitionFormat::from_path("cli.yml"), DefinitionFormat::Yaml);
    /// assert_eq!(DefinitionFormat::from_path("cli"), DefinitionFormat::Yaml);
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

impl InputDefinition {
    /// Loads and validates a definition file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be read, [`JsonError`](crate::ConfigError::JsonError) or
    /// [`YamlError`](crate::ConfigError::YamlError) if it cannot be parsed,
    /// and [`InvalidDefinition`](crate::ConfigError::InvalidDefinition) if
    /// the definition breaks a structural rule.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let definition: Self = match DefinitionFormat::from_path(path) {
            DefinitionFormat::Json => serde_json::from_reader(reader)?,
            DefinitionFormat::Yaml => serde_yaml::from_reader(reader)?,
        };

        if let Some(error) = validate_definition(&definition).into_iter().next() {
            return Err(error.into());
        }
        Ok(definition)
    }

    /// Saves the definition in the format implied by `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot
    /// be written, or a serialization error for the chosen format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        match DefinitionFormat::from_path(path) {
            DefinitionFormat::Json => serde_json::to_writer_pretty(writer, self)?,
            DefinitionFormat::Yaml => serde_yaml::to_writer(writer, self)?,
        }
        Ok(())
    }
}
