//! Option and argument definitions for command-line token classification.
//!
//! This crate describes which tokens an invocation may legally carry:
//!
//! - [`InputDefinition`]: ordered positional arguments plus options.
//! - [`InputOption`]: a long name, an optional one-character shortcut, a
//!   [`ValueMode`] and whether repeated occurrences accumulate.
//! - [`InputArgument`]: a positional slot, optionally required, optionally
//!   absorbing every remaining token.
//!
//! Validation ([`validate_definition`]) catches structural errors such as
//! duplicate shortcuts or an array argument that is not last. Definitions
//! can be loaded from YAML or JSON files with [`InputDefinition::load`].
//!
//! # Example
//!
//! ```
//! use argv_input_core::*;
//!
//! let definition = InputDefinition::new()
//!     .with_argument(InputArgument::required("command"))
//!     .with_option(InputOption::flag("verbose").with_shortcut('v'))
//!     .with_option(InputOption::with_value("env", ValueMode::Required).with_shortcut('e'));
//!
//! assert!(definition.has_option("env"));
//! assert_eq!(definition.option_for_shortcut('v').unwrap().name, "verbose");
//! assert!(validate_definition(&definition).is_empty());
//! ```

mod config;
mod error;
mod types;
mod validate;

pub use config::DefinitionFormat;
pub use error::{ConfigError, Result};
pub use types::*;
pub use validate::{DefinitionError, validate_definition};
