//! Definition types for command-line token classification.
//!
//! This module defines the read-only description of which options and
//! positional arguments an invocation may carry. The types are designed for
//! serialization with [`serde`] so definitions can be authored as YAML or
//! JSON files and loaded before parsing.

use serde::{Deserialize, Serialize};

/// How an option treats a value.
///
/// # Examples
///
/// ```
/// use argv_input_core::ValueMode;
///
/// assert_eq!(ValueMode::default(), ValueMode::None);
/// assert!(ValueMode::Optional.accepts_value());
/// assert!(!ValueMode::Optional.is_value_required());
/// assert!(ValueMode::Required.is_value_required());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ValueMode {
    /// Boolean flag; presence is the only information (the default).
    #[default]
    None,
    /// A value may follow, inline or as the next token.
    Optional,
    /// A value must be supplied.
    Required,
}

impl ValueMode {
    /// Returns `true` for [`Optional`](ValueMode::Optional) and
    /// [`Required`](ValueMode::Required).
    pub fn accepts_value(self) -> bool {
        !matches!(self, ValueMode::None)
    }

    /// Returns `true` only for [`Required`](ValueMode::Required).
    pub fn is_value_required(self) -> bool {
        matches!(self, ValueMode::Required)
    }
}

/// A legal option.
///
/// An option is addressed by its long `name` (`--verbose`) and optionally by
/// a single-character `shortcut` (`-v`). Parsed values are always stored
/// under the long name, whichever spelling was used.
///
/// # Examples
///
/// ```
/// use argv_input_core::{InputOption, ValueMode};
///
/// let verbose = InputOption::flag("verbose").with_shortcut('v');
/// assert_eq!(verbose.shortcut, Some('v'));
/// assert!(!verbose.accepts_value());
///
/// let tag = InputOption::with_value("tag", ValueMode::Required).allow_multiple();
/// assert!(tag.is_value_required());
/// assert!(tag.is_array);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputOption {
    /// Long name without leading dashes (e.g., "verbose")
    pub name: String,
    /// Single-character shortcut without the dash (e.g., 'v')
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<char>,
    /// Whether and how a value is taken
    #[serde(default)]
    pub mode: ValueMode,
    /// Repeated occurrences accumulate into a list
    #[serde(default)]
    pub is_array: bool,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InputOption {
    /// Creates a boolean flag.
    pub fn flag(name: &str) -> Self {
        Self::with_value(name, ValueMode::None)
    }

    /// Creates an option with the given value mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use argv_input_core::{InputOption, ValueMode};
    ///
    /// let output = InputOption::with_value("output", ValueMode::Optional);
    /// assert!(output.accepts_value());
    /// assert!(!output.is_value_required());
    /// ```
    pub fn with_value(name: &str, mode: ValueMode) -> Self {
        Self {
            name: name.to_string(),
            shortcut: None,
            mode,
            is_array: false,
            description: None,
        }
    }

    /// Sets the shortcut character.
    pub fn with_shortcut(mut self, shortcut: char) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Marks repeated occurrences as accumulating.
    pub fn allow_multiple(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn accepts_value(&self) -> bool {
        self.mode.accepts_value()
    }

    pub fn is_value_required(&self) -> bool {
        self.mode.is_value_required()
    }
}

/// A legal positional argument.
///
/// Arguments are filled in declaration order. Only the final argument of a
/// definition may be an array, absorbing every remaining positional token.
///
/// # Examples
///
/// ```
/// use argv_input_core::InputArgument;
///
/// let source = InputArgument::required("source");
/// assert!(source.required);
///
/// let rest = InputArgument::optional("paths").allow_multiple();
/// assert!(!rest.required);
/// assert!(rest.is_array);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputArgument {
    /// Name the parsed value is stored under
    pub name: String,
    /// Must receive a value for the input to validate
    #[serde(default)]
    pub required: bool,
    /// Absorbs every remaining positional token
    #[serde(default)]
    pub is_array: bool,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InputArgument {
    /// Creates a required argument.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            is_array: false,
            description: None,
        }
    }

    /// Creates an optional argument.
    pub fn optional(name: &str) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            is_array: false,
            description: None,
        }
    }

    /// Marks as accepting every remaining positional token.
    pub fn allow_multiple(mut self) -> Self {
        self.is_array = true;
        self
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }
}

/// The full set of legal arguments and options.
///
/// A definition is built once and only read while parsing.
///
/// # Examples
///
/// ```
/// use argv_input_core::*;
///
/// let definition = InputDefinition::new()
///     .with_argument(InputArgument::required("command"))
///     .with_argument(InputArgument::optional("paths").allow_multiple())
///     .with_option(InputOption::flag("verbose").with_shortcut('v'))
///     .with_option(InputOption::with_value("format", ValueMode::Required).with_shortcut('f'));
///
/// assert_eq!(definition.argument_order(), vec!["command", "paths"]);
/// assert!(definition.has_shortcut('v'));
/// assert_eq!(definition.option_for_shortcut('f').unwrap().name, "format");
/// assert!(validate_definition(&definition).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDefinition {
    /// Positional arguments in declaration order
    #[serde(default)]
    pub arguments: Vec<InputArgument>,
    /// Options
    #[serde(default)]
    pub options: Vec<InputOption>,
}

impl InputDefinition {
    /// Creates an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn with_argument(mut self, argument: InputArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Adds an option.
    pub fn with_option(mut self, option: InputOption) -> Self {
        self.options.push(option);
        self
    }

    /// Argument names in declaration order.
    pub fn argument_order(&self) -> Vec<&str> {
        self.arguments.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.argument(name).is_some()
    }

    pub fn argument(&self, name: &str) -> Option<&InputArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Argument at the given position, if declared.
    pub fn argument_at(&self, index: usize) -> Option<&InputArgument> {
        self.arguments.get(index)
    }

    pub fn has_shortcut(&self, shortcut: char) -> bool {
        self.option_for_shortcut(shortcut).is_some()
    }

    /// Finds the option a shortcut character stands for.
    ///
    /// # Examples
    ///
    /// ```
    /// use argv_input_core::{InputDefinition, InputOption};
    ///
    /// let definition = InputDefinition::new()
    ///     .with_option(InputOption::flag("quiet").with_shortcut('q'));
    ///
    /// assert_eq!(definition.option_for_shortcut('q').unwrap().name, "quiet");
    /// assert!(definition.option_for_shortcut('x').is_none());
    /// ```
    pub fn option_for_shortcut(&self, shortcut: char) -> Option<&InputOption> {
        self.options.iter().find(|o| o.shortcut == Some(shortcut))
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.option(name).is_some()
    }

    pub fn option(&self, name: &str) -> Option<&InputOption> {
        self.options.iter().find(|o| o.name == name)
    }
}
