//! Definition validation.
//!
//! Checks the structural invariants the parser relies on: unique option
//! names and shortcuts, no repeating flags, and at most one array argument
//! placed last.
//!
//! # Examples
//!
//! ```
//! use argv_input_core::*;
//!
//! let definition = InputDefinition::new()
//!     .with_option(InputOption::flag("verbose").with_shortcut('v'));
//! assert!(validate_definition(&definition).is_empty());
//!
//! // Invalid: a flag cannot accumulate values
//! let bad = InputDefinition::new()
//!     .with_option(InputOption::flag("verbose").allow_multiple());
//! assert!(!validate_definition(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{InputArgument, InputDefinition, InputOption};

/// Definition validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Option name is empty or whitespace-only.
    #[error("option name cannot be empty")]
    EmptyOptionName,
    /// Argument name is empty or whitespace-only.
    #[error("argument name cannot be empty")]
    EmptyArgumentName,
    /// Option name carries leading dashes or an `=`.
    #[error("invalid option name: {0}")]
    InvalidOptionName(String),
    /// Shortcut cannot be spelled as `-<ch>`.
    #[error("invalid shortcut: {0:?}")]
    InvalidShortcut(char),
    /// Two options share a name.
    #[error("duplicate option: {0}")]
    DuplicateOption(String),
    /// Two options share a shortcut.
    #[error("duplicate shortcut: {0}")]
    DuplicateShortcut(char),
    /// Two arguments share a name.
    #[error("duplicate argument: {0}")]
    DuplicateArgument(String),
    /// An option without a value was marked as an array.
    #[error("option '{0}' takes no value and cannot be an array")]
    ArrayFlag(String),
    /// An array argument is followed by further arguments.
    #[error("array argument '{0}' must be the last argument")]
    ArrayArgumentNotLast(String),
    /// A required argument follows an optional one.
    #[error("required argument '{0}' cannot follow an optional argument")]
    RequiredAfterOptional(String),
}

/// Validates a definition.
///
/// Returns at most one error: validation stops at the first problem found.
///
/// # Examples
///
/// ```
/// use argv_input_core::*;
///
/// let definition = InputDefinition::new()
///     .with_argument(InputArgument::optional("paths").allow_multiple())
///     .with_argument(InputArgument::optional("extra"));
///
/// let errors = validate_definition(&definition);
/// assert_eq!(errors, vec![DefinitionError::ArrayArgumentNotLast("paths".into())]);
/// ```
pub fn validate_definition(definition: &InputDefinition) -> Vec<DefinitionError> {
    let mut errors = validate_options(&definition.options);
    if !errors.is_empty() {
        return errors;
    }

    errors.extend(validate_arguments(&definition.arguments));
    errors
}

fn validate_options(options: &[InputOption]) -> Vec<DefinitionError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut shortcuts = HashSet::new();

    for option in options {
        let name = option.name.as_str();
        if name.trim().is_empty() {
            errors.push(DefinitionError::EmptyOptionName);
            return errors;
        }
        if name.starts_with('-') || name.contains('=') {
            errors.push(DefinitionError::InvalidOptionName(name.to_string()));
            return errors;
        }
        if !names.insert(name) {
            errors.push(DefinitionError::DuplicateOption(name.to_string()));
            return errors;
        }

        if let Some(shortcut) = option.shortcut {
            if shortcut == '-' || shortcut == '=' || shortcut.is_whitespace() {
                errors.push(DefinitionError::InvalidShortcut(shortcut));
                return errors;
            }
            if !shortcuts.insert(shortcut) {
                errors.push(DefinitionError::DuplicateShortcut(shortcut));
                return errors;
            }
        }

        if option.is_array && !option.accepts_value() {
            errors.push(DefinitionError::ArrayFlag(name.to_string()));
            return errors;
        }
    }

    errors
}

fn validate_arguments(arguments: &[InputArgument]) -> Vec<DefinitionError> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    let mut seen_optional = false;

    for (index, argument) in arguments.iter().enumerate() {
        let name = argument.name.as_str();
        if name.trim().is_empty() {
            errors.push(DefinitionError::EmptyArgumentName);
            return errors;
        }
        if !names.insert(name) {
            errors.push(DefinitionError::DuplicateArgument(name.to_string()));
            return errors;
        }
        if argument.is_array && index + 1 != arguments.len() {
            errors.push(DefinitionError::ArrayArgumentNotLast(name.to_string()));
            return errors;
        }
        if argument.required && seen_optional {
            errors.push(DefinitionError::RequiredAfterOptional(name.to_string()));
            return errors;
        }
        seen_optional |= !argument.required;
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::ValueMode;

    use super::*;

    #[test]
    fn test_validate_rejects_duplicate_shortcut() {
        let definition = InputDefinition::new()
            .with_option(InputOption::flag("verbose").with_shortcut('v'))
            .with_option(InputOption::flag("version").with_shortcut('v'));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::DuplicateShortcut('v')]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_option() {
        let definition = InputDefinition::new()
            .with_option(InputOption::flag("force"))
            .with_option(InputOption::with_value("force", ValueMode::Optional));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::DuplicateOption("force".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_dashed_option_name() {
        let definition = InputDefinition::new().with_option(InputOption::flag("--force"));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::InvalidOptionName("--force".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_array_flag() {
        let definition =
            InputDefinition::new().with_option(InputOption::flag("debug").allow_multiple());

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::ArrayFlag("debug".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_required_after_optional() {
        let definition = InputDefinition::new()
            .with_argument(InputArgument::optional("source"))
            .with_argument(InputArgument::required("dest"));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::RequiredAfterOptional("dest".to_string())]
        );
    }

    #[test]
    fn test_validate_accepts_trailing_array_argument() {
        let definition = InputDefinition::new()
            .with_argument(InputArgument::required("command"))
            .with_argument(InputArgument::optional("paths").allow_multiple())
            .with_option(
                InputOption::with_value("tag", ValueMode::Required)
                    .with_shortcut('t')
                    .allow_multiple(),
            );

        assert!(validate_definition(&definition).is_empty());
    }

    #[test]
    fn test_validate_rejects_invalid_shortcut() {
        let definition =
            InputDefinition::new().with_option(InputOption::flag("space").with_shortcut(' '));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::InvalidShortcut(' ')]
        );
    }

    #[test]
    fn test_validate_rejects_empty_option_name() {
        let definition = InputDefinition::new().with_option(InputOption::flag("  "));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::EmptyOptionName]
        );
    }

    #[test]
    fn test_validate_rejects_empty_argument_name() {
        let definition = InputDefinition::new().with_argument(InputArgument::optional(""));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::EmptyArgumentName]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_argument() {
        let definition = InputDefinition::new()
            .with_argument(InputArgument::required("a"))
            .with_argument(InputArgument::optional("a"));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::DuplicateArgument("a".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_array_argument_not_last() {
        let definition = InputDefinition::new()
            .with_argument(InputArgument::optional("paths").allow_multiple())
            .with_argument(InputArgument::optional("extra"));

        assert_eq!(
            validate_definition(&definition),
            vec![DefinitionError::ArrayArgumentNotLast("paths".to_string())]
        );
    }
}
