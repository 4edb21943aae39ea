//! Error types for token classification.
//!
//! Every variant is fatal to the parse that produced it: no partial result is
//! returned alongside an error.

use thiserror::Error;

/// Errors that can occur while classifying tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A long option that the definition does not declare.
    #[error("the '--{0}' option does not exist")]
    UnknownOption(String),

    /// A shortcut character that no option declares.
    #[error("the '-{0}' option does not exist")]
    UnknownShortcut(char),

    /// A value was attached to an option that takes none.
    #[error("the '--{0}' option does not accept a value")]
    OptionTakesNoValue(String),

    /// An option requiring a value received none.
    #[error("the '--{0}' option requires a value")]
    MissingRequiredValue(String),

    /// A positional token arrived after every argument slot was filled.
    #[error("too many arguments, unexpected \"{0}\"")]
    TooManyArguments(String),

    /// Declared-required arguments that received no value.
    #[error("not enough arguments (missing: \"{}\")", .0.join("\", \""))]
    NotEnoughArguments(Vec<String>),

    /// No token in the input looks like an argument.
    #[error("first argument not found")]
    FirstArgumentNotFound,

    /// A token was popped from an exhausted stream.
    #[error("no tokens left in the input stream")]
    EmptyStream,
}

/// Convenience alias for results with [`InputError`].
pub type Result<T> = std::result::Result<T, InputError>;
