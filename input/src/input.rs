use argv_input_core::InputDefinition;

use crate::error::Result;
use crate::parser::parse;
use crate::probe;
use crate::result::ParseResult;

/// The tokens of one process invocation.
///
/// Wraps the raw tokens so they can be probed before a definition is known
/// and parsed once it is.
///
/// # Examples
///
/// ```
/// use argv_input::ArgvInput;
/// use argv_input_core::{InputArgument, InputDefinition, InputOption};
///
/// let input = ArgvInput::from_args(["tool", "--help", "build"]);
/// assert!(input.has_parameter_option(&["--help", "-h"], true));
/// assert_eq!(input.first_argument().unwrap(), "build");
///
/// let definition = InputDefinition::new()
///     .with_argument(InputArgument::required("command"))
///     .with_option(InputOption::flag("help").with_shortcut('h'));
/// let result = input.parse(&definition).unwrap();
/// assert_eq!(result.argument("command"), Some("build"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgvInput {
    tokens: Vec<String>,
}

impl ArgvInput {
    /// Uses `tokens` as given; they must not include the program name.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Drops the first item (the program name) and keeps the rest.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(args.into_iter().skip(1))
    }

    /// Reads the current process's arguments.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Classifies the tokens against `definition`.
    pub fn parse(&self, definition: &InputDefinition) -> Result<ParseResult> {
        parse(definition, self.tokens.iter().cloned())
    }

    /// See [`first_argument`](crate::first_argument).
    pub fn first_argument(&self) -> Result<&str> {
        probe::first_argument(&self.tokens)
    }

    /// See [`has_parameter_option`](crate::has_parameter_option).
    pub fn has_parameter_option<V: AsRef<str>>(&self, values: &[V], only_params: bool) -> bool {
        probe::has_parameter_option(&self.tokens, values, only_params)
    }

    /// See [`parameter_option`](crate::parameter_option).
    pub fn parameter_option<V: AsRef<str>>(
        &self,
        values: &[V],
        default: &str,
        only_params: bool,
    ) -> String {
        probe::parameter_option(&self.tokens, values, default, only_params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_args_drops_program_name() {
        let input = ArgvInput::from_args(["prog", "a", "b"]);
        assert_eq!(input.tokens(), ["a", "b"]);
    }

    #[test]
    fn test_from_args_with_only_program_name() {
        let input = ArgvInput::from_args(["prog"]);
        assert!(input.tokens().is_empty());
        assert!(input.first_argument().is_err());
    }

    #[test]
    fn test_parameter_option_through_input() {
        let input = ArgvInput::new(["--env", "prod", "run"]);
        assert_eq!(input.parameter_option(&["--env"], "dev", true), "prod");
    }
}
