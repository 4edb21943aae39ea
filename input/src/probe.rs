//! Raw-token queries that run before (or without) a full parse.
//!
//! These answer bootstrap questions such as "was `--help` given?" or "which
//! command was named?" while no definition is available yet. None of them
//! consult a definition.

use crate::error::{InputError, Result};

/// Returns the first token that does not look like an option.
///
/// Empty tokens count as arguments. Values of options given as separate
/// tokens are not recognized as such, so `-e prod run` yields `prod`.
///
/// # Examples
///
/// ```
/// use argv_input::first_argument;
///
/// let tokens = ["-v", "--flag=x", "build", "extra"];
/// assert_eq!(first_argument(&tokens).unwrap(), "build");
/// assert!(first_argument(&["-v"]).is_err());
/// ```
pub fn first_argument<S: AsRef<str>>(tokens: &[S]) -> Result<&str> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|token| !token.starts_with('-'))
        .ok_or(InputError::FirstArgumentNotFound)
}

/// Whether any token spells one of `values`.
///
/// A token matches a candidate when it is equal to it, or starts with its
/// leading form: `--name=` for long spellings, the spelling itself for short
/// ones (so `-v` also matches `-vvv`). Candidates without a leading dash
/// only match literally. With `only_params`, only option-like tokens before
/// the `--` sentinel are considered.
///
/// # Examples
///
/// ```
/// use argv_input::has_parameter_option;
///
/// let tokens = ["run", "--env=prod", "--", "--help"];
/// assert!(has_parameter_option(&tokens, &["--env", "-e"], true));
/// assert!(!has_parameter_option(&tokens, &["--help"], true));
/// assert!(has_parameter_option(&tokens, &["--help"], false));
/// ```
pub fn has_parameter_option<S, V>(tokens: &[S], values: &[V], only_params: bool) -> bool
where
    S: AsRef<str>,
    V: AsRef<str>,
{
    eligible(tokens, only_params).any(|token| {
        values
            .iter()
            .any(|value| token == value.as_ref() || leading_match(token, value.as_ref()).is_some())
    })
}

/// Value given for one of `values`, or `default`.
///
/// An exact match takes the following token as its value (`default` when
/// none remains); a leading-form match takes the rest of the token
/// (`--env=prod` and `-eprod` both yield `prod`).
///
/// # Examples
///
/// ```
/// use argv_input::parameter_option;
///
/// let tokens = ["deploy", "-e", "staging"];
/// assert_eq!(parameter_option(&tokens, &["--env", "-e"], "dev", true), "staging");
/// assert_eq!(parameter_option(&["--env=prod"], &["--env"], "dev", true), "prod");
/// assert_eq!(parameter_option(&["deploy"], &["--env"], "dev", true), "dev");
/// ```
pub fn parameter_option<S, V>(tokens: &[S], values: &[V], default: &str, only_params: bool) -> String
where
    S: AsRef<str>,
    V: AsRef<str>,
{
    let mut remaining = tokens.iter().map(AsRef::<str>::as_ref);

    while let Some(token) = remaining.next() {
        if only_params && token == "--" {
            break;
        }
        if only_params && !token.starts_with('-') {
            continue;
        }

        for value in values.iter().map(AsRef::<str>::as_ref) {
            if token == value {
                return remaining.next().unwrap_or(default).to_string();
            }
            if let Some(rest) = leading_match(token, value) {
                return rest.to_string();
            }
        }
    }

    default.to_string()
}

fn eligible<S: AsRef<str>>(tokens: &[S], only_params: bool) -> impl Iterator<Item = &str> {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .take_while(move |token| !(only_params && *token == "--"))
        .filter(move |token| !only_params || token.starts_with('-'))
}

fn leading_match<'t>(token: &'t str, value: &str) -> Option<&'t str> {
    // Bare words only ever match literally.
    if !value.starts_with('-') || value == "-" {
        return None;
    }
    if value.starts_with("--") {
        token.strip_prefix(value)?.strip_prefix('=')
    } else {
        token.strip_prefix(value)
    }
}
