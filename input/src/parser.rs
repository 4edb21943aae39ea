//! Token classification state machine.
//!
//! The parser pops one token at a time and decides, in priority order,
//! whether it is the `--` sentinel, a long option, a short option (or a
//! cluster of them) or a positional argument. Option values are taken from
//! the same token when attached (`--name=value`, `-fvalue`) or from exactly
//! one token of look-ahead (`--name value`).

use argv_input_core::InputDefinition;
use tracing::{debug, trace};

use crate::error::{InputError, Result};
use crate::result::ParseResult;
use crate::stream::TokenStream;

/// Parses `tokens` against `definition`.
///
/// The tokens must not include the program name.
///
/// # Errors
///
/// Fails on the first token that breaks a rule; see [`InputError`].
///
/// # Examples
///
/// ```
/// use argv_input::parse;
/// use argv_input_core::*;
///
/// let definition = InputDefinition::new()
///     .with_argument(InputArgument::required("command"))
///     .with_option(InputOption::flag("verbose").with_shortcut('v'))
///     .with_option(InputOption::with_value("env", ValueMode::Required).with_shortcut('e'));
///
/// let result = parse(&definition, ["-v", "--env", "prod", "deploy"]).unwrap();
/// assert_eq!(result.option("verbose"), Some(""));
/// assert_eq!(result.option("env"), Some("prod"));
/// assert_eq!(result.argument("command"), Some("deploy"));
/// ```
pub fn parse<I, S>(definition: &InputDefinition, tokens: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new(definition, tokens).parse()
}

/// Single-use parser over one token stream.
#[derive(Debug)]
pub struct Parser<'d> {
    definition: &'d InputDefinition,
    stream: TokenStream,
    result: ParseResult,
    options_enabled: bool,
    argument_cursor: usize,
}

impl<'d> Parser<'d> {
    pub fn new<I, S>(definition: &'d InputDefinition, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            definition,
            stream: TokenStream::new(tokens),
            result: ParseResult::default(),
            options_enabled: true,
            argument_cursor: 0,
        }
    }

    /// Consumes the whole stream and returns the collected values.
    pub fn parse(mut self) -> Result<ParseResult> {
        debug!(tokens = self.stream.len(), "Parsing input tokens");

        while self.stream.has_next() {
            let token = self.stream.pop_front()?;
            self.classify(token)?;
        }

        debug!(
            options = self.result.options().len() + self.result.option_arrays().len(),
            arguments = self.result.arguments().len() + self.result.argument_arrays().len(),
            "Parsed input tokens"
        );
        Ok(self.result)
    }

    fn classify(&mut self, token: String) -> Result<()> {
        if !self.options_enabled {
            return self.parse_argument(token);
        }

        if token == "--" {
            trace!("End of options");
            self.options_enabled = false;
            return Ok(());
        }
        if token.is_empty() {
            return self.parse_argument(token);
        }
        if let Some(body) = token.strip_prefix("--") {
            return self.parse_long_option(body);
        }
        if token != "-" {
            if let Some(cluster) = token.strip_prefix('-') {
                return self.parse_short_option(cluster);
            }
        }

        self.parse_argument(token)
    }

    fn parse_long_option(&mut self, body: &str) -> Result<()> {
        trace!(token = %body, "Long option");
        match body.split_once('=') {
            Some((name, value)) => self.add_long_option(name, value),
            None => self.add_long_option(body, ""),
        }
    }

    fn parse_short_option(&mut self, cluster: &str) -> Result<()> {
        trace!(token = %cluster, "Short option");
        let mut chars = cluster.chars();
        match (chars.next(), chars.as_str()) {
            (Some(shortcut), "") => self.add_short_option(shortcut, ""),
            // Everything after a value-taking first shortcut is its value.
            (Some(shortcut), rest) if self.shortcut_accepts_value(shortcut) => {
                self.add_short_option(shortcut, rest)
            }
            _ => self.parse_short_option_set(cluster),
        }
    }

    fn parse_short_option_set(&mut self, cluster: &str) -> Result<()> {
        let definition = self.definition;

        for (index, shortcut) in cluster.char_indices() {
            let option = definition
                .option_for_shortcut(shortcut)
                .ok_or(InputError::UnknownShortcut(shortcut))?;

            if option.accepts_value() {
                let rest = &cluster[index + shortcut.len_utf8()..];
                return self.add_long_option(&option.name, rest);
            }
            self.add_long_option(&option.name, "")?;
        }

        Ok(())
    }

    fn shortcut_accepts_value(&self, shortcut: char) -> bool {
        self.definition
            .option_for_shortcut(shortcut)
            .is_some_and(|option| option.accepts_value())
    }

    fn add_short_option(&mut self, shortcut: char, value: &str) -> Result<()> {
        let definition = self.definition;
        let option = definition
            .option_for_shortcut(shortcut)
            .ok_or(InputError::UnknownShortcut(shortcut))?;
        self.add_long_option(&option.name, value)
    }

    fn add_long_option(&mut self, name: &str, value: &str) -> Result<()> {
        let definition = self.definition;
        let option = definition
            .option(name)
            .ok_or_else(|| InputError::UnknownOption(name.to_string()))?;

        if !value.is_empty() && !option.accepts_value() {
            return Err(InputError::OptionTakesNoValue(name.to_string()));
        }

        let mut value = value.to_string();
        if value.is_empty() && option.accepts_value() && self.stream.has_next() {
            let next = self.stream.pop_front()?;
            if !next.starts_with('-') || option.is_value_required() {
                debug!(option = name, value = %next, "Took value from next token");
                value = next;
            } else {
                debug!(option = name, token = %next, "Next token is an option, not a value");
                self.stream.push_front(next);
            }
        }

        if value.is_empty() && option.is_value_required() {
            return Err(InputError::MissingRequiredValue(name.to_string()));
        }

        if option.is_array {
            self.result.push_option(&option.name, value);
        } else {
            self.result.set_option(&option.name, value);
        }
        Ok(())
    }

    fn parse_argument(&mut self, token: String) -> Result<()> {
        let definition = self.definition;
        match definition.argument_at(self.argument_cursor) {
            Some(argument) if argument.is_array => {
                trace!(argument = %argument.name, token = %token, "Array argument");
                self.result.push_argument(&argument.name, token);
            }
            Some(argument) => {
                trace!(argument = %argument.name, token = %token, "Argument");
                self.result.set_argument(&argument.name, token);
                self.argument_cursor += 1;
            }
            None => return Err(InputError::TooManyArguments(token)),
        }
        Ok(())
    }
}
