//! Classify command-line tokens into options and positional arguments.
//!
//! Given the tokens a process received (without the program name) and an
//! [`InputDefinition`](argv_input_core::InputDefinition) describing what is
//! legal, [`parse`] produces a [`ParseResult`] with four maps: scalar
//! options, array options, scalar arguments and array arguments.
//!
//! The rules, in priority order for each token while options are enabled:
//!
//! 1. `--` disables option parsing for the rest of the input.
//! 2. The empty string is a positional argument.
//! 3. `--name` / `--name=value` is a long option.
//! 4. `-x`, `-xvalue` and clusters like `-abc` are short options.
//! 5. Anything else fills the next positional argument slot.
//!
//! Parsing is fail-fast: the first violated rule returns an [`InputError`]
//! and no result.
//!
//! The probes [`first_argument`], [`has_parameter_option`] and
//! [`parameter_option`] work on raw tokens without a definition.
//!
//! # Example
//!
//! ```
//! use argv_input::parse;
//! use argv_input_core::*;
//!
//! let definition = InputDefinition::new()
//!     .with_argument(InputArgument::required("command"))
//!     .with_argument(InputArgument::optional("paths").allow_multiple())
//!     .with_option(InputOption::flag("verbose").with_shortcut('v'))
//!     .with_option(
//!         InputOption::with_value("tag", ValueMode::Required)
//!             .with_shortcut('t')
//!             .allow_multiple(),
//!     );
//!
//! let result = parse(&definition, ["add", "-vtfirst", "src", "--tag=second", "docs"]).unwrap();
//! assert_eq!(result.argument("command"), Some("add"));
//! assert_eq!(result.argument_array("paths").unwrap(), ["src", "docs"]);
//! assert_eq!(result.option_array("tag").unwrap(), ["first", "second"]);
//! assert!(result.has_option("verbose"));
//! ```

mod error;
mod input;
mod parser;
mod probe;
mod result;
mod stream;

pub use error::{InputError, Result};
pub use input::ArgvInput;
pub use parser::{Parser, parse};
pub use probe::{first_argument, has_parameter_option, parameter_option};
pub use result::ParseResult;
pub use stream::TokenStream;
