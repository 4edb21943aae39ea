use std::path::{Path, PathBuf};

use argv_input::{ArgvInput, ParseResult};
use argv_input_core::InputDefinition;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Output encoding for parse results.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "argv-classify")]
#[command(version, about = "Classify command-line tokens against an option definition")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify tokens against a definition file and print the result.
    Parse(ParseArgs),
    /// Print the first token that does not look like an option.
    FirstArgument(FirstArgumentArgs),
    /// Look for an option spelling in raw tokens without a definition.
    Probe(ProbeArgs),
    /// Validate one or more definition files.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Definition file (YAML, or JSON when the extension is `.json`).
    #[arg(long)]
    definition: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Also fail when a required argument received no value.
    #[arg(long)]
    check: bool,
    /// Tokens to classify, given after `--`.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct FirstArgumentArgs {
    /// Tokens to scan, given after `--`.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ProbeArgs {
    /// Option spelling to look for, e.g. `--option=--help` (repeatable).
    #[arg(long = "option", required = true, allow_hyphen_values = true)]
    options: Vec<String>,
    /// Only consider option-like tokens before the `--` sentinel.
    #[arg(long)]
    only_params: bool,
    /// Print the option's value instead of whether it is present.
    #[arg(long)]
    value: bool,
    /// Value printed by `--value` when the option is absent.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    default: String,
    /// Tokens to scan, given after `--`.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Definition files to check.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::FirstArgument(args) => run_first_argument(args),
        Command::Probe(args) => run_probe(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let definition = load_definition(&args.definition)?;
    let input = ArgvInput::new(args.tokens);

    let result = input.parse(&definition).map_err(|e| e.to_string())?;
    if args.check {
        result.validate(&definition).map_err(|e| e.to_string())?;
    }

    print!("{}", format_result(&result, args.format)?);
    Ok(())
}

fn run_first_argument(args: FirstArgumentArgs) -> Result<(), String> {
    let input = ArgvInput::new(args.tokens);
    let first = input.first_argument().map_err(|e| e.to_string())?;
    println!("{first}");
    Ok(())
}

fn run_probe(args: ProbeArgs) -> Result<(), String> {
    let input = ArgvInput::new(args.tokens);

    if args.value {
        let value = input.parameter_option(&args.options, &args.default, args.only_params);
        println!("{value}");
    } else {
        let present = input.has_parameter_option(&args.options, args.only_params);
        println!("{present}");
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    for path in &args.inputs {
        load_definition(path)?;
    }
    println!("Validated {} definition file(s).", args.inputs.len());
    Ok(())
}

fn load_definition(path: &Path) -> Result<InputDefinition, String> {
    debug!(path = %path.display(), "Loading definition");
    InputDefinition::load(path).map_err(|err| format!("'{}': {err}", path.display()))
}

fn format_result(result: &ParseResult, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(result)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(result).map_err(|e| format!("YAML serialization failed: {e}"))
        }
    }
}
