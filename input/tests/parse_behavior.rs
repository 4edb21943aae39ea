use argv_input::{ArgvInput, InputError, parse};
use argv_input_core::{InputArgument, InputDefinition, InputOption, ValueMode};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn flags_definition() -> InputDefinition {
    InputDefinition::new()
        .with_option(InputOption::flag("all").with_shortcut('a'))
        .with_option(InputOption::flag("brief").with_shortcut('b'))
        .with_option(InputOption::flag("color").with_shortcut('c'))
        .with_option(InputOption::with_value("file", ValueMode::Required).with_shortcut('f'))
        .with_option(InputOption::with_value("name", ValueMode::Required))
        .with_option(InputOption::with_value("level", ValueMode::Optional).with_shortcut('l'))
        .with_option(InputOption::with_value("tag", ValueMode::Required).allow_multiple())
}

fn positional_definition() -> InputDefinition {
    InputDefinition::new()
        .with_argument(InputArgument::required("first"))
        .with_argument(InputArgument::required("second"))
        .with_argument(InputArgument::optional("rest").allow_multiple())
        .with_option(InputOption::flag("verbose").with_shortcut('v'))
}

// ---------------------------------------------------------------------------
// Positional arguments
// ---------------------------------------------------------------------------

#[test]
fn test_plain_tokens_fill_slots_in_order() {
    let definition = InputDefinition::new()
        .with_argument(InputArgument::required("source"))
        .with_argument(InputArgument::optional("dest"));

    let result = parse(&definition, ["a.txt", "b.txt"]).unwrap();
    assert_eq!(result.argument("source"), Some("a.txt"));
    assert_eq!(result.argument("dest"), Some("b.txt"));
    assert!(result.options().is_empty());
    assert!(result.option_arrays().is_empty());
}

#[test]
fn test_trailing_array_argument_absorbs_the_rest() {
    let result = parse(&positional_definition(), ["t1", "t2", "t3", "t4", "t5"]).unwrap();
    assert_eq!(result.argument("first"), Some("t1"));
    assert_eq!(result.argument("second"), Some("t2"));
    assert_eq!(result.argument_array("rest").unwrap(), ["t3", "t4", "t5"]);
    assert!(result.argument("rest").is_none());
}

#[test]
fn test_overflow_without_array_slot_fails() {
    let definition = InputDefinition::new().with_argument(InputArgument::required("only"));

    let err = parse(&definition, ["one", "two"]).unwrap_err();
    assert_eq!(err, InputError::TooManyArguments("two".to_string()));
}

#[test]
fn test_no_declared_arguments_rejects_any_positional() {
    let err = parse(&flags_definition(), ["-a", "stray"]).unwrap_err();
    assert_eq!(err, InputError::TooManyArguments("stray".to_string()));
}

// ---------------------------------------------------------------------------
// End-of-options sentinel
// ---------------------------------------------------------------------------

#[test]
fn test_sentinel_makes_later_tokens_positional() {
    let result = parse(&positional_definition(), ["-v", "--", "-v", "--verbose", "--"]).unwrap();
    assert_eq!(result.option("verbose"), Some(""));
    assert_eq!(result.argument("first"), Some("-v"));
    assert_eq!(result.argument("second"), Some("--verbose"));
    assert_eq!(result.argument_array("rest").unwrap(), ["--"]);
}

// ---------------------------------------------------------------------------
// Short options and clusters
// ---------------------------------------------------------------------------

#[test]
fn test_cluster_matches_separate_flags() {
    let clustered = parse(&flags_definition(), ["-abc"]).unwrap();
    let separate = parse(&flags_definition(), ["-a", "-b", "-c"]).unwrap();

    assert_eq!(clustered, separate);
    assert_eq!(clustered.option("all"), Some(""));
    assert_eq!(clustered.option("brief"), Some(""));
    assert_eq!(clustered.option("color"), Some(""));
}

#[test]
fn test_attached_short_value_consumes_no_further_tokens() {
    let definition = flags_definition().with_argument(InputArgument::optional("target"));

    let result = parse(&definition, ["-fvalue", "next"]).unwrap();
    assert_eq!(result.option("file"), Some("value"));
    assert_eq!(result.argument("target"), Some("next"));
}

#[test]
fn test_unknown_shortcut_names_the_character() {
    let err = parse(&flags_definition(), ["-z"]).unwrap_err();
    assert_eq!(err, InputError::UnknownShortcut('z'));
    assert_eq!(err.to_string(), "the '-z' option does not exist");
}

// ---------------------------------------------------------------------------
// Long options and values
// ---------------------------------------------------------------------------

#[test]
fn test_inline_and_look_ahead_values_agree() {
    let inline = parse(&flags_definition(), ["--name=value"]).unwrap();
    let separate = parse(&flags_definition(), ["--name", "value"]).unwrap();

    assert_eq!(inline.option("name"), Some("value"));
    assert_eq!(inline, separate);
}

#[test]
fn test_array_option_accumulates_in_order() {
    let result = parse(&flags_definition(), ["--tag=a", "--tag=b", "--tag", "c"]).unwrap();
    assert_eq!(result.option_array("tag").unwrap(), ["a", "b", "c"]);
    assert!(result.option("tag").is_none());
}

#[test]
fn test_scalar_option_keeps_last_value() {
    let result = parse(&flags_definition(), ["--name=first", "--name=second"]).unwrap();
    assert_eq!(result.option("name"), Some("second"));
    assert!(result.option_array("name").is_none());
}

#[test]
fn test_required_value_missing_at_end_of_input() {
    let err = parse(&flags_definition(), ["--name"]).unwrap_err();
    assert_eq!(err, InputError::MissingRequiredValue("name".to_string()));
}

#[test]
fn test_optional_value_left_empty_at_end_of_input() {
    let result = parse(&flags_definition(), ["-l"]).unwrap();
    assert_eq!(result.option("level"), Some(""));
}

#[test]
fn test_optional_value_does_not_swallow_next_option() {
    let result = parse(&flags_definition(), ["--level", "--all"]).unwrap();
    assert_eq!(result.option("level"), Some(""));
    assert_eq!(result.option("all"), Some(""));
}

#[test]
fn test_shortcut_values_are_stored_under_the_long_name() {
    let result = parse(&flags_definition(), ["-f", "out.txt"]).unwrap();
    assert_eq!(result.option("file"), Some("out.txt"));
    assert!(result.option("f").is_none());
}

// ---------------------------------------------------------------------------
// Required arguments and the input facade
// ---------------------------------------------------------------------------

#[test]
fn test_validate_reports_unfilled_required_arguments() {
    let definition = positional_definition();
    let result = parse(&definition, ["only-one"]).unwrap();

    assert_eq!(
        result.validate(&definition),
        Err(InputError::NotEnoughArguments(vec!["second".to_string()]))
    );
}

#[test]
fn test_argv_input_probes_before_parsing() {
    let input = ArgvInput::from_args(["tool", "-v", "--flag=x", "build", "extra"]);

    assert_eq!(input.first_argument().unwrap(), "build");
    assert!(input.has_parameter_option(&["--verbose", "-v"], true));
    assert_eq!(input.parameter_option(&["--flag"], "none", true), "x");

    let definition = positional_definition()
        .with_option(InputOption::with_value("flag", ValueMode::Optional));
    let result = input.parse(&definition).unwrap();
    assert_eq!(result.option("flag"), Some("x"));
    assert_eq!(result.argument("first"), Some("build"));
    assert_eq!(result.argument("second"), Some("extra"));
}

#[test]
fn test_parse_result_serializes_all_four_maps() {
    let result = parse(&positional_definition(), ["-v", "a", "b", "c"]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["options"]["verbose"], "");
    assert_eq!(json["arguments"]["first"], "a");
    assert_eq!(json["argument_arrays"]["rest"][0], "c");
    assert!(json["option_arrays"].as_object().unwrap().is_empty());
}
