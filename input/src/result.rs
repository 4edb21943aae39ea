//! Accumulated output of a parse.

use std::collections::BTreeMap;

use argv_input_core::InputDefinition;
use serde::Serialize;

use crate::error::{InputError, Result};

/// Values collected by a successful parse.
///
/// A name lives in at most one of the scalar/array maps for options and for
/// arguments, matching how the definition declares it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    options: BTreeMap<String, String>,
    option_arrays: BTreeMap<String, Vec<String>>,
    arguments: BTreeMap<String, String>,
    argument_arrays: BTreeMap<String, Vec<String>>,
}

impl ParseResult {
    /// Value of a scalar option. Flags are stored with an empty value.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// Values of an array option in arrival order.
    pub fn option_array(&self, name: &str) -> Option<&[String]> {
        self.option_arrays.get(name).map(Vec::as_slice)
    }

    /// Whether the option occurred at all.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name) || self.option_arrays.contains_key(name)
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    pub fn argument_array(&self, name: &str) -> Option<&[String]> {
        self.argument_arrays.get(name).map(Vec::as_slice)
    }

    pub fn has_argument(&self, name: &str) -> bool {
        self.arguments.contains_key(name) || self.argument_arrays.contains_key(name)
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn option_arrays(&self) -> &BTreeMap<String, Vec<String>> {
        &self.option_arrays
    }

    pub fn arguments(&self) -> &BTreeMap<String, String> {
        &self.arguments
    }

    pub fn argument_arrays(&self) -> &BTreeMap<String, Vec<String>> {
        &self.argument_arrays
    }

    /// Checks that every argument declared `required` received a value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::NotEnoughArguments`] listing the missing names
    /// in declaration order.
    pub fn validate(&self, definition: &InputDefinition) -> Result<()> {
        let missing: Vec<String> = definition
            .arguments
            .iter()
            .filter(|argument| argument.required && !self.has_argument(&argument.name))
            .map(|argument| argument.name.clone())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InputError::NotEnoughArguments(missing))
        }
    }

    pub(crate) fn set_option(&mut self, name: &str, value: String) {
        self.options.insert(name.to_string(), value);
    }

    pub(crate) fn push_option(&mut self, name: &str, value: String) {
        self.option_arrays
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    pub(crate) fn set_argument(&mut self, name: &str, value: String) {
        self.arguments.insert(name.to_string(), value);
    }

    pub(crate) fn push_argument(&mut self, name: &str, value: String) {
        self.argument_arrays
            .entry(name.to_string())
            .or_default()
            .push(value);
    }
}
