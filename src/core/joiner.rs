use crate::utils::error::{JoinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Textual assembly options: what goes between, before, and after the elements.
///
/// Defaults reproduce the common list rendering, e.g. `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub separator: String,
    pub prefix: String,
    pub postfix: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            prefix: "[".to_string(),
            postfix: "]".to_string(),
        }
    }
}

impl FormatOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = postfix.into();
        self
    }
}

/// Joins a finite sequence into `prefix + e0 + separator + e1 + ... + postfix`.
///
/// An empty sequence yields exactly `prefix + postfix`. The input is read in
/// sequence order and never mutated. The only failure mode is an element whose
/// `Display` implementation errors, reported as `JoinError::ElementConversion`
/// with the offending position.
pub fn join<I>(sequence: I, options: &FormatOptions) -> Result<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut result = String::new();
    result.push_str(&options.prefix);

    for (index, element) in sequence.into_iter().enumerate() {
        if index > 0 {
            result.push_str(&options.separator);
        }
        write!(result, "{}", element).map_err(|_| JoinError::ElementConversion { index })?;
    }

    result.push_str(&options.postfix);
    Ok(result)
}

/// Joins elements rendered by a caller-supplied fallible conversion.
///
/// The renderer's error propagates unchanged; nothing past the first failing
/// element is rendered.
pub fn join_with<I, F, E>(
    sequence: I,
    options: &FormatOptions,
    mut render: F,
) -> std::result::Result<String, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<String, E>,
{
    let mut result = String::new();
    result.push_str(&options.prefix);

    for (index, element) in sequence.into_iter().enumerate() {
        if index > 0 {
            result.push_str(&options.separator);
        }
        result.push_str(&render(element)?);
    }

    result.push_str(&options.postfix);
    Ok(result)
}
