//! String-case conversion for user-typed names.
//!
//! Every identifier and file name in a generated plan goes through
//! [`Case::apply`], so type names never drift from the file names derived
//! from the same input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a raw name normalizes to an empty word sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` does not contain any letters or digits")]
pub struct InvalidName(pub String);

/// The supported string-case conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `hello-world`
    Kebab,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `Hello world`
    Sentence,
    /// `hello_world`
    Snake,
    /// `Hello World`
    Title,
}

impl Case {
    /// Every convention, in prompt/display order.
    pub const ALL: [Case; 6] = [
        Case::Kebab,
        Case::Camel,
        Case::Pascal,
        Case::Sentence,
        Case::Snake,
        Case::Title,
    ];

    /// The conventional label, e.g. `kebab-case`.
    pub fn label(self) -> &'static str {
        match self {
            Case::Kebab => "kebab-case",
            Case::Camel => "camelCase",
            Case::Pascal => "PascalCase",
            Case::Sentence => "Sentence case",
            Case::Snake => "snake_case",
            Case::Title => "Title Case",
        }
    }

    /// Transform `raw` into this convention.
    ///
    /// Returns an empty string when `raw` holds no usable characters; that
    /// sentinel is the caller's signal to reject the name (see [`convert`]).
    pub fn apply(self, raw: &str) -> String {
        let words = words(raw);
        if words.is_empty() {
            return String::new();
        }

        match self {
            Case::Kebab => words
                .iter()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("-"),
            Case::Camel => words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        word.to_lowercase()
                    } else {
                        capitalize(word)
                    }
                })
                .collect(),
            Case::Pascal => words.iter().map(|word| capitalize(word)).collect(),
            Case::Sentence => words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    if i == 0 {
                        capitalize(word)
                    } else {
                        word.to_lowercase()
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
            Case::Snake => words
                .iter()
                .map(|word| word.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            Case::Title => words
                .iter()
                .map(|word| capitalize(word))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Convert `raw` into `case`, rejecting names that normalize to nothing.
pub fn convert(raw: &str, case: Case) -> Result<String, InvalidName> {
    let converted = case.apply(raw);
    if converted.is_empty() {
        Err(InvalidName(raw.to_string()))
    } else {
        Ok(converted)
    }
}

/// Capitalize a word: first character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}

/// Split a raw name into words.
///
/// Only ASCII letters, digits, whitespace, and hyphens survive; everything
/// else (including underscores) is stripped before splitting on whitespace.
/// Hyphens therefore stay embedded in their word, and `a_b` fuses to `ab`.
fn words(raw: &str) -> Vec<String> {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
