//! Interactive prompts.
//!
//! A cancelled prompt is the silent abort path: callers receive `None`,
//! print "Aborted." and return cleanly before any write is attempted.

use std::io::ErrorKind;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use eyre::Result;
use sprig_core::Case;

/// Ask for the component name. Returns `None` when cancelled.
pub(crate) fn name(prompt: &str) -> Result<Option<String>> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("please enter a name")
            } else {
                Ok(())
            }
        })
        .interact_text();

    match input {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(dialoguer::Error::IO(ref e)) if e.kind() == ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Ask for the naming convention. Returns `None` when cancelled.
pub(crate) fn convention() -> Result<Option<Case>> {
    let labels: Vec<&str> = Case::ALL.iter().map(|case| case.label()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select a naming convention for your files")
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| Case::ALL[index]))
}

/// A feature-flag choice offered in the multi-select prompt.
pub(crate) struct FlagChoice {
    pub label: &'static str,
    pub description: &'static str,
    pub picked: bool,
}

impl FlagChoice {
    pub fn new(label: &'static str, description: &'static str, picked: bool) -> Self {
        Self {
            label,
            description,
            picked,
        }
    }
}

/// Ask which optional features to include. Returns `None` when cancelled,
/// otherwise one bool per choice, in order.
pub(crate) fn preferences(choices: &[FlagChoice]) -> Result<Option<Vec<bool>>> {
    let items: Vec<String> = choices
        .iter()
        .map(|choice| format!("{} ({})", choice.label, choice.description))
        .collect();
    let defaults: Vec<bool> = choices.iter().map(|choice| choice.picked).collect();

    let selection = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select options for your component")
        .items(&items)
        .defaults(&defaults)
        .interact_opt()?;

    Ok(selection.map(|picked| {
        (0..choices.len())
            .map(|index| picked.contains(&index))
            .collect()
    }))
}
