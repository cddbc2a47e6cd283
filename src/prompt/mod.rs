//! Interactive dialog utilities for user input
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic`: Scripted implementation for tests and unattended runs

use crate::error::{Error, Result};

pub mod automatic;
pub mod dialoguer;
pub mod interface;

pub use automatic::AutomaticPrompter;
pub use dialoguer::DialoguerPrompter;
pub use interface::*;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}

/// Asks for free text, pre-filled with `default` when given.
pub fn ask_text<P: PromptProvider + ?Sized>(
    provider: &P,
    prompt: &str,
    default: Option<&str>,
) -> Result<String> {
    let mut config = TextPromptConfig::new(prompt);
    if let Some(default) = default {
        config = config.with_default(default);
    }
    provider.prompt_text(&config)
}

pub fn confirm<P: PromptProvider + ?Sized>(provider: &P, prompt: &str, default: bool) -> Result<bool> {
    provider.prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })
}

/// Lets the user pick one of `items`, each shown through `label`.
///
/// Fails with [`Error::NothingToSelect`] when `items` is empty.
pub fn select<'a, P, T, F>(provider: &P, prompt: &str, items: &'a [T], label: F) -> Result<&'a T>
where
    P: PromptProvider + ?Sized,
    F: Fn(&T) -> String,
{
    if items.is_empty() {
        return Err(Error::NothingToSelect { what: prompt.to_string() });
    }

    let config = SingleChoiceConfig {
        prompt: prompt.to_string(),
        choices: items.iter().map(label).collect(),
        default_index: Some(0),
    };
    let index = provider.prompt_single_choice(&config)?;
    items.get(index).ok_or_else(|| Error::NothingToSelect { what: prompt.to_string() })
}

/// Turns an identifier into a menu label: `_` and `-` become spaces and each
/// word is capitalised (`poetry_pkg` -> `Poetry Pkg`).
pub fn display_name(identifier: &str) -> String {
    identifier
        .split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
