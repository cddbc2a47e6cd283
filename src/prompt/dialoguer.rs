//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, SingleChoiceConfig, SingleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, FuzzySelect, Input};

/// Terminal prompter used by the CLI.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);
        if let Some(default) = &config.default {
            input = input.default(default.clone());
        }
        Ok(input.interact_text()?)
    }
}

impl SingleChoicePrompter for DialoguerPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let mut select = FuzzySelect::new().with_prompt(&config.prompt).items(&config.choices);

        if let Some(default_index) = config.default_index {
            select = select.default(default_index);
        }

        Ok(select.interact()?)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        Ok(Confirm::new().with_prompt(&config.prompt).default(config.default).interact()?)
    }
}
