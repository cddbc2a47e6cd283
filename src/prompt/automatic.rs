//! Prompt provider that answers from a script instead of the terminal.
//!
//! Responses are queued per prompt text and consumed in order, so a loop that
//! asks the same question several times can be driven to completion. When a
//! queue is empty the prompt's own default is used.

use super::interface::*;
use crate::error::Result;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

#[derive(Debug)]
pub struct AutomaticPrompter {
    text_responses: RefCell<HashMap<String, VecDeque<String>>>,
    choice_responses: RefCell<HashMap<String, VecDeque<usize>>>,
    confirmation_responses: RefCell<HashMap<String, VecDeque<bool>>>,
    default_text: String,
    default_choice: usize,
}

impl AutomaticPrompter {
    pub fn new() -> Self {
        Self {
            text_responses: RefCell::default(),
            choice_responses: RefCell::default(),
            confirmation_responses: RefCell::default(),
            default_text: "auto".to_string(),
            default_choice: 0,
        }
    }

    /// Queue a text response for a specific prompt
    pub fn with_text_response(self, prompt: &str, response: &str) -> Self {
        enqueue(&self.text_responses, prompt, response.to_string());
        self
    }

    /// Queue a choice response for a specific prompt
    pub fn with_choice_response(self, prompt: &str, choice_index: usize) -> Self {
        enqueue(&self.choice_responses, prompt, choice_index);
        self
    }

    /// Queue a confirmation response for a specific prompt
    pub fn with_confirmation_response(self, prompt: &str, response: bool) -> Self {
        enqueue(&self.confirmation_responses, prompt, response);
        self
    }

    /// Set default values for when no specific response is queued
    pub fn with_defaults(mut self, default_text: &str, default_choice: usize) -> Self {
        self.default_text = default_text.to_string();
        self.default_choice = default_choice;
        self
    }
}

impl Default for AutomaticPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn enqueue<T>(queues: &RefCell<HashMap<String, VecDeque<T>>>, prompt: &str, value: T) {
    queues.borrow_mut().entry(prompt.to_string()).or_default().push_back(value);
}

fn dequeue<T>(queues: &RefCell<HashMap<String, VecDeque<T>>>, prompt: &str) -> Option<T> {
    queues.borrow_mut().get_mut(prompt).and_then(VecDeque::pop_front)
}

impl TextPrompter for AutomaticPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let response = dequeue(&self.text_responses, &config.prompt)
            .or_else(|| config.default.clone())
            .unwrap_or_else(|| self.default_text.clone());

        log::debug!("Auto-answering text prompt '{}' with: '{}'", config.prompt, response);
        Ok(response)
    }
}

impl SingleChoicePrompter for AutomaticPrompter {
    fn prompt_single_choice(&self, config: &SingleChoiceConfig) -> Result<usize> {
        let response = dequeue(&self.choice_responses, &config.prompt)
            .or(config.default_index)
            .unwrap_or(self.default_choice);

        log::debug!(
            "Auto-answering choice prompt '{}' with option {}: '{}'",
            config.prompt,
            response,
            config.choices.get(response).map(String::as_str).unwrap_or("<invalid>")
        );
        Ok(response)
    }
}

impl ConfirmationPrompter for AutomaticPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let response =
            dequeue(&self.confirmation_responses, &config.prompt).unwrap_or(config.default);

        log::debug!("Auto-answering confirmation '{}' with: {}", config.prompt, response);
        Ok(response)
    }
}
