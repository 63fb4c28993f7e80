//! Interactive prompts using dialoguer

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::error::Result;

/// Collaborator that asks the user a question and waits for the answer.
///
/// The flow only talks to this trait, so tests can drive it with a script.
pub trait Prompter {
    /// Ask the user to pick one of `choices`; returns the chosen index.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;

    /// Ask for free text. `default` is used when the user just presses enter.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Prompter backed by the terminal.
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(choices)
            .default(0)
            .interact()?;
        Ok(index)
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}
