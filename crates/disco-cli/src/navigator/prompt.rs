use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("no answer available for prompt '{0}'")]
    NoAnswer(String),
}

/// Source of operator answers for the navigator.
pub trait Prompter {
    /// Ask the operator to pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Ask a yes/no question. Defaults to "no".
    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError>;
}

/// Terminal prompts backed by `dialoguer`.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<usize, PromptError> {
        if items.is_empty() {
            return Err(PromptError::NoAnswer(prompt.to_string()));
        }
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}
