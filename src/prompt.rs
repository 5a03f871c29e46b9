//! Interactive questions.
//!
//! Orchestration code asks through the [`Prompter`] trait so tests can script
//! the answers; [`TerminalPrompter`] renders them with `dialoguer`.
use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

/// Source of answers to interactive questions.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask for free text. An empty answer is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn input(&self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question with a default answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Ask for a secret without echoing it. An empty answer is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn password(&self, prompt: &str) -> Result<String>;
}

/// [`Prompter`] that talks to the user's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }

    fn password(&self, prompt: &str) -> Result<String> {
        Ok(Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?)
    }
}
