//! Interactive terminal input.

use crate::error::{KeyringError, Result};
use dialoguer::Password;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use zeroize::Zeroizing;

/// Source of the answers the credential flows ask for.
pub trait Prompter {
    /// Read a secret without echoing it.
    fn password(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Read one line of visible input, without its line ending.
    fn line(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn password(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map(Zeroizing::new)
            .map_err(KeyringError::Prompt)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(KeyringError::InputClosed);
        }
        Ok(strip_line_ending(input))
    }
}

/// Replays a fixed sequence of answers; runs out with [`KeyringError::InputClosed`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    fn next(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(KeyringError::InputClosed)
    }
}

impl Prompter for ScriptedPrompter {
    fn password(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        self.next(prompt).map(Zeroizing::new)
    }

    fn line(&mut self, prompt: &str) -> Result<String> {
        self.next(prompt)
    }
}

fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
