//! Interactive input.
//!
//! The initializer asks its questions through [`Prompter`]; the binary uses
//! [`StdinPrompter`] while tests feed a [`ScriptedPrompter`].

use crate::error::{Result, ScaffoldError};
use std::collections::VecDeque;
use std::io::{stdin, stdout, BufRead, Write};

pub trait Prompter {
    /// Show `question` and return the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from standard input.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        let mut out = stdout();
        write!(out, "{question} ")
            .and_then(|_| out.flush())
            .map_err(|e| ScaffoldError::Prompt(format!("failed to write prompt: {e}")))?;

        let mut input = String::new();
        let read = stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| ScaffoldError::Prompt(format!("failed to read answer: {e}")))?;

        if read == 0 {
            // EOF
            writeln!(out).ok();
            return Err(ScaffoldError::Prompt(format!(
                "no input received for: {question}"
            )));
        }

        Ok(input.trim().to_string())
    }
}

/// Replays canned answers in order and records every question asked.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.asked.push(question.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| ScaffoldError::Prompt(format!("no input received for: {question}")))
    }
}

/// Ask a yes/no question. Only `y`/`yes` (any case) count as yes.
pub fn ask_yes_no(prompter: &mut dyn Prompter, question: &str) -> Result<bool> {
    let answer = prompter.ask(&format!("{question} [y/N]:"))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
