//! Prompting capability the handlers ask questions through.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::{
    error::{HrError, HrResult},
    store::Choice,
};

pub trait Prompter {
    /// Single choice out of `labels`; returns the chosen index.
    fn select(&mut self, message: &str, labels: &[&str]) -> HrResult<usize>;
    /// Free-text answer, without the trailing newline.
    fn input(&mut self, message: &str) -> HrResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, message: &str, labels: &[&str]) -> HrResult<usize> {
        (**self).select(message, labels)
    }

    fn input(&mut self, message: &str) -> HrResult<String> {
        (**self).input(message)
    }
}

/// Presents `choices` and returns the value behind the picked label.
/// `what` names the list in the error when there is nothing to pick.
pub fn pick<T: Clone>(
    prompter: &mut dyn Prompter,
    message: &str,
    choices: &[Choice<T>],
    what: &'static str,
) -> HrResult<T> {
    if choices.is_empty() {
        return Err(HrError::NoChoices(what));
    }
    let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
    let index = prompter.select(message, &labels)?;
    choices
        .get(index)
        .map(|choice| choice.value.clone())
        .ok_or_else(|| HrError::invalid(format!("selection {index} is out of range")))
}

/// Line-oriented prompter: numbered lists, answered by number or by label.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> HrResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(HrError::PromptClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

fn resolve_choice(answer: &str, labels: &[&str]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=labels.len()).contains(&number).then(|| number - 1);
    }
    labels
        .iter()
        .position(|label| label.eq_ignore_ascii_case(answer))
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn select(&mut self, message: &str, labels: &[&str]) -> HrResult<usize> {
        writeln!(self.output, "? {message}")?;
        for (idx, label) in labels.iter().enumerate() {
            writeln!(self.output, "  {:>2}) {label}", idx + 1)?;
        }
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let answer = self.read_line()?;
            if let Some(index) = resolve_choice(&answer, labels) {
                return Ok(index);
            }
            writeln!(
                self.output,
                "  Please enter a number between 1 and {}.",
                labels.len()
            )?;
        }
    }

    fn input(&mut self, message: &str) -> HrResult<String> {
        write!(self.output, "? {message} ")?;
        self.output.flush()?;
        self.read_line()
    }
}
