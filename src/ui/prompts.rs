//! ui::prompts
//!
//! Line-oriented prompts.
//!
//! # Design
//!
//! A [`Prompter`] wraps any reader/writer pair, so the shell can be driven
//! by stdin in a terminal and by a byte slice in tests. In non-interactive
//! mode prompt text is not written, but input is still read; that lets
//! scripted input be piped in without the prompts cluttering the output.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input ended")]
    Eof,

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Reads answers from `input`, writing prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Access the output stream (for messages that are not prompts).
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompt for a line of text. The trailing newline is stripped and
    /// surrounding whitespace trimmed.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing.
    ///
    /// Returns `PromptError::Eof` when the input is exhausted.
    pub fn input(&mut self, message: &str) -> Result<String, PromptError> {
        if self.interactive {
            write!(self.output, "{}", message)?;
            self.output.flush()?;
        }
        // Lossy so a non-UTF-8 line is rejected by the caller, not fatal.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    /// Prompt until `parse` accepts the answer.
    ///
    /// Rejected answers print the parse error and ask again.
    pub fn parsed<T, E: std::fmt::Display>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, PromptError> {
        loop {
            let answer = self.input(message)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
            }
        }
    }

    /// Prompt for yes/no. An empty answer takes `default`.
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.input(&format!("{} {} ", message, hint))?;
        Ok(match answer.to_ascii_lowercase().as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }
}
