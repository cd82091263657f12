use std::io::{self, BufRead, Stdin, Stdout, Write};

use colored::Colorize;
use error_stack::{Result, ResultExt};

use super::{ApiKey, CredentialError, CredentialSource};

const PROMPT: &str = "👉 Paste your API Key here: ";

/// Anything the prompt can read a single line from.
pub trait ReadLine {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

/// Locks stdin only for the duration of one read, so later Enter pauses can lock it again.
impl ReadLine for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl ReadLine for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Asks the user to paste the key on the terminal.
pub struct InteractivePrompt<R, W> {
    input: R,
    output: W,
}

impl InteractivePrompt<Stdin, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: ReadLine, W: Write> InteractivePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: ReadLine, W: Write> CredentialSource for InteractivePrompt<R, W> {
    fn name(&self) -> &'static str {
        "interactive prompt"
    }

    fn load(&mut self) -> Result<Option<ApiKey>, CredentialError> {
        write!(self.output, "{}", PROMPT.white())
            .and_then(|_| self.output.flush())
            .change_context(CredentialError::Prompt)?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .change_context(CredentialError::Prompt)?;
        if read == 0 {
            return Err(CredentialError::PromptClosed.into());
        }

        Ok(Some(ApiKey::new(&line)))
    }
}
