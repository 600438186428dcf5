use crate::error::Result;
use console::Term;
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// Line-based console the session talks through.
pub trait Console {
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Shows `prompt` and reads one answer without its line ending.
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Writes to stdout through `console::Term` and reads answers from stdin.
pub struct TermConsole {
    term: Term,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn colors_supported(&self) -> bool {
        self.term.features().colors_supported()
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.term.write_line(line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.term.write_str(prompt)?;
        self.term.flush()?;

        let answer = read_answer(&mut io::stdin().lock())?;
        if answer.is_none() {
            // Keep the next output off the prompt line.
            self.term.write_line("")?;
        }

        Ok(answer)
    }
}

/// Reads one line; bytes that are not UTF-8 become replacement characters.
fn read_answer<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut buffer = Vec::new();
    if reader.read_until(b'\n', &mut buffer)? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buffer);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// In-memory console fed from a script of answers.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    answers: VecDeque<String>,
    lines: Vec<String>,
    prompts: Vec<String>,
}

impl MemoryConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl Console for MemoryConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}
