use crate::error::{ArcPickError, Result, UserFriendlyError};
use crate::ui::console::Console;
use console::{style, Emoji};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
}

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");
static PACKAGE: Emoji = Emoji("📦 ", "");

#[derive(Debug, Clone, Copy)]
enum MessageType {
    Success,
    Error,
    Warning,
    Info,
}

/// Turns messages into display lines for the selected output mode.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    mode: OutputMode,
    use_colors: bool,
}

impl OutputFormatter {
    pub fn new(mode: OutputMode, colors_supported: bool) -> Self {
        Self {
            mode,
            use_colors: mode == OutputMode::Human && colors_supported,
        }
    }

    pub fn plain() -> Self {
        Self::new(OutputMode::Plain, false)
    }

    pub fn success(&self, message: &str) -> String {
        self.render(MessageType::Success, message)
    }

    pub fn error(&self, message: &str) -> String {
        self.render(MessageType::Error, message)
    }

    pub fn warning(&self, message: &str) -> String {
        self.render(MessageType::Warning, message)
    }

    pub fn info(&self, message: &str) -> String {
        self.render(MessageType::Info, message)
    }

    pub fn header(&self, title: &str) -> String {
        match (self.mode, self.use_colors) {
            (OutputMode::Human, true) => format!("{}{}", PACKAGE, style(title).bold().cyan()),
            _ => title.to_string(),
        }
    }

    pub fn prompt(&self, question: &str) -> String {
        if self.use_colors {
            style(question).bold().to_string()
        } else {
            question.to_string()
        }
    }

    fn render(&self, msg_type: MessageType, message: &str) -> String {
        match self.mode {
            OutputMode::Plain => message.to_string(),
            OutputMode::Human if self.use_colors => match msg_type {
                MessageType::Success => format!("{}{}", CHECKMARK, style(message).green()),
                MessageType::Error => format!("{}{}", CROSS, style(message).red().bold()),
                MessageType::Warning => format!("{}{}", WARNING, style(message).yellow()),
                MessageType::Info => style(message).cyan().to_string(),
            },
            OutputMode::Human => {
                let prefix = match msg_type {
                    MessageType::Success => "✓ ",
                    MessageType::Error => "✗ ",
                    MessageType::Warning => "! ",
                    MessageType::Info => "",
                };
                format!("{}{}", prefix, message)
            }
        }
    }
}

/// Console paired with a formatter; everything the session shows goes through here.
pub struct Prompter<C: Console> {
    console: C,
    formatter: OutputFormatter,
}

impl<C: Console> Prompter<C> {
    pub fn new(console: C, formatter: OutputFormatter) -> Self {
        Self { console, formatter }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        self.console.write_line(text)
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        let text = self.formatter.header(title);
        self.console.write_line(&text)
    }

    pub fn success(&mut self, message: &str) -> Result<()> {
        let text = self.formatter.success(message);
        self.console.write_line(&text)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        let text = self.formatter.error(message);
        self.console.write_line(&text)
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        let text = self.formatter.warning(message);
        self.console.write_line(&text)
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        let text = self.formatter.info(message);
        self.console.write_line(&text)
    }

    pub fn print_user_friendly_error(&mut self, error: &ArcPickError) -> Result<()> {
        self.error(&error.user_message())?;
        if let Some(suggestion) = error.suggestion() {
            self.info(&format!("Suggestion: {}", suggestion))?;
        }
        Ok(())
    }

    /// Asks a question and returns the answer with surrounding whitespace removed.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        let prompt = self.formatter.prompt(question);
        match self.console.read_line(&prompt)? {
            Some(answer) => Ok(answer.trim().to_string()),
            None => Err(ArcPickError::InputClosed),
        }
    }

    /// `true` when the answer starts with `y` or `Y`.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::console::MemoryConsole;

    #[test]
    fn test_plain_mode_is_bare_text() {
        let formatter = OutputFormatter::new(OutputMode::Plain, true);
        assert_eq!(formatter.success("Done."), "Done.");
        assert_eq!(formatter.error("Oops"), "Oops");
        assert_eq!(formatter.header("Found 2 compressed files:"), "Found 2 compressed files:");
    }

    #[test]
    fn test_human_without_colors_uses_prefixes() {
        let formatter = OutputFormatter::new(OutputMode::Human, false);
        assert_eq!(formatter.success("Extracted: a.zip"), "✓ Extracted: a.zip");
        assert_eq!(formatter.error("Error extracting b.zip"), "✗ Error extracting b.zip");
        assert_eq!(formatter.warning("careful"), "! careful");
        assert_eq!(formatter.info("note"), "note");
    }

    #[test]
    fn test_ask_trims_and_reports_closed_input() {
        let mut prompter = Prompter::new(MemoryConsole::new(["  2 , 3  "]), OutputFormatter::plain());
        assert_eq!(prompter.ask("Pick: ").unwrap(), "2 , 3");
        assert!(matches!(prompter.ask("Pick: "), Err(ArcPickError::InputClosed)));
    }

    #[test]
    fn test_confirm_accepts_any_yes() {
        let mut prompter = Prompter::new(
            MemoryConsole::new(["y", "Yes", "n", "", "maybe"]),
            OutputFormatter::plain(),
        );
        assert!(prompter.confirm("?").unwrap());
        assert!(prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
        assert!(!prompter.confirm("?").unwrap());
    }

    #[test]
    fn test_user_friendly_error_includes_suggestion() {
        let mut prompter = Prompter::new(MemoryConsole::default(), OutputFormatter::plain());
        let error = ArcPickError::NotAnIndex {
            token: "abc".to_string(),
        };
        prompter.print_user_friendly_error(&error).unwrap();

        let lines = prompter.console().lines();
        assert_eq!(lines[0], "Invalid index: abc");
        assert!(lines[1].starts_with("Suggestion:"));
    }
}
