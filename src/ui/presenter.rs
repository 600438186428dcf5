use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::scanner::ArchiveEntry;
use crate::ui::console::Console;
use crate::ui::output::Prompter;

pub const PAGE_PROMPT: &str = "Press x to exit, any other key to continue: ";

/// Prints the numbered archive list, pausing after every full page.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    page_size: usize,
}

impl Presenter {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Returns `false` when the user stopped the listing early.
    pub fn display<C: Console>(
        &self,
        ui: &mut Prompter<C>,
        entries: &[ArchiveEntry],
    ) -> Result<bool> {
        ui.header(&format!("Found {} compressed files:", entries.len()))?;

        for (position, entry) in entries.iter().enumerate() {
            let number = position + 1;
            let marker = if entry.is_multipart() { " *" } else { "" };
            ui.line(&format!("{}. {}{}", number, entry.display_path(), marker))?;

            if number % self.page_size == 0 {
                let choice = ui.ask(PAGE_PROMPT)?;
                if choice.eq_ignore_ascii_case("x") {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
