//! The interactive discover → pick → extract loop.

pub mod destination;
pub mod selector;

pub use destination::{DestinationResolver, SourceDirectory};
pub use selector::validate_indices;

use crate::config::Config;
use crate::error::{ArcPickError, Result};
use crate::extractor::{ExtractionEvent, ExtractionReport, Extractor};
use crate::scanner::{ArchiveEntry, ArchiveFilter, ArchiveScanner};
use crate::ui::{Console, Presenter, Prompter};
use std::path::PathBuf;
use tracing::{debug, info};

pub const MODE_PROMPT: &str = "Include subfolders? (y/n): ";
pub const SELECTION_PROMPT: &str =
    "Enter file indices to extract (comma-separated), m to show the list, or x to exit: ";
pub const CONTINUE_PROMPT: &str = "Extract more files? (y/n): ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user typed `x` at the selection prompt.
    Exited,
    NothingFound,
    DestinationUnavailable,
    /// The user declined to extract more.
    Finished,
    InputClosed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    AwaitMode,
    Discover,
    Display,
    AwaitSelection,
    Extract(Vec<usize>),
    AwaitContinue,
    Done(SessionOutcome),
}

/// Holds everything one run needs: the discovered list, the mode flag and
/// the collaborators each state uses.
pub struct Session<C: Console, R: DestinationResolver = SourceDirectory> {
    ui: Prompter<C>,
    extractor: Extractor,
    resolver: R,
    presenter: Presenter,
    filter: ArchiveFilter,
    root: PathBuf,
    recursive: Option<bool>,
    entries: Vec<ArchiveEntry>,
    scan_count: usize,
}

impl<C: Console> Session<C> {
    pub fn new(ui: Prompter<C>, config: &Config) -> Self {
        Self {
            ui,
            extractor: Extractor::with_tools(&config.tools),
            resolver: SourceDirectory,
            presenter: Presenter::new(config.display.page_size),
            filter: ArchiveFilter::new(config.discovery.include_multipart),
            root: config.discovery.root.clone(),
            recursive: config.discovery.recursive,
            entries: Vec::new(),
            scan_count: 0,
        }
    }
}

impl<C: Console, R: DestinationResolver> Session<C, R> {
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_resolver<R2: DestinationResolver>(self, resolver: R2) -> Session<C, R2> {
        Session {
            ui: self.ui,
            extractor: self.extractor,
            resolver,
            presenter: self.presenter,
            filter: self.filter,
            root: self.root,
            recursive: self.recursive,
            entries: self.entries,
            scan_count: self.scan_count,
        }
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    /// Number of discovery passes run so far.
    pub fn scan_count(&self) -> usize {
        self.scan_count
    }

    pub fn console(&self) -> &C {
        self.ui.console()
    }

    /// Runs until a terminal state. Closed input ends the session normally.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut state = State::AwaitMode;

        loop {
            debug!("Session state: {:?}", state);
            state = match self.step(state) {
                Ok(State::Done(outcome)) => {
                    info!("Session finished: {:?}", outcome);
                    return Ok(outcome);
                }
                Ok(next) => next,
                Err(ArcPickError::InputClosed) => {
                    info!("Input closed, ending session");
                    return Ok(SessionOutcome::InputClosed);
                }
                Err(err) => return Err(err),
            };
        }
    }

    fn step(&mut self, state: State) -> Result<State> {
        match state {
            State::AwaitMode => {
                if self.recursive.is_none() {
                    self.recursive = Some(self.ui.confirm(MODE_PROMPT)?);
                }
                Ok(State::Discover)
            }
            State::Discover => self.discover(),
            State::Display => {
                self.presenter.display(&mut self.ui, &self.entries)?;
                Ok(State::AwaitSelection)
            }
            State::AwaitSelection => self.await_selection(),
            State::Extract(indices) => self.extract(&indices),
            State::AwaitContinue => {
                if self.ui.confirm(CONTINUE_PROMPT)? {
                    Ok(State::Display)
                } else {
                    Ok(State::Done(SessionOutcome::Finished))
                }
            }
            State::Done(outcome) => Ok(State::Done(outcome)),
        }
    }

    fn discover(&mut self) -> Result<State> {
        let recursive = self.recursive.unwrap_or(false);
        let scanner = ArchiveScanner::new(self.filter.clone()).with_recursive(recursive);

        self.entries = scanner.scan_directory(&self.root)?;
        self.scan_count += 1;

        if self.entries.is_empty() {
            self.ui.info("No compressed files found.")?;
            return Ok(State::Done(SessionOutcome::NothingFound));
        }

        Ok(State::Display)
    }

    fn await_selection(&mut self) -> Result<State> {
        let answer = self.ui.ask(SELECTION_PROMPT)?;

        if answer.eq_ignore_ascii_case("x") {
            self.ui.line("Exiting without extracting files.")?;
            return Ok(State::Done(SessionOutcome::Exited));
        }

        if answer.eq_ignore_ascii_case("m") {
            return Ok(State::Display);
        }

        match validate_indices(&self.entries, &answer) {
            Ok(indices) => Ok(State::Extract(indices)),
            Err(err) => {
                debug!("Rejected selection {:?}: {}", answer, err);
                self.ui.error(&err.to_string())?;
                self.ui.warning("Invalid indices, please try again.")?;
                Ok(State::AwaitSelection)
            }
        }
    }

    fn extract(&mut self, indices: &[usize]) -> Result<State> {
        let destination = match self.resolver.resolve(&self.entries, indices) {
            Ok(destination) => destination,
            Err(err) => {
                self.ui.print_user_friendly_error(&err)?;
                return Ok(State::Done(SessionOutcome::DestinationUnavailable));
            }
        };

        self.ui.info(&format!(
            "Extracting {} archive(s) into {}",
            indices.len(),
            destination.display()
        ))?;

        let ui = &mut self.ui;
        let mut write_error = None;
        let report = self.extractor.extract(
            &self.entries,
            indices,
            &destination,
            &mut |event| {
                if let Err(err) = render_event(&mut *ui, event) {
                    write_error.get_or_insert(err);
                }
            },
        );
        if let Some(err) = write_error {
            return Err(err);
        }

        self.print_summary(&report)?;
        Ok(State::AwaitContinue)
    }

    fn print_summary(&mut self, report: &ExtractionReport) -> Result<()> {
        if report.has_failures() || !report.unsupported.is_empty() {
            self.ui.info(&format!(
                "{} extracted, {} failed, {} skipped",
                report.extracted.len(),
                report.failed.len(),
                report.unsupported.len()
            ))?;
        }
        self.ui.success("Done.")
    }
}

fn render_event<C: Console>(ui: &mut Prompter<C>, event: ExtractionEvent<'_>) -> Result<()> {
    match event {
        ExtractionEvent::Extracted { entry } => {
            ui.success(&format!("Extracted: {}", entry.display_path()))
        }
        ExtractionEvent::Failed { entry, error } => {
            ui.error(&format!("Error extracting {}: {}", entry.display_path(), error))
        }
        ExtractionEvent::Unsupported { entry } => {
            ui.warning(&format!("Unsupported format: {}", entry.display_path()))
        }
    }
}
