pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod scanner;
pub mod session;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, DiscoveryConfig, DisplayConfig, ToolConfig};
pub use error::{ArcPickError, Result, UserFriendlyError};

// Core functionality re-exports
pub use extractor::{ExternalTool, ExtractionEvent, ExtractionReport, ExtractionStrategy, Extractor};
pub use scanner::{find_archives, ArchiveEntry, ArchiveFilter, ArchiveKind, ArchiveScanner};
pub use session::{
    validate_indices, DestinationResolver, Session, SessionOutcome, SourceDirectory,
};
pub use ui::{Console, MemoryConsole, OutputFormatter, OutputMode, Presenter, Prompter, TermConsole};

/// Main library interface for ArcPick functionality
pub struct ArcPick {
    config: Config,
    output_mode: OutputMode,
}

impl ArcPick {
    /// Create a new ArcPick instance, rejecting an invalid configuration
    pub fn new(config: Config, output_mode: OutputMode) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            output_mode,
        })
    }

    /// Create ArcPick instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(config, output_mode)
    }

    /// Run an interactive session on the terminal
    pub fn run(&self) -> Result<SessionOutcome> {
        let console = TermConsole::new();
        let formatter = OutputFormatter::new(self.output_mode, console.colors_supported());
        self.run_on(console, formatter)
    }

    /// Run a session against any console, e.g. a scripted one
    pub fn run_on<C: Console>(&self, console: C, formatter: OutputFormatter) -> Result<SessionOutcome> {
        let mut session = Session::new(Prompter::new(console, formatter), &self.config);
        session.run()
    }

    /// Get configuration reference
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
