use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "arcpick")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Find compressed archives and extract the ones you pick")]
#[command(
    long_about = "ArcPick lists the .zip, .tar.gz and .rar files in a directory (optionally \
                  its whole tree), lets you pick some by number and unpacks each one next \
                  to the first archive you picked using unzip, tar and unrar."
)]
#[command(after_help = "EXAMPLES:\n  \
    arcpick\n  \
    arcpick --dir ~/Downloads --recursive\n  \
    arcpick --multipart --page-size 20\n  \
    ARCPICK_UNRAR=unar arcpick -r")]
pub struct Cli {
    /// Directory to search (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Search subfolders too, without asking
    #[arg(short, long, conflicts_with = "no_recursive")]
    pub recursive: bool,

    /// Search only the top folder, without asking
    #[arg(long)]
    pub no_recursive: bool,

    /// Also list multipart fragments such as .r01 or .zip1
    #[arg(long)]
    pub multipart: bool,

    /// Entries shown before pausing the list
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Program used for .zip archives
    #[arg(long, env = "ARCPICK_UNZIP", value_name = "PROGRAM")]
    pub unzip: Option<String>,

    /// Program used for .tar.gz archives
    #[arg(long, env = "ARCPICK_TAR", value_name = "PROGRAM")]
    pub tar: Option<String>,

    /// Program used for .rar archives
    #[arg(long, env = "ARCPICK_UNRAR", value_name = "PROGRAM")]
    pub unrar: Option<String>,

    /// Output style for messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Log verbosity on stderr (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Colored output with symbols
    Human,
    /// Bare text
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::new();
        config.merge_with_cli_args(&self.create_cli_overrides());
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_root(self.dir.clone())
            .with_recursive(self.recursive_choice())
            .with_include_multipart(self.multipart.then_some(true))
            .with_page_size(self.page_size)
            .with_tools(self.unzip.clone(), self.tar.clone(), self.unrar.clone())
    }

    /// `None` leaves the choice to the interactive prompt.
    pub fn recursive_choice(&self) -> Option<bool> {
        if self.recursive {
            Some(true)
        } else if self.no_recursive {
            Some(false)
        } else {
            None
        }
    }

    pub fn verbosity_level(&self) -> u8 {
        self.verbose
    }
}
