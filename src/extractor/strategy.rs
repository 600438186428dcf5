use crate::error::{ArcPickError, Result};
use crate::scanner::ArchiveKind;
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Unpacks one archive into an existing directory.
pub trait ExtractionStrategy {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()>;

    /// Short label used in log lines.
    fn name(&self) -> &str;
}

/// Runs a command-line extraction tool and waits for it to finish.
///
/// Argument layout per kind:
/// - zip: `<program> <file> -d <destination>`
/// - tar.gz: `<program> xzvf <file> -C <destination>`
/// - rar: `<program> x <file> <destination>`
#[derive(Debug, Clone)]
pub struct ExternalTool {
    kind: ArchiveKind,
    program: String,
}

impl ExternalTool {
    pub fn new<S: Into<String>>(kind: ArchiveKind, program: S) -> Self {
        Self {
            kind,
            program: program.into(),
        }
    }

    pub fn args(&self, archive: &Path, destination: &Path) -> Vec<OsString> {
        let archive = operand(archive);
        let destination = operand(destination);

        match self.kind {
            ArchiveKind::Zip => vec![archive, "-d".into(), destination],
            ArchiveKind::TarGz => vec!["xzvf".into(), archive, "-C".into(), destination],
            ArchiveKind::Rar => vec!["x".into(), archive, destination],
        }
    }

    fn command(&self, archive: &Path, destination: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args(archive, destination));
        command
    }
}

/// Spells a path so a tool cannot mistake it for an option.
///
/// Bare relative names and relative paths starting with `-` get a leading `./`.
fn operand(path: &Path) -> OsString {
    let bare = path.parent().map_or(true, |p| p.as_os_str().is_empty());
    let dashed = path.as_os_str().to_string_lossy().starts_with('-');

    if path.is_relative() && (bare || dashed) && path != Path::new(".") {
        Path::new(".").join(path).into_os_string()
    } else {
        path.as_os_str().to_os_string()
    }
}

impl ExtractionStrategy for ExternalTool {
    fn extract(&self, archive: &Path, destination: &Path) -> Result<()> {
        debug!(
            "Running {} {:?}",
            self.program,
            self.args(archive, destination)
        );

        let status = self
            .command(archive, destination)
            .status()
            .map_err(|source| ArcPickError::ToolLaunch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ArcPickError::ToolFailed {
                program: self.program.clone(),
                status: status.to_string(),
            })
        }
    }

    fn name(&self) -> &str {
        &self.program
    }
}
