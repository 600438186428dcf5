use crate::error::{ArcPickError, Result};
use crate::scanner::ArchiveEntry;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Picks the directory a batch is extracted into.
pub trait DestinationResolver {
    /// `indices` is a validated, non-empty 1-based selection into `entries`.
    fn resolve(&self, entries: &[ArchiveEntry], indices: &[usize]) -> Result<PathBuf>;
}

/// Extracts next to the first selected archive.
///
/// An archive with no directory component lives in the current directory, so
/// the batch goes to `.`. The directory must still exist when the batch starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceDirectory;

impl DestinationResolver for SourceDirectory {
    fn resolve(&self, entries: &[ArchiveEntry], indices: &[usize]) -> Result<PathBuf> {
        let first = indices
            .first()
            .and_then(|index| index.checked_sub(1))
            .and_then(|i| entries.get(i))
            .ok_or_else(|| ArcPickError::DestinationUnavailable {
                path: "(no archive selected)".to_string(),
            })?;

        let destination = match first.path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        ensure_directory(&destination)?;
        debug!("Destination for batch: {}", destination.display());
        Ok(destination)
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ArcPickError::DestinationUnavailable {
            path: path.display().to_string(),
        })
    }
}
