use crate::error::{ArcPickError, Result};
use crate::scanner::archive_filter::{ArchiveFilter, ArchiveKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file found during discovery. Immutable; rebuilt on every scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    path: PathBuf,
    kind: Option<ArchiveKind>,
    multipart: bool,
}

impl ArchiveEntry {
    pub fn new(path: PathBuf, filter: &ArchiveFilter) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            kind: ArchiveKind::from_file_name(&name),
            multipart: filter.is_multipart(&name),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `None` for multipart fragments such as `.r01` that no tool is registered for.
    pub fn kind(&self) -> Option<ArchiveKind> {
        self.kind
    }

    pub fn is_multipart(&self) -> bool {
        self.multipart
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct ArchiveScanner {
    filter: ArchiveFilter,
    recursive: bool,
}

impl ArchiveScanner {
    pub fn new(filter: ArchiveFilter) -> Self {
        Self {
            filter,
            recursive: false,
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Lists matching files under `root`.
    ///
    /// Each directory's files come before its subdirectories are entered, and
    /// otherwise keep the order the filesystem returns them in. When `root` is
    /// `.` the leading `./` is dropped from every path.
    pub fn scan_directory<P: AsRef<Path>>(&self, root: P) -> Result<Vec<ArchiveEntry>> {
        let root_path = root.as_ref();

        if !root_path.is_dir() {
            return Err(ArcPickError::InvalidPath {
                path: root_path.display().to_string(),
            });
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(root_path)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()));

        let strip_current_dir = root_path == Path::new(".");
        let mut archives = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(err.into()),
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !is_regular_file(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.matches(&name) {
                continue;
            }

            let path = if strip_current_dir {
                entry
                    .path()
                    .strip_prefix(root_path)
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|_| entry.path().to_path_buf())
            } else {
                entry.path().to_path_buf()
            };

            debug!("Found archive {}", path.display());
            archives.push(ArchiveEntry::new(path, &self.filter));
        }

        debug!(
            "Discovery in {} (recursive: {}) found {} archives",
            root_path.display(),
            self.recursive,
            archives.len()
        );

        Ok(archives)
    }
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Discovers `.zip`, `.tar.gz` and `.rar` files under `root`.
pub fn find_archives<P: AsRef<Path>>(root: P, recursive: bool) -> Result<Vec<ArchiveEntry>> {
    ArchiveScanner::new(ArchiveFilter::default())
        .with_recursive(recursive)
        .scan_directory(root)
}
