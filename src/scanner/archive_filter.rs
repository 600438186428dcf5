use regex::Regex;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

/// Trailing name patterns of the first or a follow-up volume of a split archive.
static MULTIPART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\.part1\.rar|\.r01|\.zip1|\.tar\.gz1)$").expect("valid multipart regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    Zip,
    TarGz,
    Rar,
}

impl ArchiveKind {
    pub const ALL: [ArchiveKind; 3] = [ArchiveKind::Zip, ArchiveKind::TarGz, ArchiveKind::Rar];

    pub fn suffix(self) -> &'static str {
        match self {
            ArchiveKind::Zip => ".zip",
            ArchiveKind::TarGz => ".tar.gz",
            ArchiveKind::Rar => ".rar",
        }
    }

    /// Classifies by file name suffix, ignoring ASCII case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| name.ends_with(kind.suffix()))
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|n| n.to_str())
            .and_then(Self::from_file_name)
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Decides which file names count as archives during discovery.
#[derive(Debug, Clone, Default)]
pub struct ArchiveFilter {
    include_multipart: bool,
}

impl ArchiveFilter {
    pub fn new(include_multipart: bool) -> Self {
        Self { include_multipart }
    }

    pub fn is_archive(&self, file_name: &str) -> bool {
        ArchiveKind::from_file_name(file_name).is_some()
    }

    pub fn is_multipart(&self, file_name: &str) -> bool {
        MULTIPART_RE.is_match(file_name)
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.is_archive(file_name) || (self.include_multipart && self.is_multipart(file_name))
    }
}
