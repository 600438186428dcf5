pub mod archive_filter;
pub mod archive_scanner;

pub use archive_filter::{ArchiveFilter, ArchiveKind};
pub use archive_scanner::{find_archives, ArchiveEntry, ArchiveScanner};
